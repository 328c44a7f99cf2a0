//! Print the German public holidays as a timewarrior holiday file.
//!
//! Redirect the output into a file timewarrior imports, e.g.
//! `refresh-holidays-de --state BY > holidays.de-DE`.

mod logger;

use std::io::Write;

use anyhow::Result;
use chrono::Datelike;
use clap::Parser;
use rhd_core::{holiday_client, Location, State};

static STATE_HELP: &str = "The two letter abbreviation of a German state, all states if omitted";

/// List every state with its name, one per line.
fn state_long_help() -> String {
    let states: Vec<String> = State::ALL
        .iter()
        .map(|state| format!("    {}: {}", state.code(), state.name()))
        .collect();
    format!(
        "{STATE_HELP}\n\n{}\n\nUnknown abbreviations fall back to all states.",
        states.join("\n")
    )
}

#[derive(Debug, Parser)]
#[command(version, about = "Retrieve the German holidays for timewarrior")]
pub struct Arguments {
    #[arg(long, help = STATE_HELP, long_help = state_long_help())]
    pub state: Option<String>,
    /// The year for which holidays shall be returned, the current year if omitted
    #[arg(long, value_parser = clap::value_parser!(i32).range(1000..=9999))]
    pub year: Option<i32>,
    /// log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Arguments {
    fn location(&self) -> Location {
        let location = Location::from_code(self.state.as_deref());
        if let (Some(state), Location::All) = (&self.state, location) {
            tracing::warn!(state, "unknown state, falling back to all states");
        }
        location
    }

    fn year(&self) -> i32 {
        self.year.unwrap_or_else(|| chrono::Local::now().year())
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Arguments::parse();
    logger::init_cli_logger(args.verbose);
    tracing::debug!(?args, "parsed arguments");
    let holidays = holiday_client::get(args.location(), args.year()).await?;
    write_holidays(&mut std::io::stdout().lock(), &holidays)?;
    Ok(())
}

/// Write the holiday file followed by a closing newline.
fn write_holidays(out: &mut impl Write, holidays: &str) -> std::io::Result<()> {
    writeln!(out, "{holidays}")
}

#[cfg(test)]
mod tests {
    use chrono::Datelike;
    use clap::{CommandFactory, Parser};
    use rhd_core::{holiday_client::build_url, Location, State};

    use crate::{write_holidays, Arguments};

    #[test]
    fn test_state_and_year() {
        let args = Arguments::try_parse_from(["rhd", "--state", "BY", "--year", "2023"]).unwrap();
        assert_eq!(args.location(), Location::State(State::BY));
        assert_eq!(args.year(), 2023);
        let url = build_url(args.location(), args.year());
        assert!(url.contains("loc=BY"));
        assert!(url.contains("jahr=2023"));
    }

    #[test]
    fn test_lowercase_state() {
        let args = Arguments::try_parse_from(["rhd", "--state", "nw"]).unwrap();
        assert_eq!(args.location(), Location::State(State::NW));
    }

    #[test]
    fn test_defaults() {
        let args = Arguments::try_parse_from(["rhd"]).unwrap();
        assert_eq!(args.location(), Location::All);
        assert_eq!(args.year(), chrono::Local::now().year());
        assert!(!args.verbose);
        let url = build_url(args.location(), args.year());
        for state in State::ALL {
            assert!(url.contains(state.code()));
        }
        assert!(url.ends_with(&format!("jahr={}", chrono::Local::now().year())));
    }

    #[test]
    fn test_unknown_state_falls_back() {
        let args = Arguments::try_parse_from(["rhd", "--state", "Bavaria"]).unwrap();
        assert_eq!(args.location(), Location::All);
    }

    #[test]
    fn test_invalid_year() {
        assert!(Arguments::try_parse_from(["rhd", "--year", "twenty"]).is_err());
        assert!(Arguments::try_parse_from(["rhd", "--year", "99"]).is_err());
        assert!(Arguments::try_parse_from(["rhd", "--year", "20233"]).is_err());
    }

    #[test]
    fn test_help_and_version() {
        let err = Arguments::try_parse_from(["rhd", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
        let err = Arguments::try_parse_from(["rhd", "-h"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
        let err = Arguments::try_parse_from(["rhd", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_unexpected_flag() {
        assert!(Arguments::try_parse_from(["rhd", "--output", "holidays.de-DE"]).is_err());
    }

    #[test]
    fn test_help_lists_states() {
        let long_help = Arguments::command().render_long_help().to_string();
        for state in State::ALL {
            assert!(long_help.contains(&format!("{}: {}", state.code(), state.name())));
        }
        assert!(long_help.contains("TH: Thüringen"));
        let help = Arguments::command().render_help().to_string();
        assert!(help.contains("all states if omitted"));
        assert!(!help.contains("Thüringen"));
    }

    #[test]
    fn test_write_holidays() {
        let mut out = Vec::new();
        write_holidays(&mut out, "define holidays:\n  de-DE:\n    2024_01_01 = Neujahr\n").unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "define holidays:\n  de-DE:\n    2024_01_01 = Neujahr\n\n"
        );
    }
}
