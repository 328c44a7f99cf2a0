//! Rendering of holidays in timewarrior's holiday file syntax.

use chrono::NaiveDateTime;

use crate::Holiday;

static SOURCE: &str = "ipty.de";
static LOCALE: &str = "de-DE";
static TIMESTAMP_FORMAT: &str = "%c";

/// Build the comment header and the section opener of a holiday file.
///
/// The header names the data source, echoes `url` and states when it was generated.
pub fn build_header(url: &str, now: NaiveDateTime) -> String {
    format!(
        "# Holiday data provided by {SOURCE}\n\
         #\t{url}\n\
         #\tGenerated {}\n\
         \n\
         define holidays:\n  {LOCALE}:\n",
        now.format(TIMESTAMP_FORMAT)
    )
}

/// Append one line per holiday to the header, keeping the order of `holidays`.
pub fn format_output(header: &str, holidays: &[Holiday]) -> String {
    let mut output = String::from(header);
    for holiday in holidays {
        output.push_str(&format_holiday(holiday));
    }
    output
}

/// timewarrior reads dates as `YYYY_MM_DD`.
fn format_holiday(holiday: &Holiday) -> String {
    format!("    {} = {}\n", holiday.date.replace('-', "_"), holiday.title)
}
