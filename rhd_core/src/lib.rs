//! This crate fetches German public holidays and renders them as a timewarrior holiday file.
//!
//! The dates are read from <https://ipty.de/feiertag/api.php>.

pub mod holiday_client;
pub mod state;
pub mod timewarrior;

pub use holiday_client::Holiday;
pub use state::{Location, State};

/// Errors raised while fetching holidays.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The given code names no German state.
    #[error("unknown state code {0:?}")]
    UnknownState(String),
    /// The request could not be sent or its body could not be read.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The API answered with a non-success status.
    #[error("{url} answered with status {status}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
    /// The response body is not a list of holidays.
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
