//! This client fetches holidays from the ipty.de API.

use serde::Deserialize;

use crate::{timewarrior, Error, Location, Result};

pub static URL: &str = "https://ipty.de/feiertag/api.php";
static OPERATION: &str = "getFeiertage";
/// Passed to the API verbatim, it is the API's own date format token.
static OUTPUT_DATE_FORMAT: &str = "Y-m-d";

/// A single holiday as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Holiday {
    /// The date as `YYYY-MM-DD`.
    pub date: String,
    pub title: String,
}

/// Get the timewarrior holiday file for a location and year.
pub async fn get(location: Location, year: i32) -> Result<String> {
    get_from(URL, location, year).await
}

/// Like [`get`], but against another endpoint.
pub async fn get_from(endpoint: &str, location: Location, year: i32) -> Result<String> {
    let url = build_url_for(endpoint, location, year);
    let holidays = fetch(&url).await?;
    let header = timewarrior::build_header(&url, chrono::Local::now().naive_local());
    Ok(timewarrior::format_output(&header, &holidays))
}

/// Build the API URL for a location and year.
pub fn build_url(location: Location, year: i32) -> String {
    build_url_for(URL, location, year)
}

/// Build the URL for a location and year against `endpoint`.
///
/// The location is not percent-encoded, the API expects plain commas between codes.
pub fn build_url_for(endpoint: &str, location: Location, year: i32) -> String {
    format!("{endpoint}?do={OPERATION}&loc={location}&outformat={OUTPUT_DATE_FORMAT}&jahr={year}")
}

/// Fetch the holidays listed at `url`.
///
/// Any transport error, non-success status or undecodable body fails the whole fetch.
pub async fn fetch(url: &str) -> Result<Vec<Holiday>> {
    let client = reqwest::Client::new();
    tracing::debug!(url, "requesting holidays");
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        tracing::warn!(%status, url, "holiday API refused the request");
        return Err(Error::Status {
            status,
            url: url.to_string(),
        });
    }
    // The API sends UTF-8 whatever charset it declares.
    let body = response.bytes().await?;
    let holidays = parse(&body)?;
    tracing::info!(count = holidays.len(), "fetched holidays");
    Ok(holidays)
}

/// Parse the body strictly as UTF-8 JSON, invalid bytes fail the parse.
fn parse(json: &[u8]) -> Result<Vec<Holiday>> {
    Ok(serde_json::from_slice(json)?)
}
