use url::Url;

use crate::error::{Error, Result};

/// Parse the command-line target into a URL the fetcher will accept.
pub fn parse_target(raw: &str) -> Result<Url> {
    let parsed = Url::parse(raw.trim())?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(Error::UnsupportedScheme(other.to_string())),
    }
}
