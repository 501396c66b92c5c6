use log::debug;
use reqwest::Client;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::page::target::parse_target;

/// Issues the single GET for a run.
///
/// No retries and no timeout beyond what reqwest does by default.
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client })
    }

    /// Fetch `raw_url` and return the body as text.
    ///
    /// The body is treated as HTML whatever its declared content type. Any
    /// non-2xx status is an error.
    pub async fn fetch(&self, raw_url: &str) -> Result<String> {
        let url = parse_target(raw_url)?;
        debug!("GET {}", url);

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.text().await?;
        debug!("Received {} bytes from {}", body.len(), url);
        Ok(body)
    }
}
