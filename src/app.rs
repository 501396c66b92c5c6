use std::path::PathBuf;

use log::{error, info};

use crate::config::Config;
use crate::error::Result;
use crate::extract::ContentProcessor;
use crate::output::write_json;
use crate::page::Fetcher;

/// How a run ended. None of these change the process exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Saved(PathBuf),
    /// Nothing was extracted or written
    FetchFailed,
    /// The page was extracted but the file write failed
    WriteFailed,
}

/// One fetch, one extraction, one write.
pub struct App {
    config: Config,
    fetcher: Fetcher,
    processor: ContentProcessor,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let fetcher = Fetcher::new(&config)?;
        Ok(Self {
            config,
            fetcher,
            processor: ContentProcessor::new(),
        })
    }

    pub async fn run(&self, url: &str) -> RunOutcome {
        let html = match self.fetcher.fetch(url).await {
            Ok(html) => html,
            Err(e) => {
                error!("Error fetching the URL {}: {}", url, e);
                return RunOutcome::FetchFailed;
            }
        };

        info!("Response received. Parsing HTML...");
        let result = self.processor.extract(&html);

        let path = &self.config.output_path;
        match write_json(path, &result).await {
            Ok(()) => {
                info!("JSON file has been saved as {}", path.display());
                RunOutcome::Saved(path.clone())
            }
            Err(e) => {
                error!("Failed to write JSON file: {}", e);
                RunOutcome::WriteFailed
            }
        }
    }
}
