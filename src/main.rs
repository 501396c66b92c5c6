use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use pagejson::{App, Config};

#[derive(Parser)]
#[command(name = "pagejson", version, about)]
struct Cli {
    /// URL to make the HTTP request to
    url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    info!("Fetching {}", cli.url);

    // Fetch and write failures are logged inside the run and do not change
    // the exit code.
    App::new(config)
        .context("Failed to set up HTTP client")?
        .run(&cli.url)
        .await;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn url_is_required() {
        assert!(Cli::try_parse_from(["pagejson"]).is_err());

        let cli = Cli::try_parse_from(["pagejson", "https://example.com"]).unwrap();
        assert_eq!(cli.url, "https://example.com");
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(Cli::try_parse_from(["pagejson", "--output", "x", "https://example.com"]).is_err());
    }
}
