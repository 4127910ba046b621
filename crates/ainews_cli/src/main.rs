use std::sync::Arc;
use std::time::Duration;

use ainews_core::config::{Settings, SEARCH_TIMEOUT_SECS};
use ainews_core::InferenceModel;
use ainews_inference::Config as InferenceConfig;
use ainews_pipeline::{init_logging, Coordinator, Curator, Distributor};
use ainews_search::DuckDuckGoSearch;
use ainews_slack::SlackClient;
use anyhow::Context;
use clap::Parser;
use tracing::info;

/// Search the web for the last day of AI news, summarize it and post the
/// digest to the #ai Slack channel.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print the digest to stdout instead of posting it
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let logger = init_logging().with_prefix("[ainews]");

    match dotenvy::dotenv() {
        Ok(path) => info!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => return Err(e).context("Failed to read .env file"),
    }
    let settings = Settings::from_env();
    logger.debug(&format!("Settings: {:?}", settings));

    let search = DuckDuckGoSearch::new(Duration::from_secs(SEARCH_TIMEOUT_SECS))
        .context("Failed to build search client")?;
    let model = ainews_inference::create_model(Some(InferenceConfig::from(&settings)))
        .context("Failed to build inference model")?;
    info!("🧠 Inference model initialized (using {})", model.name());
    let messenger = SlackClient::new(settings.slack_token.clone());

    let coordinator = Coordinator::new(
        Curator::new(Arc::new(search), model),
        Distributor::new(Arc::new(messenger)),
    )
    .with_dry_run(cli.dry_run);

    let report = coordinator.run().await.context("News pipeline failed")?;
    if report.delivery.is_none() {
        println!("{}", report.digest);
    }
    logger.info(&format!("🏁 Finished with {} items", report.digest.items.len()));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_runs_for_real() {
        let cli = Cli::try_parse_from(["ainews"]).unwrap();
        assert!(!cli.dry_run);

        let cli = Cli::try_parse_from(["ainews", "--dry-run"]).unwrap();
        assert!(cli.dry_run);

        assert!(Cli::try_parse_from(["ainews", "scrape"]).is_err());
    }
}
