pub mod cli;
pub mod core;
pub mod providers;

pub use crate::core::config;

use crate::cli::rates::OutputFormat;
use crate::core::Currency;
use crate::providers::CnbRateProvider;
use anyhow::{Context, Result};
use tracing::{debug, info};

const USER_AGENT: &str = concat!("cnbrates/", env!("CARGO_PKG_VERSION"));

/// Arguments of the `rates` command.
#[derive(Debug, Default)]
pub struct RatesArgs {
    /// Defaults to today's local date
    pub date: Option<String>,
    /// Overrides the `currencies` filter from the config when non-empty
    pub currencies: Vec<String>,
    pub format: OutputFormat,
}

#[derive(Debug)]
pub enum AppCommand {
    Rates(RatesArgs),
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("cnbrates starting...");

    let config = match config_path {
        Some(path) => config::AppConfig::load_from_path(path)?,
        None => config::AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    match command {
        AppCommand::Rates(args) => {
            let output = rates(&config, args).await?;
            println!("{output}");
        }
    }

    Ok(())
}

async fn rates(config: &config::AppConfig, args: RatesArgs) -> Result<String> {
    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .context("Failed to build HTTP client")?;
    let provider = CnbRateProvider::new(client, config.cnb_api.clone())?;

    let date = args
        .date
        .unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string());
    let currencies: Vec<Currency> = if args.currencies.is_empty() {
        config.currencies.clone()
    } else {
        args.currencies.into_iter().map(Currency::from).collect()
    };

    cli::rates::fetch_and_render(&provider, &date, &currencies, args.format).await
}
