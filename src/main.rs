use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use cnbrates::cli::rates::OutputFormat;
use cnbrates::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Display the exchange rates published for a day
    Rates {
        /// Date to fetch, e.g. 2024-01-15. Defaults to today
        #[arg(short, long)]
        date: Option<String>,

        /// Only show rates between these currencies (repeatable)
        #[arg(long = "currency", value_name = "CODE")]
        currencies: Vec<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => cnbrates::cli::setup::setup(),
        Some(Commands::Rates {
            date,
            currencies,
            json,
        }) => {
            let args = cnbrates::RatesArgs {
                date,
                currencies,
                format: if json {
                    OutputFormat::Json
                } else {
                    OutputFormat::Table
                },
            };
            cnbrates::run_command(cnbrates::AppCommand::Rates(args), cli.config_path.as_deref())
                .await
        }
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
