mod analyze;
mod batch;
mod report;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "leadscope")]
#[command(about = "Analyze small-business websites and score redesign leads")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch and analyze a single website
    Analyze {
        /// Website to analyze; `https://` is assumed when no scheme is given
        url: String,
        /// Print the full analysis as JSON
        #[arg(long)]
        json: bool,
    },
    /// Analyze every business in the businesses file and write the outputs
    Batch {
        /// Businesses YAML file (defaults to `LEADSCOPE_BUSINESSES_PATH`)
        #[arg(long)]
        input: Option<PathBuf>,
        /// Output directory (defaults to `LEADSCOPE_OUTPUT_DIR`)
        #[arg(long)]
        output: Option<PathBuf>,
        /// List the businesses that would be analyzed without fetching
        #[arg(long)]
        dry_run: bool,
    },
    /// Print the batch report for the stored leads
    Report {
        /// Lead store CSV (defaults to `LEADSCOPE_LEADS_PATH`)
        #[arg(long)]
        input: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = leadscope_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Analyze { url, json } => analyze::run_analyze(&config, &url, json).await,
        Commands::Batch {
            input,
            output,
            dry_run,
        } => batch::run_batch(&config, input.as_deref(), output.as_deref(), dry_run).await,
        Commands::Report { input } => report::run_report(&config, input.as_deref()),
    }
}

#[cfg(test)]
mod tests;
