//! geosubmit - upload stored geolocation reports
//!
//! CLI binary running one submission pass per invocation. Periodic uploads
//! are left to whatever runs the binary (cron, systemd timer, ...).

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

mod cli;

#[derive(Parser)]
#[command(name = "geosubmit")]
#[command(about = "Upload stored geolocation reports to a Geosubmit v2 service")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to the JSON report store
    #[arg(short, long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one upload pass
    Upload {
        /// Send only a sample of the backlog instead of everything
        #[arg(long)]
        sample: bool,

        /// Geosubmit endpoint URL
        #[arg(long)]
        endpoint: Option<String>,

        /// API key sent with the request
        #[arg(long)]
        api_key: Option<String>,

        /// Request timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,
    },

    /// Show how many reports are stored and pending
    Status,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    cli::init_tracing(cli.verbose);

    match cli.command {
        Commands::Upload {
            sample,
            endpoint,
            api_key,
            timeout,
        } => {
            let overrides = geosubmit_upload::config::ConfigOverrides {
                endpoint,
                api_key,
                timeout_secs: timeout,
                store_path: cli.store,
            };
            let outcome = cli::run_upload(overrides, !sample).await?;
            Ok(cli::exit_code(outcome))
        }
        Commands::Status => {
            cli::run_status(cli.store).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
