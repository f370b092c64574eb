//! Upload command - run one submission pass

use crate::cli::progress::CliProgress;
use crate::cli::style::{Stylize, check};
use anstream::{eprintln, println};
use geosubmit_upload::config::{ConfigOverrides, UploadConfig};
use geosubmit_upload::error::Result;
use geosubmit_upload::geosubmit::GeosubmitClient;
use geosubmit_upload::store::JsonReportStore;
use geosubmit_upload::submit::run_submission_pass;
use geosubmit_upload::types::SubmissionOutcome;

/// Run the upload command
pub async fn run_upload(overrides: ConfigOverrides, send_all: bool) -> Result<SubmissionOutcome> {
    let config = UploadConfig::resolve(overrides)?;

    let store = JsonReportStore::open(&config.store_path);
    let client = GeosubmitClient::from_config(&config)?;

    println!(
        "Uploading from {} to {}",
        config.store_path.display().accent(),
        client.endpoint().accent()
    );

    let progress = CliProgress;
    let outcome = run_submission_pass(&store, &client, &progress, send_all).await?;

    match outcome {
        SubmissionOutcome::Succeeded => println!("{} Upload {}", check(), outcome),
        SubmissionOutcome::NoWorkNeeded => println!("{}", outcome.to_string().muted()),
        SubmissionOutcome::RetryableFailure => {
            eprintln!("{}", format!("Upload {outcome}").warn());
        }
        SubmissionOutcome::TerminalFailure => {
            eprintln!("{}", format!("Upload {outcome}").error());
        }
    }

    Ok(outcome)
}
