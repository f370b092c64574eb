//! Status command - show stored and pending report counts

use crate::cli::style::Stylize;
use anstream::println;
use geosubmit_upload::config::resolve_store_path;
use geosubmit_upload::error::Result;
use geosubmit_upload::store::JsonReportStore;
use geosubmit_upload::submit::{MIN_REPORTS_TO_SEND, sample_size};

/// Run the status command
pub async fn run_status(store_path: Option<std::path::PathBuf>) -> Result<()> {
    let path = resolve_store_path(store_path)?;
    let store = JsonReportStore::open(&path);
    let (total, pending) = store.count_reports().await?;

    println!("{}", path.display().muted());
    println!("Reports:  {}", total.accent());
    println!("Pending:  {}", pending.accent());

    if pending > MIN_REPORTS_TO_SEND {
        println!(
            "{}",
            format!(
                "A sampled upload would send {} reports",
                sample_size(pending).min(pending)
            )
            .muted()
        );
    }

    Ok(())
}
