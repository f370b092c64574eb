//! CLI progress callback with styled output

use crate::cli::style::{Stylize, cross};
use anstream::{eprintln, println};
use async_trait::async_trait;
use geosubmit_upload::geosubmit::SubmitError;
use geosubmit_upload::submit::{Phase, ProgressCallback};

/// CLI progress callback that prints to stdout
pub struct CliProgress;

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_phase(&self, phase: Phase) {
        match phase {
            Phase::Dispatching | Phase::Marking => {
                println!("  {}...", phase.to_string().muted());
            }
            _ => {}
        }
    }

    async fn on_batch_selected(&self, selected: usize, pending: usize) {
        if selected == pending {
            println!(
                "Sending {} report{}",
                selected.accent(),
                if selected == 1 { "" } else { "s" }
            );
        } else {
            println!(
                "Sending {} of {} pending reports",
                selected.accent(),
                pending.accent()
            );
        }
    }

    async fn on_submit_failed(&self, error: &SubmitError, retryable: bool) {
        let kind = if retryable { "retryable" } else { "not retryable" };
        eprintln!(
            "  {} {}: {}",
            cross(),
            kind.warn(),
            error.to_string().error()
        );
    }

    async fn on_message(&self, message: &str) {
        println!("{message}");
    }
}
