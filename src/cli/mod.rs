//! CLI commands
//!
//! Command implementations for the `geosubmit` binary.

mod progress;
mod status;
mod style;
mod upload;

pub use status::run_status;
pub use upload::run_upload;

use geosubmit_upload::types::SubmissionOutcome;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// `EX_TEMPFAIL` from sysexits.h: try again later
const EXIT_RETRY: u8 = 75;

/// Map a pass outcome to the process exit code
pub fn exit_code(outcome: SubmissionOutcome) -> ExitCode {
    match outcome {
        SubmissionOutcome::Succeeded | SubmissionOutcome::NoWorkNeeded => ExitCode::SUCCESS,
        SubmissionOutcome::RetryableFailure => ExitCode::from(EXIT_RETRY),
        SubmissionOutcome::TerminalFailure => ExitCode::FAILURE,
    }
}

/// Install a stderr log subscriber; `RUST_LOG` overrides the verbosity flag
pub fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
