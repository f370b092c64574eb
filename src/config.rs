//! Upload configuration
//!
//! Values are taken from, in order: command-line flags, environment
//! variables, built-in defaults.

use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Endpoint used when none is configured
pub const DEFAULT_ENDPOINT: &str = "https://api.beacondb.net/v2/geosubmit";

/// Request timeout used when none is configured
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable for the endpoint URL
pub const ENV_ENDPOINT: &str = "GEOSUBMIT_ENDPOINT";
/// Environment variable for the API key
pub const ENV_API_KEY: &str = "GEOSUBMIT_API_KEY";
/// Environment variable for the request timeout in seconds
pub const ENV_TIMEOUT_SECS: &str = "GEOSUBMIT_TIMEOUT_SECS";
/// Environment variable for the report store path
pub const ENV_STORE: &str = "GEOSUBMIT_STORE";

/// Resolved configuration for an upload pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadConfig {
    /// Geosubmit endpoint
    pub endpoint: Url,
    /// Optional API key, sent as `X-Api-Key`
    pub api_key: Option<String>,
    /// Request timeout
    pub timeout: Duration,
    /// Path to the JSON report store
    pub store_path: PathBuf,
}

/// Values given explicitly on the command line
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Endpoint URL
    pub endpoint: Option<String>,
    /// API key
    pub api_key: Option<String>,
    /// Timeout in seconds
    pub timeout_secs: Option<u64>,
    /// Store path
    pub store_path: Option<PathBuf>,
}

impl UploadConfig {
    /// Resolve configuration from overrides and the process environment
    pub fn resolve(overrides: ConfigOverrides) -> Result<Self> {
        Self::resolve_with(overrides, |key| env::var(key).ok())
    }

    /// Resolve configuration using `lookup` for environment variables
    pub fn resolve_with<F>(overrides: ConfigOverrides, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty variables count as unset
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let endpoint_str = overrides
            .endpoint
            .or_else(|| var(ENV_ENDPOINT))
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let endpoint = parse_endpoint(&endpoint_str)?;

        let api_key = overrides.api_key.or_else(|| var(ENV_API_KEY));

        let timeout_secs = match overrides.timeout_secs {
            Some(secs) => secs,
            None => match var(ENV_TIMEOUT_SECS) {
                Some(raw) => raw.trim().parse().map_err(|_| {
                    Error::Config(format!("{ENV_TIMEOUT_SECS} is not a number: {raw}"))
                })?,
                None => DEFAULT_TIMEOUT_SECS,
            },
        };
        if timeout_secs == 0 {
            return Err(Error::Config("timeout must be at least 1 second".to_string()));
        }

        let store_path = match overrides
            .store_path
            .or_else(|| var(ENV_STORE).map(PathBuf::from))
        {
            Some(path) => path,
            None => default_store_path()?,
        };

        Ok(Self {
            endpoint,
            api_key,
            timeout: Duration::from_secs(timeout_secs),
            store_path,
        })
    }
}

/// Resolve only the store path (for commands that never touch the network)
pub fn resolve_store_path(store_path: Option<PathBuf>) -> Result<PathBuf> {
    let from_env = || {
        env::var(ENV_STORE)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
    };
    match store_path.or_else(from_env) {
        Some(path) => Ok(path),
        None => default_store_path(),
    }
}

/// Default store location under the platform data directory
pub fn default_store_path() -> Result<PathBuf> {
    dirs::data_dir()
        .map(|dir| dir.join("geosubmit").join("reports.json"))
        .ok_or_else(|| {
            Error::Config(format!(
                "cannot determine data directory; set {ENV_STORE} or pass --store"
            ))
        })
}

fn parse_endpoint(raw: &str) -> Result<Url> {
    let url =
        Url::parse(raw).map_err(|e| Error::Config(format!("invalid endpoint {raw}: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(Error::Config(format!(
            "endpoint must be http or https, got {other}"
        ))),
    }
}
