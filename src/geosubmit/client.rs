//! HTTP Geosubmit client

use crate::config::UploadConfig;
use crate::error::Result;
use crate::geosubmit::wire::{Payload, Report};
use crate::geosubmit::{RemoteSubmitter, SubmitError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

const USER_AGENT: &str = concat!("geosubmit-upload/", env!("CARGO_PKG_VERSION"));

/// Geosubmit v2 client using reqwest
pub struct GeosubmitClient {
    client: Client,
    endpoint: Url,
    api_key: Option<String>,
}

impl GeosubmitClient {
    /// Create a new client posting to `endpoint`
    pub fn new(endpoint: Url, api_key: Option<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            endpoint,
            api_key,
        })
    }

    /// Create a client from resolved configuration
    pub fn from_config(config: &UploadConfig) -> Result<Self> {
        Self::new(config.endpoint.clone(), config.api_key.clone(), config.timeout)
    }

    /// Endpoint reports are posted to
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

fn classify_transport_error(e: &reqwest::Error) -> SubmitError {
    if e.is_timeout() {
        SubmitError::Timeout(e.to_string())
    } else {
        SubmitError::Other(e.to_string())
    }
}

#[async_trait]
impl RemoteSubmitter for GeosubmitClient {
    async fn submit(&self, reports: &[Report]) -> std::result::Result<(), SubmitError> {
        debug!("POST {} with {} reports", self.endpoint, reports.len());

        let mut request = self
            .client
            .post(self.endpoint.clone())
            .json(&Payload { items: reports });
        if let Some(key) = &self.api_key {
            request = request.header("X-Api-Key", key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| classify_transport_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SubmitError::Status {
                code: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}
