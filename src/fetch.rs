//! Scheduler metrics scraping.

use crate::config::Config;
use crate::error::{Result, SchedscopeError};
use tracing::debug;

/// HTTP client for the scheduler's exposition endpoint.
///
/// The scheduler serves metrics over HTTPS with an in-cluster self-signed
/// certificate, so certificate validation is disabled. One fetch per request,
/// no retries; retry policy belongs to whoever calls the endpoint.
pub struct MetricsFetcher {
    client: reqwest::Client,
    endpoint: String,
}

impl MetricsFetcher {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .danger_accept_invalid_certs(true)
            .build()
            .map_err(|e| SchedscopeError::UpstreamError(format!("failed to build client: {e}")))?;

        Ok(Self {
            client,
            endpoint: config.metrics_url(),
        })
    }

    /// Fetch the full exposition text from the scheduler.
    pub async fn fetch(&self) -> Result<String> {
        debug!("Fetching scheduler metrics from {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| SchedscopeError::UpstreamError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SchedscopeError::UpstreamError(format!(
                "scheduler returned status {status}"
            )));
        }

        response
            .text()
            .await
            .map_err(|e| SchedscopeError::UpstreamError(e.to_string()))
    }
}
