//! Process configuration from the environment.
//!
//! The scheduler's address comes from the service environment variables the
//! kubelet injects into the pod. Both must be present at startup; a missing
//! variable is a deployment defect, not a per-request condition.

use crate::error::{Result, SchedscopeError};
use std::env;

pub const SCHEDULER_HOST_ENV: &str = "SCHEDSCOPE_SCHEDULER_SERVICE_HOST";
pub const SCHEDULER_PORT_ENV: &str = "SCHEDSCOPE_SCHEDULER_SERVICE_PORT";
pub const SCHEDULER_NAME_ENV: &str = "SCHEDSCOPE_SCHEDULER_NAME";

/// Registered scheduler name, as it appears in pod identity labels.
pub const DEFAULT_SCHEDULER_NAME: &str = "schedscope-scheduler";

#[derive(Debug, Clone)]
pub struct Config {
    pub scheduler_host: String,
    pub scheduler_port: u16,
    pub scheduler_name: String,
}

impl Config {
    /// Read configuration from the environment once, at process start.
    pub fn from_env() -> Result<Self> {
        let scheduler_host = env::var(SCHEDULER_HOST_ENV)
            .map_err(|_| SchedscopeError::ConfigError(format!("{SCHEDULER_HOST_ENV} is not set")))?;

        let port = env::var(SCHEDULER_PORT_ENV)
            .map_err(|_| SchedscopeError::ConfigError(format!("{SCHEDULER_PORT_ENV} is not set")))?;
        let scheduler_port = port.parse().map_err(|_| {
            SchedscopeError::ConfigError(format!("{SCHEDULER_PORT_ENV} is not a valid port: {port}"))
        })?;

        let scheduler_name =
            env::var(SCHEDULER_NAME_ENV).unwrap_or_else(|_| DEFAULT_SCHEDULER_NAME.to_string());

        Ok(Self {
            scheduler_host,
            scheduler_port,
            scheduler_name,
        })
    }

    /// URL of the scheduler's exposition endpoint.
    pub fn metrics_url(&self) -> String {
        format!(
            "https://{}:{}/metrics",
            self.scheduler_host, self.scheduler_port
        )
    }
}
