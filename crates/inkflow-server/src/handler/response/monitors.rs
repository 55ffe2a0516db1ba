//! Response bodies for the monitoring endpoints.

use jiff::Timestamp;
use schemars::JsonSchema;
use serde::Serialize;

/// Service health status.
#[must_use]
#[derive(Debug, Clone, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    /// Always `"healthy"` while the process is serving requests.
    pub status: String,
    /// Server version.
    pub version: String,
    /// When the check was performed.
    pub checked_at: Timestamp,
}

impl HealthStatus {
    /// Creates a healthy status stamped with the current time.
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_owned(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
            checked_at: Timestamp::now(),
        }
    }
}
