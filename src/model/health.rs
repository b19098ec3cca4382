use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Liveness body. `service` is only present on the mock backend.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
    /// RFC 3339, taken when the response is built.
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
}

impl HealthStatus {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            time: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            service: None,
        }
    }

    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service = Some(service.into());
        self
    }
}
