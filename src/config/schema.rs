//! Configuration schema definitions.
//!
//! Both services share the listener and observability sections; everything
//! else is specific to one process. All types derive Serde traits for
//! deserialization from TOML files.

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8081/api/data";
pub const DEFAULT_AGGREGATOR_PORT: &str = "8080";
pub const DEFAULT_MOCK_PORT: &str = "8081";

/// Root configuration for the aggregator service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AggregatorConfig {
    /// Listener configuration (host and port).
    pub listener: ListenerConfig,

    /// Upstream data service.
    pub backend: BackendConfig,

    /// Directory served for every path that is not an API route.
    pub static_files: StaticConfig,

    /// Logging and metrics settings.
    pub observability: ObservabilityConfig,
}

/// Root configuration for the mock data service.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MockConfig {
    pub listener: ListenerConfig,

    /// Artificial latency added before every data response, in milliseconds.
    pub delay_ms: u64,

    pub observability: ObservabilityConfig,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            listener: ListenerConfig {
                port: DEFAULT_MOCK_PORT.to_string(),
                ..ListenerConfig::default()
            },
            delay_ms: 100,
            observability: ObservabilityConfig::default(),
        }
    }
}

impl MockConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Interface to bind (e.g., "0.0.0.0").
    pub host: String,

    /// Port, kept as text the way it arrives from the environment.
    pub port: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_AGGREGATOR_PORT.to_string(),
        }
    }
}

impl ListenerConfig {
    /// Address suitable for `TcpListener::bind`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Upstream data service configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Full URL fetched on every data request.
    pub url: String,

    /// Total time allowed for the upstream request, in seconds.
    pub timeout_secs: u64,

    /// Honour HTTP(S)_PROXY / NO_PROXY from the environment.
    pub proxy_from_env: bool,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_BACKEND_URL.to_string(),
            timeout_secs: 10,
            proxy_from_env: true,
        }
    }
}

impl BackendConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Static asset configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StaticConfig {
    pub dir: String,
}

impl Default for StaticConfig {
    fn default() -> Self {
        Self {
            dir: "static".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Install the Prometheus exporter.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
