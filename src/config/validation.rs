//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, ports valid)
//! - Check the backend URL is an absolute http(s) URL
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is a pure function over the loaded config
//! - Runs before config is accepted into the system

use std::fmt;
use std::net::SocketAddr;

use url::Url;

use crate::config::schema::{AggregatorConfig, ListenerConfig, MockConfig, ObservabilityConfig};

/// A single semantic problem with a loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

pub fn validate_aggregator(config: &AggregatorConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_listener(&config.listener, &mut errors);
    check_observability(&config.observability, &mut errors);

    match Url::parse(&config.backend.url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        Ok(url) => errors.push(ValidationError::new(
            "backend.url",
            format!("unsupported scheme '{}'", url.scheme()),
        )),
        Err(e) => errors.push(ValidationError::new(
            "backend.url",
            format!("'{}' is not a valid URL: {}", config.backend.url, e),
        )),
    }

    if config.backend.timeout_secs == 0 {
        errors.push(ValidationError::new(
            "backend.timeout_secs",
            "must be greater than zero",
        ));
    }

    if config.static_files.dir.trim().is_empty() {
        errors.push(ValidationError::new("static_files.dir", "must not be empty"));
    }

    finish(errors)
}

pub fn validate_mock(config: &MockConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_listener(&config.listener, &mut errors);
    check_observability(&config.observability, &mut errors);

    finish(errors)
}

fn check_listener(listener: &ListenerConfig, errors: &mut Vec<ValidationError>) {
    if listener.host.trim().is_empty() {
        errors.push(ValidationError::new("listener.host", "must not be empty"));
    }

    match listener.port.parse::<u16>() {
        Ok(0) => errors.push(ValidationError::new("listener.port", "must not be 0")),
        Ok(_) => {}
        Err(_) => errors.push(ValidationError::new(
            "listener.port",
            format!("'{}' is not a valid port", listener.port),
        )),
    }
}

fn check_observability(observability: &ObservabilityConfig, errors: &mut Vec<ValidationError>) {
    if observability.log_level.trim().is_empty() {
        errors.push(ValidationError::new(
            "observability.log_level",
            "must not be empty",
        ));
    }

    if observability.metrics_enabled
        && observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::new(
            "observability.metrics_address",
            format!("'{}' is not a socket address", observability.metrics_address),
        ));
    }
}

fn finish(errors: Vec<ValidationError>) -> Result<(), Vec<ValidationError>> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(validate_aggregator(&AggregatorConfig::default()).is_ok());
        assert!(validate_mock(&MockConfig::default()).is_ok());
    }

    #[test]
    fn collects_every_problem() {
        let mut config = AggregatorConfig::default();
        config.listener.port = "eighty".to_string();
        config.backend.url = "not a url".to_string();
        config.backend.timeout_secs = 0;

        let errors = validate_aggregator(&config).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec!["listener.port", "backend.url", "backend.timeout_secs"]
        );
    }

    #[test]
    fn rejects_non_http_backend() {
        let mut config = AggregatorConfig::default();
        config.backend.url = "ftp://localhost/data".to_string();

        let errors = validate_aggregator(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("ftp"));
    }

    #[test]
    fn rejects_port_zero() {
        let mut config = MockConfig::default();
        config.listener.port = "0".to_string();
        assert!(validate_mock(&config).is_err());
    }

    #[test]
    fn metrics_address_checked_only_when_enabled() {
        let mut config = MockConfig::default();
        config.observability.metrics_address = "nowhere".to_string();
        assert!(validate_mock(&config).is_ok());

        config.observability.metrics_enabled = true;
        let errors = validate_mock(&config).unwrap_err();
        assert_eq!(errors[0].field, "observability.metrics_address");
    }
}
