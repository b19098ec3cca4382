//! Configuration loading from disk and the environment.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::schema::{AggregatorConfig, MockConfig, ObservabilityConfig};
use crate::config::validation::{validate_aggregator, validate_mock, ValidationError};

/// Read when no `--config` path is given and the file exists.
pub const DEFAULT_AGGREGATOR_FILE: &str = "aggregator.toml";
pub const DEFAULT_MOCK_FILE: &str = "mock-backend.toml";

/// Optional `KEY=value` file that seeds variables missing from the environment.
pub const DOTENV_FILE: &str = ".env";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Env file error: {0}")]
    Dotenv(#[from] dotenvy::Error),

    #[error("Invalid value for {key}: '{value}'")]
    Env { key: &'static str, value: String },

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate the aggregator configuration.
///
/// Defaults, then the TOML file, then `lookup` (normally `std::env::var`).
/// Recognised variables: `BACKEND_URL`, `PORT`, `BACKEND_TIMEOUT_SECS`,
/// `STATIC_DIR`, `LOG_LEVEL`. Empty values are ignored.
pub fn load_aggregator_config<F>(path: Option<&Path>, lookup: F) -> Result<AggregatorConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config: AggregatorConfig = read_file(path, DEFAULT_AGGREGATOR_FILE)?;

    if let Some(url) = non_empty(&lookup, "BACKEND_URL") {
        config.backend.url = url;
    }
    if let Some(port) = non_empty(&lookup, "PORT") {
        config.listener.port = port;
    }
    if let Some(secs) = parsed(&lookup, "BACKEND_TIMEOUT_SECS")? {
        config.backend.timeout_secs = secs;
    }
    if let Some(dir) = non_empty(&lookup, "STATIC_DIR") {
        config.static_files.dir = dir;
    }
    overlay_observability(&mut config.observability, &lookup);

    validate_aggregator(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load and validate the mock service configuration.
///
/// Recognised variables: `MOCK_PORT`, `MOCK_DELAY_MS`, `LOG_LEVEL`.
pub fn load_mock_config<F>(path: Option<&Path>, lookup: F) -> Result<MockConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config: MockConfig = read_file(path, DEFAULT_MOCK_FILE)?;

    if let Some(port) = non_empty(&lookup, "MOCK_PORT") {
        config.listener.port = port;
    }
    if let Some(delay) = parsed(&lookup, "MOCK_DELAY_MS")? {
        config.delay_ms = delay;
    }
    overlay_observability(&mut config.observability, &lookup);

    validate_mock(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Read a `.env` file into a map without touching the process environment.
///
/// A missing file yields an empty map. Callers consult it after the real
/// environment, so variables already set are never overridden.
pub fn load_dotenv(path: &Path) -> Result<HashMap<String, String>, ConfigError> {
    if !path.exists() {
        return Ok(HashMap::new());
    }

    let values = dotenvy::from_path_iter(path)?.collect::<Result<HashMap<_, _>, _>>()?;
    tracing::debug!(path = %path.display(), count = values.len(), "Env file loaded");
    Ok(values)
}

/// An explicit path must exist; the default file is optional.
fn read_file<T>(path: Option<&Path>, default_file: &str) -> Result<T, ConfigError>
where
    T: DeserializeOwned + Default,
{
    let path = match path {
        Some(p) => p,
        None if Path::new(default_file).exists() => Path::new(default_file),
        None => return Ok(T::default()),
    };

    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    tracing::debug!(path = %path.display(), "Configuration file loaded");
    Ok(config)
}

fn overlay_observability<F>(observability: &mut ObservabilityConfig, lookup: &F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(level) = non_empty(lookup, "LOG_LEVEL") {
        observability.log_level = level;
    }
}

fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).filter(|v| !v.trim().is_empty())
}

fn parsed<F>(lookup: &F, key: &'static str) -> Result<Option<u64>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match non_empty(lookup, key) {
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Env { key, value }),
        None => Ok(None),
    }
}
