//! Metrics collection and exposition.
//!
//! # Metrics
//! - `relay_upstream_requests_total` (counter): backend fetches by outcome
//! - `relay_upstream_duration_seconds` (histogram): backend fetch latency
//! - `relay_mock_requests_total` (counter): mock data requests by method

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

use crate::config::ObservabilityConfig;
use crate::upstream::FetchOutcome;

/// Install the Prometheus recorder and its scrape listener.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

/// Install the exporter when the configuration asks for it.
///
/// Failures are logged; a process without metrics keeps serving.
pub fn init_from_config(config: &ObservabilityConfig) {
    if !config.metrics_enabled {
        return;
    }

    match config.metrics_address.parse() {
        Ok(addr) => {
            if let Err(e) = init_metrics(addr) {
                tracing::error!(error = %e, "Failed to install metrics exporter");
            }
        }
        Err(e) => tracing::error!(
            metrics_address = %config.metrics_address,
            error = %e,
            "Failed to parse metrics address"
        ),
    }
}

/// Record one backend fetch.
pub fn record_upstream(outcome: FetchOutcome, start: Instant) {
    metrics::counter!("relay_upstream_requests_total", "outcome" => outcome.as_str()).increment(1);
    metrics::histogram!("relay_upstream_duration_seconds").record(start.elapsed().as_secs_f64());
}

/// Record one request to the mock data endpoint.
pub fn record_mock_request(method: &'static str) {
    metrics::counter!("relay_mock_requests_total", "method" => method).increment(1);
}
