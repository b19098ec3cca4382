//! HTTP client for the data service.
//!
//! # Responsibilities
//! - Issue the single outbound GET with the configured timeout
//! - Classify failures (transport, status, decode)
//! - Record upstream metrics

use std::time::Instant;

use reqwest::{Client, StatusCode};

use crate::config::BackendConfig;
use crate::model::Person;
use crate::observability::metrics;
use crate::upstream::types::{FetchError, FetchOutcome};

/// Thin wrapper over a pooled `reqwest::Client` bound to one backend URL.
#[derive(Clone)]
pub struct BackendClient {
    client: Client,
    url: String,
}

impl BackendClient {
    /// Build a client from the backend section of the configuration.
    pub fn new(config: &BackendConfig) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder().timeout(config.timeout());
        if !config.proxy_from_env {
            builder = builder.no_proxy();
        }

        Ok(Self {
            client: builder.build()?,
            url: config.url.clone(),
        })
    }

    /// Fetch the full list of people from the backend.
    ///
    /// Either the complete list is returned or an error; there is no
    /// partial result.
    pub async fn fetch_people(&self) -> Result<Vec<Person>, FetchError> {
        let start = Instant::now();
        let result = self.fetch_once().await;

        let outcome = match &result {
            Ok(people) => {
                tracing::debug!(url = %self.url, count = people.len(), "Backend fetch succeeded");
                FetchOutcome::Ok
            }
            Err(e) => {
                match e {
                    FetchError::Status(status) => {
                        tracing::error!(url = %self.url, status = *status, error = %e, "Error fetching data")
                    }
                    _ => tracing::error!(url = %self.url, error = %e, "Error fetching data"),
                }
                e.outcome()
            }
        };
        metrics::record_upstream(outcome, start);

        result
    }

    async fn fetch_once(&self) -> Result<Vec<Person>, FetchError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(FetchError::Body)?;
        let people = serde_json::from_slice(&body)?;
        Ok(people)
    }
}
