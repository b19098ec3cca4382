//! Mock data service.
//!
//! Serves the fixed dataset from [`sample_people`] after an artificial delay,
//! with permissive CORS headers on the data route.

use std::time::Duration;

use axum::{
    extract::State,
    http::{header, HeaderValue, StatusCode},
    routing::get,
    Json, Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::MockConfig;
use crate::http::health;
use crate::http::request::with_request_layers;
use crate::lifecycle::shutdown::wait_for;
use crate::model::{sample_people, Person};
use crate::observability::metrics;

#[derive(Clone)]
struct MockState {
    delay: Duration,
}

/// HTTP server for the mock backend.
pub struct MockServer {
    router: Router,
    config: MockConfig,
}

impl MockServer {
    pub fn new(config: MockConfig) -> Self {
        let state = MockState {
            delay: config.delay(),
        };

        let cors = ServiceBuilder::new()
            .layer(SetResponseHeaderLayer::overriding(
                header::ACCESS_CONTROL_ALLOW_ORIGIN,
                HeaderValue::from_static("*"),
            ))
            .layer(SetResponseHeaderLayer::overriding(
                header::ACCESS_CONTROL_ALLOW_METHODS,
                HeaderValue::from_static("GET, OPTIONS"),
            ))
            .layer(SetResponseHeaderLayer::overriding(
                header::ACCESS_CONTROL_ALLOW_HEADERS,
                HeaderValue::from_static("Content-Type"),
            ));

        let router = Router::new()
            .route(
                "/api/data",
                get(handle_data).options(handle_preflight).layer(cors),
            )
            .route("/health", get(health::mock_health))
            .with_state(state);

        Self {
            router: with_request_layers(router),
            config,
        }
    }

    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, delay_ms = self.config.delay_ms, "Mock backend listening");
        tracing::info!("Available endpoints:");
        tracing::info!("  GET /api/data - Returns mock data");
        tracing::info!("  GET /health   - Health check");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(wait_for(shutdown))
            .await?;

        tracing::info!("Mock backend stopped");
        Ok(())
    }
}

async fn handle_data(State(state): State<MockState>) -> Json<Vec<Person>> {
    metrics::record_mock_request("GET");
    tokio::time::sleep(state.delay).await;
    Json(sample_people())
}

async fn handle_preflight() -> StatusCode {
    metrics::record_mock_request("OPTIONS");
    StatusCode::OK
}
