//! Aggregator HTTP server.
//!
//! # Responsibilities
//! - Create the Axum Router with the aggregator handlers
//! - Wire up middleware (tracing, request ID)
//! - Serve static assets for every unmatched path
//! - Bind the router to a listener with graceful shutdown

use axum::{extract::State, routing::get, Json, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::services::ServeDir;

use crate::config::AggregatorConfig;
use crate::http::health;
use crate::http::request::with_request_layers;
use crate::lifecycle::shutdown::wait_for;
use crate::model::Envelope;
use crate::upstream::{BackendClient, FetchError};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub backend: BackendClient,
}

/// HTTP server for the aggregator.
pub struct HttpServer {
    router: Router,
    config: AggregatorConfig,
}

impl HttpServer {
    /// Create a new server with the given configuration.
    pub fn new(config: AggregatorConfig) -> Result<Self, reqwest::Error> {
        let state = AppState {
            backend: BackendClient::new(&config.backend)?,
        };

        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    fn build_router(config: &AggregatorConfig, state: AppState) -> Router {
        let router = Router::new()
            .route("/api/data", get(get_aggregated_data))
            .route("/health", get(health::aggregator_health))
            .fallback_service(ServeDir::new(&config.static_files.dir))
            .with_state(state);

        with_request_layers(router)
    }

    /// Router with all layers applied; used directly by tests.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Serve until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            backend_url = %self.config.backend.url,
            static_dir = %self.config.static_files.dir,
            "Aggregator listening"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(wait_for(shutdown))
            .await?;

        tracing::info!("Aggregator stopped");
        Ok(())
    }
}

/// Fetch from the backend and republish the records inside an [`Envelope`].
async fn get_aggregated_data(State(state): State<AppState>) -> Result<Json<Envelope>, FetchError> {
    let people = state.backend.fetch_people().await?;
    Ok(Json(Envelope::new(people)))
}
