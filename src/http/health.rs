//! Liveness handlers.

use axum::Json;

use crate::model::HealthStatus;

pub const MOCK_SERVICE_NAME: &str = "mock-backend";

pub async fn aggregator_health() -> Json<HealthStatus> {
    Json(HealthStatus::healthy())
}

pub async fn mock_health() -> Json<HealthStatus> {
    Json(HealthStatus::healthy().with_service(MOCK_SERVICE_NAME))
}
