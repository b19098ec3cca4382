//! Mapping of upstream failures onto HTTP responses.
//!
//! Every fetch failure becomes a 500 with a plain-text body; the caller
//! never sees partial data.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::upstream::FetchError;

impl IntoResponse for FetchError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to fetch data: {}", self),
        )
            .into_response()
    }
}
