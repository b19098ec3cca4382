//! Upstream error definitions.

use thiserror::Error;

/// Errors that can occur while fetching from the data service.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection refused, DNS failure, timeout.
    #[error("failed to fetch data from backend: {0}")]
    Transport(#[source] reqwest::Error),

    /// Any status other than 200.
    #[error("backend service returned status: {0}")]
    Status(u16),

    /// The body stream broke before it was fully read.
    #[error("failed to decode response: {0}")]
    Body(#[source] reqwest::Error),

    /// The body is not a JSON array of complete Person records.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    pub fn outcome(&self) -> FetchOutcome {
        match self {
            FetchError::Transport(_) => FetchOutcome::Transport,
            FetchError::Status(_) => FetchOutcome::Status,
            FetchError::Body(_) | FetchError::Decode(_) => FetchOutcome::Decode,
        }
    }
}

/// Coarse result class, used as a metrics label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Ok,
    Transport,
    Status,
    Decode,
}

impl FetchOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            FetchOutcome::Ok => "ok",
            FetchOutcome::Transport => "transport",
            FetchOutcome::Status => "status",
            FetchOutcome::Decode => "decode",
        }
    }
}
