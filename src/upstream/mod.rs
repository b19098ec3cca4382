//! Upstream data service integration.
//!
//! # Data Flow
//! ```text
//! GET /api/data (aggregator)
//!     → client.rs (one GET to the configured backend URL, bounded timeout)
//!     → status check (exactly 200)
//!     → decode JSON array of Person
//!     → Vec<Person> or FetchError
//! ```
//!
//! # Constraints
//! - Exactly one attempt per inbound request; no retry, no cache
//! - Each failure is logged once, where it is classified

pub mod client;
pub mod types;

pub use client::BackendClient;
pub use types::{FetchError, FetchOutcome};
