//! people-relay: an aggregator that republishes a backend's people list,
//! plus the mock backend it talks to.
//!
//! ```text
//!   client ──GET /api/data──▶ aggregator ──GET BACKEND_URL──▶ mock-backend
//!          ◀─{success,data,count}─        ◀──[Person; 5]────
//! ```

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod observability;
pub mod upstream;

pub use config::{AggregatorConfig, MockConfig};
pub use http::{HttpServer, MockServer};
pub use lifecycle::Shutdown;
