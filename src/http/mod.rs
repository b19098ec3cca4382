//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → request.rs (request ID, trace span)
//!     → server.rs (aggregator routes) | mock.rs (mock backend routes)
//!     → health.rs (liveness bodies)
//!     → response.rs (map upstream errors to HTTP responses)
//!     → Send to client
//! ```

pub mod health;
pub mod mock;
pub mod request;
pub mod response;
pub mod server;

pub use mock::MockServer;
pub use request::X_REQUEST_ID;
pub use server::{AppState, HttpServer};
