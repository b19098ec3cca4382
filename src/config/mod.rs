//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! defaults (schema.rs)
//!     → optional TOML file (loader.rs)
//!     → environment overlay (BACKEND_URL, PORT, ...), then .env for unset keys
//!     → CLI flags (binaries)
//!     → validation.rs (semantic checks)
//!     → AggregatorConfig / MockConfig (validated, immutable)
//!     → passed by value into the servers
//! ```
//!
//! # Design Decisions
//! - Config is read once at startup and never mutated afterwards
//! - All fields have defaults so an empty environment still boots
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_aggregator_config, load_dotenv, load_mock_config, ConfigError, DOTENV_FILE};
pub use schema::{
    AggregatorConfig, BackendConfig, ListenerConfig, MockConfig, ObservabilityConfig,
    StaticConfig,
};
pub use validation::ValidationError;
