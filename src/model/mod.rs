//! Wire records shared by both services.

pub mod health;
pub mod person;

pub use health::HealthStatus;
pub use person::{sample_people, Envelope, Person};
