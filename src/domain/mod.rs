//! Domain layer: core entities and business rules.

pub mod aggregate;
pub mod classifier;
pub mod message;
pub mod sentiment;
pub mod thread;
pub mod user;
