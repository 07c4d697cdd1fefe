//! Merchant Summary Service Library
//!
//! Aggregates precomputed daily, weekly and monthly merchant transaction
//! summaries from a key-value document store.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;
pub mod telemetry;

// Re-export commonly used types
pub use modules::health;
pub use modules::summaries;
