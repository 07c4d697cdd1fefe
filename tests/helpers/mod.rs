// Test Helper Modules
//
// Shared fixtures for contract and property tests. Requests run in-process
// through `actix_web::test` against an in-memory summary store and a clock
// pinned to a known date.
//
// Usage (from a test crate):
//   #[path = "../helpers/mod.rs"]
//   mod helpers;

#![allow(dead_code)]

pub mod test_context;

pub use assertions::*;
pub use test_context::*;
