//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//! The in-memory ports are also what the router-level tests in
//! `integration_tests` plug into `AppState`.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
