//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! quote forms test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built payloads, inputs and question sets
//! - `builders`: Builder for quote form payloads
//! - `assertions`: Assertion helpers for validation results
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
