//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! folio ledger test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pinned clock, ledger, and stay dates
//! - `builders`: Builder patterns for folios with pre-posted entries
//! - `assertions`: Custom assertion helpers for folio invariants
//! - `generators`: Property-based test data generators
//! - `logging`: One-time tracing subscriber for tests

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;
pub mod logging;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
pub use logging::init_tracing;
