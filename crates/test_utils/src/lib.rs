//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! quote toolkit test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built form values, records and timestamps
//! - `builders`: Builder for form values with sensible defaults
//! - `painter`: A font-free text painter that records what it draws
//! - `assertions`: Assertion helpers for field errors and PNG output
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod painter;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use painter::*;
pub use assertions::*;
pub use generators::*;
