//! Core Kernel - Foundational types shared by the quote toolkit
//!
//! This crate provides the building blocks used by every other crate:
//! - Reference data: the fixed id -> label lookup tables behind the quote form
//! - Common error type

pub mod reference;
pub mod error;

pub use reference::{LookupTable, LookupEntry, ReferenceData, REFERENCE_DATA_VERSION};
pub use error::CoreError;
