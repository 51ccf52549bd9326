//! Unified error types for texgen.
//!
//! Every fallible operation in the crate reports through [`Error`], so
//! callers only ever match on one type.

// Submodule declarations
pub mod types;

// Re-exports
pub use types::{Error, Result, ShapeError};
