//! Unified error types for supsub.
//!
//! This module provides a single error type for every fallible operation in
//! the crate, presenting a consistent API to users.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, Result};
