//! supsub - convert plain text into Unicode superscript and subscript
//!
//! Every character of the input is looked up in a fixed table and replaced by
//! its raised or lowered Unicode look-alike. Characters without an entry are
//! handled by an [`UnmappedPolicy`]: kept, omitted, or replaced with a
//! placeholder glyph.
//!
//! # Features
//!
//! - **Two styles from one call**: [`convert`] returns both renderings under a
//!   shared policy
//! - **Compile-time tables**: lookups go through `phf` perfect hash maps
//! - **Total functions**: conversion never fails and has no side effects
//! - **`cli` feature** (default): the `supsub` command-line tool
//!
//! # Example
//!
//! ```rust
//! use supsub::{convert, ConversionOptions, UnmappedPolicy};
//!
//! let out = convert("Hi!", &ConversionOptions::default());
//! assert_eq!(out.superscript, "ᴴⁱᵎ");
//! assert_eq!(out.subscript, "Hᵢ!");
//!
//! let options = ConversionOptions::new().with_policy(UnmappedPolicy::Placeholder);
//! assert_eq!(convert("a b", &options).superscript, "ᵃ�ᵇ");
//! ```

/// Error types shared across the crate
pub mod common;

/// Superscript and subscript tables and the conversion engine
pub mod script;

// Re-export commonly used types for convenience
pub use common::{Error, Result};
pub use script::{
    CharacterMap, Conversion, ConversionOptions, SUBSCRIPT, SUPERSCRIPT, ScriptStyle,
    UnmappedPolicy, convert, convert_parallel, transform,
};
