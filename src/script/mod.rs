//! Unicode superscript and subscript conversion.
//!
//! Text is converted one character at a time through a fixed lookup table.
//! Characters the table does not cover are kept, dropped, or replaced with a
//! placeholder, depending on the [`UnmappedPolicy`] in effect.
//!
//! # Quick Start
//!
//! ```rust
//! use supsub::script::{convert, ConversionOptions, UnmappedPolicy};
//!
//! let options = ConversionOptions::new().with_policy(UnmappedPolicy::Omit);
//! let out = convert("a b", &options);
//! assert_eq!(out.superscript, "ᵃᵇ");
//! assert_eq!(out.subscript, "ₐᵦ");
//! ```
//!
//! # Architecture
//!
//! - [`tables`]: the two compile-time [`CharacterMap`]s
//! - [`policy`]: [`UnmappedPolicy`] and [`ScriptStyle`] selectors
//! - [`options`]: [`ConversionOptions`] shared by both outputs
//! - [`transform`](mod@transform): the per-character engine and its helpers
//!
//! Tables are `static` and read-only, so every function here is safe to call
//! from any number of threads at once.

pub mod options;
pub mod policy;
pub mod tables;
pub mod transform;

pub use options::ConversionOptions;
pub use policy::{DEFAULT_PLACEHOLDER, ScriptStyle, UnmappedPolicy};
pub use tables::{CharacterMap, SUBSCRIPT, SUPERSCRIPT, to_subscript, to_superscript};
pub use transform::{
    Conversion, can_convert, convert, convert_parallel, convert_style, convert_to_subscript,
    convert_to_superscript, transform, unmapped_chars,
};
