//! Character-by-character conversion through a [`CharacterMap`].
//!
//! Every input character contributes independently to the output. Mapped
//! characters become their table entry; the rest are handled by the caller's
//! [`UnmappedPolicy`]. None of these functions can fail.
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::options::ConversionOptions;
use super::policy::{DEFAULT_PLACEHOLDER, ScriptStyle, UnmappedPolicy};
use super::tables::{CharacterMap, SUBSCRIPT, SUPERSCRIPT};

/// Both renderings of one input under one set of options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversion {
    pub superscript: String,
    pub subscript: String,
}

impl Conversion {
    /// The rendering for `style`.
    #[inline]
    pub fn get(&self, style: ScriptStyle) -> &str {
        match style {
            ScriptStyle::Superscript => &self.superscript,
            ScriptStyle::Subscript => &self.subscript,
        }
    }
}

/// Convert `text` through `map`, resolving unmapped characters with `policy`.
///
/// `placeholder` is only used under [`UnmappedPolicy::Placeholder`].
///
/// # Examples
///
/// ```rust
/// use supsub::script::{transform, UnmappedPolicy, SUPERSCRIPT};
///
/// assert_eq!(transform("a b", &SUPERSCRIPT, UnmappedPolicy::Keep, "?"), "ᵃ ᵇ");
/// assert_eq!(transform("a b", &SUPERSCRIPT, UnmappedPolicy::Omit, "?"), "ᵃᵇ");
/// assert_eq!(transform("a b", &SUPERSCRIPT, UnmappedPolicy::Placeholder, "?"), "ᵃ?ᵇ");
/// ```
pub fn transform(
    text: &str,
    map: &CharacterMap,
    policy: UnmappedPolicy,
    placeholder: &str,
) -> String {
    // Styled glyphs are 2-4 bytes while most input is ASCII
    let mut result = String::with_capacity(text.len() * 3);

    for c in text.chars() {
        match (map.lookup(c), policy) {
            (Some(replacement), _) => result.push_str(replacement),
            (None, UnmappedPolicy::Keep) => result.push(c),
            (None, UnmappedPolicy::Omit) => {},
            (None, UnmappedPolicy::Placeholder) => result.push_str(placeholder),
        }
    }

    trace!(
        table = map.name(),
        %policy,
        input_len = text.len(),
        output_len = result.len(),
        "transformed text"
    );
    result
}

/// Produce the superscript and subscript renderings of `text`.
///
/// The two outputs are computed independently under the same options.
///
/// # Examples
///
/// ```rust
/// use supsub::script::{convert, ConversionOptions};
///
/// let out = convert("a1", &ConversionOptions::default());
/// assert_eq!(out.superscript, "ᵃ¹");
/// assert_eq!(out.subscript, "ₐ₁");
/// ```
pub fn convert(text: &str, options: &ConversionOptions) -> Conversion {
    Conversion {
        superscript: convert_style(text, ScriptStyle::Superscript, options),
        subscript: convert_style(text, ScriptStyle::Subscript, options),
    }
}

/// Same result as [`convert`], with the two styles computed on the rayon pool.
///
/// Only worth it for large inputs.
pub fn convert_parallel(text: &str, options: &ConversionOptions) -> Conversion {
    let (superscript, subscript) = rayon::join(
        || convert_style(text, ScriptStyle::Superscript, options),
        || convert_style(text, ScriptStyle::Subscript, options),
    );
    Conversion {
        superscript,
        subscript,
    }
}

/// Convert `text` into a single style.
#[inline]
pub fn convert_style(text: &str, style: ScriptStyle, options: &ConversionOptions) -> String {
    transform(text, style.map(), options.policy, options.placeholder())
}

/// Convert a string to superscript, keeping characters that have no superscript form.
///
/// # Examples
///
/// ```rust
/// use supsub::script::convert_to_superscript;
///
/// assert_eq!(convert_to_superscript("x2"), "ˣ²");
/// assert_eq!(convert_to_superscript("H2O"), "ᴴ²ᴼ");
/// assert_eq!(convert_to_superscript("E = mc2"), "ᴱ ⁼ ᵐᶜ²");
/// ```
#[inline]
pub fn convert_to_superscript(text: &str) -> String {
    transform(text, &SUPERSCRIPT, UnmappedPolicy::Keep, DEFAULT_PLACEHOLDER)
}

/// Convert a string to subscript, keeping characters that have no subscript form.
///
/// # Examples
///
/// ```rust
/// use supsub::script::convert_to_subscript;
///
/// // Uppercase letters have no subscript form
/// assert_eq!(convert_to_subscript("H2O"), "H₂O");
/// assert_eq!(convert_to_subscript("h2o"), "ₕ₂ₒ");
/// ```
#[inline]
pub fn convert_to_subscript(text: &str) -> String {
    transform(text, &SUBSCRIPT, UnmappedPolicy::Keep, DEFAULT_PLACEHOLDER)
}

/// Check if every character in `text` has an entry in `map`.
///
/// ```rust
/// use supsub::script::{can_convert, SUBSCRIPT, SUPERSCRIPT};
///
/// assert!(can_convert("n+1", &SUPERSCRIPT));
/// assert!(!can_convert("w", &SUBSCRIPT));
/// assert!(can_convert("", &SUBSCRIPT));
/// ```
#[inline]
pub fn can_convert(text: &str, map: &CharacterMap) -> bool {
    text.chars().all(|c| map.contains(c))
}

/// The characters of `text` that `map` does not cover, in input order.
pub fn unmapped_chars<'a>(text: &'a str, map: &'a CharacterMap) -> impl Iterator<Item = char> + 'a {
    text.chars().filter(move |c| !map.contains(*c))
}
