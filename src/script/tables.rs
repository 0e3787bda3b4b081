//! Unicode superscript and subscript lookup tables.
//!
//! Both tables are compile-time perfect hash maps from a plain character to
//! its raised or lowered equivalent. Coverage is partial and differs between
//! the two styles:
//!
//! ## Superscripts
//! - Digits: 0-9 → ⁰¹²³⁴⁵⁶⁷⁸⁹
//! - Latin letters: a-z and A-Z, with look-alikes where Unicode has no
//!   modifier letter (`q` → `ᑫ`, `V` → `ⱽ`, `Q` stays `Q`)
//! - Symbols: `+ - = ( ) . / , : * ! ?`
//!
//! ## Subscripts
//! - Digits: 0-9 → ₀₁₂₃₄₅₆₇₈₉
//! - Latin lowercase letters except `q` and `w`
//! - Symbols: `+ - = ( ) . / , : *`
//!
//! Whitespace appears in neither table, so it always goes through the
//! caller's [`UnmappedPolicy`](super::UnmappedPolicy).
//!
//! # Examples
//!
//! ```rust
//! use supsub::script::tables::{SUBSCRIPT, SUPERSCRIPT, to_subscript};
//!
//! assert_eq!(SUPERSCRIPT.lookup('2'), Some("²"));
//! assert_eq!(SUBSCRIPT.lookup('Q'), None);
//! assert_eq!(to_subscript('0'), Some("₀"));
//! ```
use phf::phf_map;

/// Compile-time lookup table for superscript characters.
static SUPERSCRIPT_MAP: phf::Map<char, &'static str> = phf_map! {
    // Digits
    '0' => "⁰",
    '1' => "¹",
    '2' => "²",
    '3' => "³",
    '4' => "⁴",
    '5' => "⁵",
    '6' => "⁶",
    '7' => "⁷",
    '8' => "⁸",
    '9' => "⁹",

    // Latin lowercase letters
    'a' => "ᵃ",
    'b' => "ᵇ",
    'c' => "ᶜ",
    'd' => "ᵈ",
    'e' => "ᵉ",
    'f' => "ᶠ",
    'g' => "ᶢ",
    'h' => "ʰ",
    'i' => "ⁱ",
    'j' => "ʲ",
    'k' => "ᵏ",
    'l' => "ˡ",
    'm' => "ᵐ",
    'n' => "ⁿ",
    'o' => "ᵒ",
    'p' => "ᵖ",
    'q' => "ᑫ",
    'r' => "ʳ",
    's' => "ˢ",
    't' => "ᵗ",
    'u' => "ᵘ",
    'v' => "ᵛ",
    'w' => "ʷ",
    'x' => "ˣ",
    'y' => "ʸ",
    'z' => "ᶻ",

    // Latin uppercase letters; C F S X Y Z reuse the lowercase glyph, Q has no raised form
    'A' => "ᴬ",
    'B' => "ᴮ",
    'C' => "ᶜ",
    'D' => "ᴰ",
    'E' => "ᴱ",
    'F' => "ᶠ",
    'G' => "ᴳ",
    'H' => "ᴴ",
    'I' => "ᴵ",
    'J' => "ᴶ",
    'K' => "ᴷ",
    'L' => "ᴸ",
    'M' => "ᴹ",
    'N' => "ᴺ",
    'O' => "ᴼ",
    'P' => "ᴾ",
    'Q' => "Q",
    'R' => "ᴿ",
    'S' => "ˢ",
    'T' => "ᵀ",
    'U' => "ᵁ",
    'V' => "ⱽ",
    'W' => "ᵂ",
    'X' => "ˣ",
    'Y' => "ʸ",
    'Z' => "ᶻ",

    // Symbols
    '+' => "⁺",
    '-' => "⁻",
    '=' => "⁼",
    '(' => "⁽",
    ')' => "⁾",
    '.' => "˙",
    '/' => "⸍",
    ',' => "‚",
    ':' => ":",
    '*' => "∗",
    '!' => "ᵎ",
    '?' => "ˀ",
};

/// Compile-time lookup table for subscript characters.
static SUBSCRIPT_MAP: phf::Map<char, &'static str> = phf_map! {
    // Digits
    '0' => "₀",
    '1' => "₁",
    '2' => "₂",
    '3' => "₃",
    '4' => "₄",
    '5' => "₅",
    '6' => "₆",
    '7' => "₇",
    '8' => "₈",
    '9' => "₉",

    // Latin lowercase letters; no q or w, b c d f g z are look-alikes
    'a' => "ₐ",
    'b' => "ᵦ",
    'c' => "𝒸",
    'd' => "𝒹",
    'e' => "ₑ",
    'f' => "𝒻",
    'g' => "𝓰",
    'h' => "ₕ",
    'i' => "ᵢ",
    'j' => "ⱼ",
    'k' => "ₖ",
    'l' => "ₗ",
    'm' => "ₘ",
    'n' => "ₙ",
    'o' => "ₒ",
    'p' => "ₚ",
    'r' => "ᵣ",
    's' => "ₛ",
    't' => "ₜ",
    'u' => "ᵤ",
    'v' => "ᵥ",
    'x' => "ₓ",
    'y' => "ᵧ",
    'z' => "𝓏",

    // Symbols
    '+' => "₊",
    '-' => "₋",
    '=' => "₌",
    '(' => "₍",
    ')' => "₎",
    '.' => "․",
    '/' => "⸍",
    ',' => "‚",
    ':' => ":",
    '*' => "∗",
};

/// The superscript table.
pub static SUPERSCRIPT: CharacterMap = CharacterMap {
    name: "superscript",
    entries: &SUPERSCRIPT_MAP,
};

/// The subscript table.
pub static SUBSCRIPT: CharacterMap = CharacterMap {
    name: "subscript",
    entries: &SUBSCRIPT_MAP,
};

/// An immutable mapping from a source character to its styled replacement.
///
/// Replacements are strings rather than `char`s so that a glyph may span
/// several code points. Every replacement is non-empty.
#[derive(Debug, Clone, Copy)]
pub struct CharacterMap {
    name: &'static str,
    entries: &'static phf::Map<char, &'static str>,
}

impl CharacterMap {
    /// Look up the replacement for `c`.
    ///
    /// Returns `None` when `c` has no entry; this is the common case for
    /// whitespace and anything outside Latin letters, digits and the listed
    /// punctuation.
    #[inline]
    pub fn lookup(&self, c: char) -> Option<&'static str> {
        self.entries.get(&c).copied()
    }

    /// Whether `c` has an entry in this table.
    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.entries.contains_key(&c)
    }

    /// Short name of the table, used in diagnostics.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all `(source, replacement)` pairs in unspecified order.
    pub fn entries(&self) -> impl Iterator<Item = (char, &'static str)> + '_ {
        self.entries.entries().map(|(k, v)| (*k, *v))
    }
}

/// Convert a character to its Unicode superscript equivalent.
///
/// # Examples
///
/// ```rust
/// use supsub::script::tables::to_superscript;
///
/// assert_eq!(to_superscript('n'), Some("ⁿ"));
/// assert_eq!(to_superscript('q'), Some("ᑫ"));
/// assert_eq!(to_superscript(' '), None);
/// ```
#[inline]
pub fn to_superscript(c: char) -> Option<&'static str> {
    SUPERSCRIPT.lookup(c)
}

/// Convert a character to its Unicode subscript equivalent.
///
/// # Examples
///
/// ```rust
/// use supsub::script::tables::to_subscript;
///
/// assert_eq!(to_subscript('i'), Some("ᵢ"));
/// assert_eq!(to_subscript('w'), None);
/// ```
#[inline]
pub fn to_subscript(c: char) -> Option<&'static str> {
    SUBSCRIPT.lookup(c)
}
