//! Policy and style selectors for script conversion.
//!
//! [`UnmappedPolicy`] decides what happens to a character that has no entry
//! in the active table. [`ScriptStyle`] picks the table itself.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::tables::{CharacterMap, SUBSCRIPT, SUPERSCRIPT};
use crate::common::Error;

/// The default glyph emitted by [`UnmappedPolicy::Placeholder`] (U+FFFD).
pub const DEFAULT_PLACEHOLDER: &str = "\u{FFFD}";

/// How to handle characters absent from a conversion table.
///
/// One policy applies to every unmapped character of a single conversion.
///
/// # Examples
///
/// ```rust
/// use supsub::script::UnmappedPolicy;
///
/// let policy: UnmappedPolicy = "omit".parse().unwrap();
/// assert_eq!(policy, UnmappedPolicy::Omit);
/// assert_eq!(policy.label(), "Omit");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnmappedPolicy {
    /// Pass the original character through unchanged.
    #[default]
    Keep,
    /// Drop the character.
    Omit,
    /// Emit the placeholder glyph instead.
    Placeholder,
}

impl UnmappedPolicy {
    /// All variants, in the order a selector should present them.
    pub const ALL: [UnmappedPolicy; 3] = [
        UnmappedPolicy::Keep,
        UnmappedPolicy::Omit,
        UnmappedPolicy::Placeholder,
    ];

    /// Machine name, as accepted by [`FromStr`].
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            UnmappedPolicy::Keep => "keep",
            UnmappedPolicy::Omit => "omit",
            UnmappedPolicy::Placeholder => "placeholder",
        }
    }

    /// Human-readable label for a selector.
    #[inline]
    pub fn label(self) -> &'static str {
        match self {
            UnmappedPolicy::Keep => "Keep as is",
            UnmappedPolicy::Omit => "Omit",
            UnmappedPolicy::Placeholder => "Replace with placeholder",
        }
    }
}

impl fmt::Display for UnmappedPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnmappedPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        UnmappedPolicy::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::InvalidPolicy(name.to_string()))
    }
}

/// Which of the two conversion tables to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptStyle {
    /// Raised glyphs (`x²`).
    Superscript,
    /// Lowered glyphs (`x₂`).
    Subscript,
}

impl ScriptStyle {
    pub const ALL: [ScriptStyle; 2] = [ScriptStyle::Superscript, ScriptStyle::Subscript];

    /// The table backing this style.
    #[inline]
    pub fn map(self) -> &'static CharacterMap {
        match self {
            ScriptStyle::Superscript => &SUPERSCRIPT,
            ScriptStyle::Subscript => &SUBSCRIPT,
        }
    }

    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            ScriptStyle::Superscript => "superscript",
            ScriptStyle::Subscript => "subscript",
        }
    }
}

impl fmt::Display for ScriptStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScriptStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        match name.as_str() {
            "superscript" | "sup" => Ok(ScriptStyle::Superscript),
            "subscript" | "sub" => Ok(ScriptStyle::Subscript),
            _ => Err(Error::InvalidStyle(s.trim().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_parse() {
        assert_eq!("keep".parse::<UnmappedPolicy>().unwrap(), UnmappedPolicy::Keep);
        assert_eq!(" OMIT ".parse::<UnmappedPolicy>().unwrap(), UnmappedPolicy::Omit);
        assert_eq!(
            "Placeholder".parse::<UnmappedPolicy>().unwrap(),
            UnmappedPolicy::Placeholder
        );
    }

    #[test]
    fn test_policy_parse_rejects_unknown() {
        let err = "replace".parse::<UnmappedPolicy>().unwrap_err();
        assert!(matches!(err, Error::InvalidPolicy(ref name) if name == "replace"));
    }

    #[test]
    fn test_policy_round_trips_through_display() {
        for policy in UnmappedPolicy::ALL {
            assert_eq!(policy.to_string().parse::<UnmappedPolicy>().unwrap(), policy);
        }
    }

    #[test]
    fn test_policy_labels() {
        let labels: Vec<_> = UnmappedPolicy::ALL.iter().map(|p| p.label()).collect();
        assert_eq!(labels, ["Keep as is", "Omit", "Replace with placeholder"]);
        assert_eq!(UnmappedPolicy::default(), UnmappedPolicy::Keep);
    }

    #[test]
    fn test_style_parse_and_map() {
        assert_eq!("sup".parse::<ScriptStyle>().unwrap(), ScriptStyle::Superscript);
        assert_eq!("Subscript".parse::<ScriptStyle>().unwrap(), ScriptStyle::Subscript);
        assert!(matches!(
            "italic".parse::<ScriptStyle>(),
            Err(Error::InvalidStyle(_))
        ));
        assert_eq!(ScriptStyle::Superscript.map().name(), "superscript");
        assert_eq!(ScriptStyle::Subscript.map().name(), "subscript");
    }

    #[test]
    fn test_default_placeholder() {
        assert_eq!(DEFAULT_PLACEHOLDER, "�");
        assert_eq!(DEFAULT_PLACEHOLDER.chars().count(), 1);
    }
}
