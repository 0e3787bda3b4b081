//! Options shared by both outputs of a conversion.
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::policy::{DEFAULT_PLACEHOLDER, UnmappedPolicy};
use crate::common::Result;

/// Configuration options for script conversion.
///
/// Bundles the unmapped-character policy with the placeholder glyph so that
/// both outputs of [`convert`](super::convert) share one setting.
///
/// # Examples
///
/// ```rust
/// use supsub::script::{ConversionOptions, UnmappedPolicy};
///
/// // Create with defaults
/// let options = ConversionOptions::default();
///
/// // Or customize
/// let options = ConversionOptions::new()
///     .with_policy(UnmappedPolicy::Placeholder)
///     .with_placeholder("_");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionOptions {
    /// What to do with characters the table does not cover
    pub policy: UnmappedPolicy,
    /// Replacement emitted under [`UnmappedPolicy::Placeholder`]
    pub placeholder: String,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            policy: UnmappedPolicy::Keep,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

impl ConversionOptions {
    /// Create a new `ConversionOptions` with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the unmapped-character policy.
    #[inline]
    pub fn with_policy(mut self, policy: UnmappedPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the placeholder glyph.
    ///
    /// Only consulted under [`UnmappedPolicy::Placeholder`]. An empty string
    /// is accepted and behaves like [`UnmappedPolicy::Omit`].
    #[inline]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    #[inline]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Parse options from a TOML document. Missing keys take their defaults.
    ///
    /// ```rust
    /// use supsub::script::{ConversionOptions, UnmappedPolicy};
    ///
    /// let options = ConversionOptions::from_toml_str("policy = \"omit\"").unwrap();
    /// assert_eq!(options.policy, UnmappedPolicy::Omit);
    /// assert_eq!(options.placeholder(), "\u{FFFD}");
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Load options from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let options = Self::from_toml_str(&source)?;
        debug!(path = %path.display(), policy = %options.policy, "loaded conversion options");
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Error;
    use std::io::Write;

    #[test]
    fn test_conversion_options_builder() {
        let options = ConversionOptions::new()
            .with_policy(UnmappedPolicy::Placeholder)
            .with_placeholder("?");

        assert_eq!(options.policy, UnmappedPolicy::Placeholder);
        assert_eq!(options.placeholder(), "?");
    }

    #[test]
    fn test_conversion_options_default() {
        let options = ConversionOptions::default();
        assert_eq!(options.policy, UnmappedPolicy::Keep);
        assert_eq!(options.placeholder(), "\u{FFFD}");
    }

    #[test]
    fn test_from_toml_str_full_and_partial() {
        let options =
            ConversionOptions::from_toml_str("policy = \"placeholder\"\nplaceholder = \"#\"")
                .unwrap();
        assert_eq!(options.policy, UnmappedPolicy::Placeholder);
        assert_eq!(options.placeholder(), "#");

        let options = ConversionOptions::from_toml_str("").unwrap();
        assert_eq!(options, ConversionOptions::default());
    }

    #[test]
    fn test_from_toml_str_rejects_unknown_policy() {
        let err = ConversionOptions::from_toml_str("policy = \"drop\"").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_from_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "policy = \"omit\"").unwrap();

        let options = ConversionOptions::from_toml_file(file.path()).unwrap();
        assert_eq!(options.policy, UnmappedPolicy::Omit);
    }

    #[test]
    fn test_from_toml_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = ConversionOptions::from_toml_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
