//! Error conversion implementations.
//!
//! This module contains From trait implementations to convert from third-party
//! error types to the unified Error type.

use super::types::Error;

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

#[cfg(feature = "cli")]
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_error_becomes_config() {
        let err = toml::from_str::<toml::Table>("policy = ").unwrap_err();
        let converted = Error::from(err);
        assert!(matches!(converted, Error::Config(_)));
        assert!(converted.to_string().starts_with("Config error:"));
    }
}
