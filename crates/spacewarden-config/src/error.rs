//! Error types for configuration operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Primary error type for configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO failures while reading the configuration file.
    #[error("configuration io failure")]
    Io {
        /// Operation that triggered the IO failure.
        operation: &'static str,
        /// Path involved in the IO failure.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
    /// JSON parsing failures for the configuration file.
    #[error("configuration parse failure")]
    Parse {
        /// Path of the file that failed to parse.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
    /// Field contained an invalid value.
    #[error("invalid configuration field")]
    InvalidField {
        /// Field that failed validation.
        field: &'static str,
        /// Offending value when available.
        value: Option<String>,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
}

/// Convenience alias for configuration results.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn io_variant_preserves_source() {
        let error = ConfigError::Io {
            operation: "config.read",
            path: PathBuf::from("./config.json"),
            source: io::Error::other("io"),
        };
        assert_eq!(error.to_string(), "configuration io failure");
        assert!(error.source().is_some());
    }

    #[test]
    fn invalid_field_has_constant_message() {
        let error = ConfigError::InvalidField {
            field: "qbittorrent_url",
            value: Some("not a url".to_string()),
            reason: "not_a_url",
        };
        assert_eq!(error.to_string(), "invalid configuration field");
    }
}
