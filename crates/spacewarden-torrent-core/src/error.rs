//! Error types for torrent client operations.
//!
//! # Design
//! - Keep error messages constant while carrying context fields for debugging.
//! - Preserve source errors without re-logging at call sites.

use std::error::Error;

use thiserror::Error;

/// Primary error type for torrent client operations.
#[derive(Debug, Error)]
pub enum TorrentError {
    /// Authentication against the client endpoint was rejected.
    #[error("torrent client authentication failed")]
    AuthFailed {
        /// Endpoint the login was attempted against.
        endpoint: String,
    },
    /// Operation failed in the underlying client.
    #[error("torrent operation failed")]
    OperationFailed {
        /// Operation identifier.
        operation: &'static str,
        /// Torrent info-hash when the failure is torrent-scoped.
        hash: Option<String>,
        /// Underlying failure.
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
}

impl TorrentError {
    /// Build an [`TorrentError::OperationFailed`] with a boxed source.
    pub fn operation_failed(
        operation: &'static str,
        hash: Option<String>,
        source: impl Into<Box<dyn Error + Send + Sync>>,
    ) -> Self {
        Self::OperationFailed {
            operation,
            hash,
            source: source.into(),
        }
    }
}

/// Convenience alias for torrent operation results.
pub type TorrentResult<T> = Result<T, TorrentError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn operation_failed_preserves_source() {
        let error = TorrentError::operation_failed(
            "torrents.pause",
            Some("aa11".to_string()),
            io::Error::other("boom"),
        );
        assert!(matches!(error, TorrentError::OperationFailed { .. }));
        assert!(error.source().is_some());
    }

    #[test]
    fn auth_failed_has_constant_message() {
        let error = TorrentError::AuthFailed {
            endpoint: "http://localhost:8080".to_string(),
        };
        assert_eq!(error.to_string(), "torrent client authentication failed");
    }
}
