//! # Design
//!
//! - Centralize adapter error context without using `anyhow`.
//! - Keep error messages constant; store operational context in fields.
//! - Convert into `TorrentError` at the capability boundary so callers only
//!   see the core error type.

use spacewarden_torrent_core::TorrentError;
use thiserror::Error;

/// Internal error details used by the qBittorrent adapter.
#[derive(Debug, Error)]
pub enum QbitError {
    /// A URL failed to parse or join.
    #[error("qbittorrent url invalid")]
    Url {
        /// Operation that produced the URL.
        operation: &'static str,
        /// Offending URL or path fragment.
        value: String,
        /// Underlying parse error.
        source: url::ParseError,
    },
    /// An HTTP request failed to complete.
    #[error("qbittorrent http failure")]
    Http {
        /// Operation that triggered the failure.
        operation: &'static str,
        /// Request URL.
        url: String,
        /// Underlying HTTP client error.
        source: reqwest::Error,
    },
    /// The server answered with a non-success status.
    #[error("qbittorrent status error")]
    Status {
        /// Operation that triggered the failure.
        operation: &'static str,
        /// Request URL.
        url: String,
        /// HTTP status code returned by the server.
        status: u16,
    },
    /// The server rejected the supplied credentials.
    #[error("qbittorrent login rejected")]
    LoginRejected {
        /// Endpoint the login was attempted against.
        endpoint: String,
    },
    /// A response body could not be decoded.
    #[error("qbittorrent decode failure")]
    Decode {
        /// Operation that triggered the failure.
        operation: &'static str,
        /// Request URL.
        url: String,
        /// Underlying decode error.
        source: reqwest::Error,
    },
}

impl QbitError {
    /// Operation identifier carried by this error.
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::Url { operation, .. }
            | Self::Http { operation, .. }
            | Self::Status { operation, .. }
            | Self::Decode { operation, .. } => operation,
            Self::LoginRejected { .. } => "auth.login",
        }
    }
}

impl From<QbitError> for TorrentError {
    fn from(error: QbitError) -> Self {
        match error {
            QbitError::LoginRejected { endpoint } => Self::AuthFailed { endpoint },
            other => Self::operation_failed(other.operation(), None, other),
        }
    }
}

/// Convenience alias for adapter results.
pub type QbitResult<T> = Result<T, QbitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_rejection_maps_to_auth_failure() {
        let error = QbitError::LoginRejected {
            endpoint: "http://localhost:8080/".to_string(),
        };
        assert!(matches!(
            TorrentError::from(error),
            TorrentError::AuthFailed { .. }
        ));
    }

    #[test]
    fn other_errors_map_to_operation_failures() {
        let error = QbitError::Status {
            operation: "torrents.info",
            url: "http://localhost:8080/api/v2/torrents/info".to_string(),
            status: 500,
        };
        assert!(matches!(
            TorrentError::from(error),
            TorrentError::OperationFailed {
                operation: "torrents.info",
                ..
            }
        ));
    }
}
