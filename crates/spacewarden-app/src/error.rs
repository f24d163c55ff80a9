//! # Design
//!
//! - Centralize application-level errors for bootstrap and orchestration.
//! - Keep error messages constant while carrying context fields for
//!   debugging.
//! - Preserve source errors without re-logging at call sites.

use thiserror::Error;

/// Result alias for application operations.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration operations failed.
    #[error("configuration operation failed")]
    Config {
        /// Operation identifier.
        operation: &'static str,
        /// Source configuration error.
        source: spacewarden_config::ConfigError,
    },
    /// Telemetry operations failed.
    #[error("telemetry operation failed")]
    Telemetry {
        /// Operation identifier.
        operation: &'static str,
        /// Source telemetry error.
        source: spacewarden_telemetry::TelemetryError,
    },
    /// Torrent client operations failed.
    #[error("torrent operation failed")]
    Torrent {
        /// Operation identifier.
        operation: &'static str,
        /// Source torrent error.
        source: spacewarden_torrent_core::TorrentError,
    },
    /// Filesystem probe operations failed.
    #[error("filesystem probe failed")]
    FsOps {
        /// Operation identifier.
        operation: &'static str,
        /// Source fsops error.
        source: spacewarden_fsops::FsOpsError,
    },
}

impl AppError {
    pub(crate) const fn config(
        operation: &'static str,
        source: spacewarden_config::ConfigError,
    ) -> Self {
        Self::Config { operation, source }
    }

    pub(crate) const fn telemetry(
        operation: &'static str,
        source: spacewarden_telemetry::TelemetryError,
    ) -> Self {
        Self::Telemetry { operation, source }
    }

    pub(crate) const fn torrent(
        operation: &'static str,
        source: spacewarden_torrent_core::TorrentError,
    ) -> Self {
        Self::Torrent { operation, source }
    }

    pub(crate) const fn fsops(
        operation: &'static str,
        source: spacewarden_fsops::FsOpsError,
    ) -> Self {
        Self::FsOps { operation, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn app_error_helpers_build_variants() {
        let torrent = AppError::torrent(
            "auth.login",
            spacewarden_torrent_core::TorrentError::AuthFailed {
                endpoint: "http://localhost:8080/".to_string(),
            },
        );
        assert!(matches!(torrent, AppError::Torrent { .. }));
        assert!(torrent.source().is_some());

        let probe = spacewarden_fsops::available_space(std::path::Path::new(
            "/spacewarden/does/not/exist",
        ));
        let Err(source) = probe else {
            panic!("expected the probe of a missing path to fail");
        };
        let fsops = AppError::fsops("space.probe", source);
        assert!(matches!(
            fsops,
            AppError::FsOps {
                operation: "space.probe",
                ..
            }
        ));
    }
}
