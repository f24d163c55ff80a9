//! Error types for telemetry initialisation.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Primary error type for telemetry operations.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// IO failures while preparing the log file.
    #[error("telemetry io failure")]
    Io {
        /// Operation that triggered the IO failure.
        operation: &'static str,
        /// Path involved in the IO failure.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
    /// The global tracing subscriber could not be installed.
    #[error("telemetry subscriber installation failed")]
    Subscriber {
        /// Installation failure message reported by tracing.
        message: String,
    },
}

/// Convenience alias for telemetry results.
pub type TelemetryResult<T> = Result<T, TelemetryError>;
