//! # Design
//!
//! - Provide structured, constant-message errors for filesystem probes.
//! - Capture operation context (operation, path) to make failures
//!   reproducible in tests.
//! - Preserve source errors without interpolating context into messages.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for filesystem operations.
pub type FsOpsResult<T> = Result<T, FsOpsError>;

/// Errors produced by filesystem probes.
#[derive(Debug, Error)]
pub enum FsOpsError {
    /// Nix syscall failures.
    #[error("fsops nix failure")]
    Nix {
        /// Operation that triggered the nix failure.
        operation: &'static str,
        /// Path involved in the nix failure.
        path: PathBuf,
        /// Underlying nix error.
        source: nix::Error,
    },
}
