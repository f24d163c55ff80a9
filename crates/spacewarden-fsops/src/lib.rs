#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Filesystem probes backing the disk-space budget.
//!
//! The reconciliation run cannot decide a budget without knowing how many
//! bytes the download volume has left, so probe failures are fatal to the
//! caller.

pub mod error;

pub use error::{FsOpsError, FsOpsResult};

use std::path::Path;

use nix::sys::statvfs::statvfs;

/// Bytes available to unprivileged writers on the filesystem holding `path`.
///
/// Read-only; the value reflects `f_bavail * f_frsize` at call time.
///
/// # Errors
///
/// Returns [`FsOpsError::Nix`] when `path` does not resolve to a mounted
/// filesystem.
pub fn available_space(path: &Path) -> FsOpsResult<u64> {
    let stats = statvfs(path).map_err(|source| FsOpsError::Nix {
        operation: "statvfs",
        path: path.to_path_buf(),
        source,
    })?;
    let available = u128::from(stats.blocks_available()) * u128::from(stats.fragment_size());
    Ok(u64::try_from(available).unwrap_or(u64::MAX))
}
