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

//! Single-shot disk-space reconciler for a qBittorrent instance.
//!
//! One invocation probes free space on the download volume, compares it
//! against the bytes incomplete torrents still need, and pauses or resumes
//! torrents through the WebUI so the projection stays under the configured
//! margin. Designed to run repeatedly from a scheduler such as cron; each
//! run re-observes client state from scratch.

pub mod bootstrap;
pub mod error;
pub mod format;
pub mod orchestrator;

pub use bootstrap::{Cli, run_app};
pub use error::{AppError, AppResult};
pub use format::{human_bytes, human_bytes_i64};
pub use orchestrator::{PassSettings, RunSummary, run_pass};
