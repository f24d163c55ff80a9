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

//! Logging initialisation for the spacewarden binary.
//!
//! Layout: `init.rs` (subscriber setup and logging configuration),
//! `error.rs` (structured errors).

pub mod error;
pub mod init;

pub use error::{TelemetryError, TelemetryResult};
pub use init::{LogFormat, LoggingConfig, init_logging};
