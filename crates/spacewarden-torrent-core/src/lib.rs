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

//! Client-agnostic torrent interfaces and DTOs.
//!
//! Layout: `model.rs` (raw listing DTOs), `service.rs` (the `TorrentClient`
//! capability trait), `error.rs` (structured client errors).

pub mod error;
pub mod model;
pub mod service;

pub use error::{TorrentError, TorrentResult};
pub use model::{RawTorrent, Tracker};
pub use service::TorrentClient;
