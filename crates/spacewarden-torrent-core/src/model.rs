//! Raw torrent DTOs shared between client adapters and consumers.
//!
//! # Design
//! - Pure data carriers mirroring what the remote client reports.
//! - Field names double as the wire names used by the qBittorrent adapter.

use serde::{Deserialize, Serialize};

/// One torrent entry as reported by the remote client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawTorrent {
    /// Info-hash identifying the torrent; unique within a listing.
    pub hash: String,
    /// Display name.
    pub name: String,
    /// Category label assigned in the client; informational only.
    #[serde(default)]
    pub category: String,
    /// Total selected size in bytes.
    pub size: u64,
    /// Completion fraction reported by the client, nominally in `[0, 1]`.
    pub progress: f64,
    /// Raw state label (for example `downloading` or `pausedDL`).
    pub state: String,
    /// Whether the torrent is force-started in the client.
    #[serde(default)]
    pub force_start: bool,
    /// Unix timestamp of completion; zero or negative when never completed.
    #[serde(default)]
    pub completion_on: i64,
}

/// Tracker entry attached to a torrent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tracker {
    /// Announce URL.
    pub url: String,
    /// Client-specific tracker status code.
    #[serde(default)]
    pub status: i32,
    /// Last message reported by the tracker, if any.
    #[serde(default)]
    pub msg: String,
}
