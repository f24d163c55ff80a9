//! Raw torrent fixtures for unit and integration tests.

use spacewarden_torrent_core::{RawTorrent, Tracker};

/// An actively downloading torrent.
#[must_use]
pub fn downloading(hash: &str, name: &str, size: u64, progress: f64) -> RawTorrent {
    RawTorrent {
        hash: hash.to_string(),
        name: name.to_string(),
        category: String::new(),
        size,
        progress,
        state: "downloading".to_string(),
        force_start: false,
        completion_on: 0,
    }
}

/// A paused, never-completed torrent.
#[must_use]
pub fn paused(hash: &str, name: &str, size: u64, progress: f64) -> RawTorrent {
    RawTorrent {
        state: "pausedDL".to_string(),
        ..downloading(hash, name, size, progress)
    }
}

/// A fully downloaded torrent with a completion timestamp.
#[must_use]
pub fn completed(hash: &str, name: &str, size: u64) -> RawTorrent {
    RawTorrent {
        progress: 1.0,
        completion_on: 1_700_000_000,
        ..downloading(hash, name, size, 1.0)
    }
}

/// A tracker entry with a working announce URL.
#[must_use]
pub fn tracker(url: &str) -> Tracker {
    Tracker {
        url: url.to_string(),
        status: 2,
        msg: String::new(),
    }
}
