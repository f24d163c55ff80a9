//! Client capability trait implemented by torrent adapters.

use async_trait::async_trait;

use crate::error::TorrentResult;
use crate::model::{RawTorrent, Tracker};

/// Capability boundary for a remote torrent client.
///
/// Operations target torrents by info-hash and are idempotent from the
/// caller's perspective: pausing an already-paused torrent or resuming a
/// running one is a no-op on the client side. Any implementation
/// (HTTP-backed, mock, in-memory) satisfies the reconciliation engine's
/// contract.
#[async_trait]
pub trait TorrentClient: Send + Sync {
    /// List every torrent known to the client.
    async fn list_torrents(&self) -> TorrentResult<Vec<RawTorrent>>;

    /// Pause the given torrents.
    async fn pause(&self, hashes: &[String]) -> TorrentResult<()>;

    /// Resume the given torrents.
    async fn resume(&self, hashes: &[String]) -> TorrentResult<()>;

    /// Ask the given torrents to re-announce to their trackers.
    async fn reannounce(&self, hashes: &[String]) -> TorrentResult<()>;

    /// Fetch the tracker list for one torrent.
    async fn trackers(&self, hash: &str) -> TorrentResult<Vec<Tracker>>;
}
