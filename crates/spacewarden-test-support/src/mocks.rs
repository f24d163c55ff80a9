//! In-memory torrent client for deterministic tests.

use std::collections::{HashMap, HashSet};
use std::io;
use std::sync::Mutex;

use async_trait::async_trait;
use spacewarden_torrent_core::{RawTorrent, TorrentClient, TorrentError, TorrentResult, Tracker};

/// One call observed by [`MockTorrentClient`], in invocation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    /// `list_torrents` was invoked.
    List,
    /// `pause` with the given hashes.
    Pause(Vec<String>),
    /// `resume` with the given hashes.
    Resume(Vec<String>),
    /// `reannounce` with the given hashes.
    Reannounce(Vec<String>),
    /// `trackers` for the given hash.
    Trackers(String),
}

/// Torrent client that serves canned data and records every call.
///
/// Control calls targeting a hash registered via
/// [`MockTorrentClient::with_failing`] return an error after being
/// recorded, mimicking a client that accepted the request but failed it.
#[derive(Debug, Default)]
pub struct MockTorrentClient {
    torrents: Vec<RawTorrent>,
    trackers: HashMap<String, Vec<Tracker>>,
    failing: HashSet<String>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockTorrentClient {
    /// Add a torrent to the canned listing.
    #[must_use]
    pub fn with_torrent(mut self, raw: RawTorrent) -> Self {
        self.torrents.push(raw);
        self
    }

    /// Register the tracker list returned for `hash`.
    #[must_use]
    pub fn with_trackers(mut self, hash: &str, trackers: Vec<Tracker>) -> Self {
        self.trackers.insert(hash.to_string(), trackers);
        self
    }

    /// Make control calls targeting `hash` fail.
    #[must_use]
    pub fn with_failing(mut self, hash: &str) -> Self {
        self.failing.insert(hash.to_string());
        self
    }

    /// Snapshot of the calls recorded so far.
    #[must_use]
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    fn record(&self, call: RecordedCall) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }

    fn check(&self, operation: &'static str, hashes: &[String]) -> TorrentResult<()> {
        if let Some(hash) = hashes.iter().find(|hash| self.failing.contains(*hash)) {
            return Err(TorrentError::operation_failed(
                operation,
                Some(hash.clone()),
                io::Error::other("injected failure"),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl TorrentClient for MockTorrentClient {
    async fn list_torrents(&self) -> TorrentResult<Vec<RawTorrent>> {
        self.record(RecordedCall::List);
        Ok(self.torrents.clone())
    }

    async fn pause(&self, hashes: &[String]) -> TorrentResult<()> {
        self.record(RecordedCall::Pause(hashes.to_vec()));
        self.check("torrents.pause", hashes)
    }

    async fn resume(&self, hashes: &[String]) -> TorrentResult<()> {
        self.record(RecordedCall::Resume(hashes.to_vec()));
        self.check("torrents.resume", hashes)
    }

    async fn reannounce(&self, hashes: &[String]) -> TorrentResult<()> {
        self.record(RecordedCall::Reannounce(hashes.to_vec()));
        self.check("torrents.reannounce", hashes)
    }

    async fn trackers(&self, hash: &str) -> TorrentResult<Vec<Tracker>> {
        self.record(RecordedCall::Trackers(hash.to_string()));
        Ok(self.trackers.get(hash).cloned().unwrap_or_default())
    }
}
