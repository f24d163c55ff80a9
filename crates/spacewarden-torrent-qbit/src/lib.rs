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

//! qBittorrent WebUI v2 adapter for the `TorrentClient` capability.
//!
//! Authentication uses the WebUI cookie session: a successful login stores
//! the `SID` cookie in the HTTP client's jar and every subsequent call
//! rides on it.

pub mod error;

pub use error::{QbitError, QbitResult};

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use spacewarden_torrent_core::{RawTorrent, TorrentClient, TorrentError, TorrentResult, Tracker};
use tracing::debug;

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// HTTP-backed qBittorrent WebUI client.
pub struct QbitClient {
    http: Client,
    base_url: Url,
}

impl QbitClient {
    /// Build a client for the WebUI at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error when the URL does not parse or the HTTP client
    /// cannot be constructed.
    pub fn new(base_url: &str) -> QbitResult<Self> {
        let base_url = Url::parse(base_url).map_err(|source| QbitError::Url {
            operation: "client.new",
            value: base_url.to_string(),
            source,
        })?;
        let http = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .cookie_store(true)
            .build()
            .map_err(|source| QbitError::Http {
                operation: "client.build",
                url: base_url.to_string(),
                source,
            })?;
        Ok(Self { http, base_url })
    }

    /// Authenticate against the WebUI, storing the session cookie on
    /// success.
    ///
    /// # Errors
    ///
    /// Returns [`QbitError::LoginRejected`] when the server answers with
    /// anything but the literal `Ok.` acknowledgement, and transport or
    /// status errors otherwise.
    pub async fn login(&self, username: &str, password: &str) -> QbitResult<()> {
        let url = self.endpoint("api/v2/auth/login")?;
        let response = self
            .http
            .post(url.clone())
            .form(&[("username", username), ("password", password)])
            .send()
            .await
            .map_err(|source| QbitError::Http {
                operation: "auth.login",
                url: url.to_string(),
                source,
            })?;
        if !response.status().is_success() {
            return Err(QbitError::Status {
                operation: "auth.login",
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }
        let body = response.text().await.map_err(|source| QbitError::Decode {
            operation: "auth.login",
            url: url.to_string(),
            source,
        })?;
        if body.trim() != "Ok." {
            return Err(QbitError::LoginRejected {
                endpoint: self.base_url.to_string(),
            });
        }
        debug!(endpoint = %self.base_url, "qbittorrent session established");
        Ok(())
    }

    /// Tear down the WebUI session. Best effort: failures are logged and
    /// swallowed because the session expires server-side anyway.
    pub async fn logout(&self) {
        let Ok(url) = self.endpoint("api/v2/auth/logout") else {
            return;
        };
        if let Err(error) = self.http.post(url).send().await {
            debug!(error = %error, "qbittorrent logout failed");
        }
    }

    fn endpoint(&self, path: &str) -> QbitResult<Url> {
        self.base_url.join(path).map_err(|source| QbitError::Url {
            operation: "client.endpoint",
            value: path.to_string(),
            source,
        })
    }

    async fn fetch_torrents(&self) -> QbitResult<Vec<RawTorrent>> {
        let url = self.endpoint("api/v2/torrents/info")?;
        let response = self
            .http
            .get(url.clone())
            .query(&[("filter", "all")])
            .send()
            .await
            .map_err(|source| QbitError::Http {
                operation: "torrents.info",
                url: url.to_string(),
                source,
            })?;
        if !response.status().is_success() {
            return Err(QbitError::Status {
                operation: "torrents.info",
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }
        response
            .json::<Vec<RawTorrent>>()
            .await
            .map_err(|source| QbitError::Decode {
                operation: "torrents.info",
                url: url.to_string(),
                source,
            })
    }

    async fn fetch_trackers(&self, hash: &str) -> QbitResult<Vec<Tracker>> {
        let url = self.endpoint("api/v2/torrents/trackers")?;
        let response = self
            .http
            .get(url.clone())
            .query(&[("hash", hash)])
            .send()
            .await
            .map_err(|source| QbitError::Http {
                operation: "torrents.trackers",
                url: url.to_string(),
                source,
            })?;
        if !response.status().is_success() {
            return Err(QbitError::Status {
                operation: "torrents.trackers",
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }
        response
            .json::<Vec<Tracker>>()
            .await
            .map_err(|source| QbitError::Decode {
                operation: "torrents.trackers",
                url: url.to_string(),
                source,
            })
    }

    async fn control(
        &self,
        operation: &'static str,
        path: &str,
        hashes: &[String],
    ) -> QbitResult<()> {
        let url = self.endpoint(path)?;
        let response = self
            .http
            .post(url.clone())
            .form(&[("hashes", hashes.join("|"))])
            .send()
            .await
            .map_err(|source| QbitError::Http {
                operation,
                url: url.to_string(),
                source,
            })?;
        if !response.status().is_success() {
            return Err(QbitError::Status {
                operation,
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl TorrentClient for QbitClient {
    async fn list_torrents(&self) -> TorrentResult<Vec<RawTorrent>> {
        self.fetch_torrents().await.map_err(TorrentError::from)
    }

    async fn pause(&self, hashes: &[String]) -> TorrentResult<()> {
        self.control("torrents.pause", "api/v2/torrents/pause", hashes)
            .await
            .map_err(TorrentError::from)
    }

    async fn resume(&self, hashes: &[String]) -> TorrentResult<()> {
        self.control("torrents.resume", "api/v2/torrents/resume", hashes)
            .await
            .map_err(TorrentError::from)
    }

    async fn reannounce(&self, hashes: &[String]) -> TorrentResult<()> {
        self.control("torrents.reannounce", "api/v2/torrents/reannounce", hashes)
            .await
            .map_err(TorrentError::from)
    }

    async fn trackers(&self, hash: &str) -> TorrentResult<Vec<Tracker>> {
        self.fetch_trackers(hash).await.map_err(TorrentError::from)
    }
}
