//! Typed configuration model.
//!
//! # Design
//! - Pure data carrier deserialized from the JSON configuration file.
//! - Wire keys match the original deployment format, so existing config
//!   files keep working.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One gibibyte, the unit the space margin is configured in.
pub const GIB: u64 = 1 << 30;

/// Top-level configuration consumed by the binary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the qBittorrent WebUI endpoint.
    #[serde(rename = "qbittorrent_url")]
    pub client_url: String,
    /// WebUI username; empty when authentication is disabled client-side.
    #[serde(rename = "qbittorrent_user", default)]
    pub client_user: String,
    /// WebUI password.
    #[serde(rename = "qbittorrent_pass", default)]
    pub client_pass: String,
    /// Directory downloads are written to; the free-space probe targets
    /// this volume.
    #[serde(rename = "download_location")]
    pub download_dir: PathBuf,
    /// Safety margin in GiB subtracted from the probed free space.
    #[serde(rename = "space_margin", default)]
    pub space_margin_gib: u64,
    /// Whether paused torrents may be resumed when the budget allows it.
    #[serde(rename = "autoresume", default)]
    pub auto_resume: bool,
    /// Whether force-started torrents are exempt from pausing.
    #[serde(default)]
    pub skip_force_resume: bool,
    /// Directory the log file is written to; stderr only when unset.
    #[serde(rename = "log_file_path", default)]
    pub log_dir: Option<PathBuf>,
    /// Log level when `RUST_LOG` is not provided.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Log output format override (`json` or `pretty`).
    #[serde(default)]
    pub log_format: Option<String>,
}

impl Config {
    /// The configured margin expressed in bytes.
    #[must_use]
    pub const fn margin_bytes(&self) -> u64 {
        self.space_margin_gib.saturating_mul(GIB)
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn margin_is_expressed_in_gib() {
        let config: Config = serde_json::from_str(
            r#"{
                "qbittorrent_url": "http://localhost:8080",
                "download_location": "/downloads",
                "space_margin": 3
            }"#,
        )
        .expect("valid config");
        assert_eq!(config.margin_bytes(), 3 * GIB);
        assert_eq!(config.log_level, "info");
        assert!(!config.auto_resume);
        assert!(!config.skip_force_resume);
    }

    #[test]
    fn margin_saturates_instead_of_overflowing() {
        let config: Config = serde_json::from_str(
            r#"{
                "qbittorrent_url": "http://localhost:8080",
                "download_location": "/downloads",
                "space_margin": 18446744073709551615
            }"#,
        )
        .expect("valid config");
        assert_eq!(config.margin_bytes(), u64::MAX);
    }
}
