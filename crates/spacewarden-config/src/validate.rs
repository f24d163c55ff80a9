//! Validation helpers applied after a configuration file parses.

use url::Url;

use crate::error::{ConfigError, ConfigResult};
use crate::model::Config;

/// Validate semantic constraints the serde model cannot express.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] naming the offending field when the
/// client URL is malformed or non-HTTP, the download directory is empty, or
/// the log format override is unknown.
pub fn validate(config: &Config) -> ConfigResult<()> {
    let url = Url::parse(&config.client_url).map_err(|_| ConfigError::InvalidField {
        field: "qbittorrent_url",
        value: Some(config.client_url.clone()),
        reason: "not_a_url",
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidField {
            field: "qbittorrent_url",
            value: Some(config.client_url.clone()),
            reason: "unsupported_scheme",
        });
    }

    if config.download_dir.as_os_str().is_empty() {
        return Err(ConfigError::InvalidField {
            field: "download_location",
            value: None,
            reason: "empty",
        });
    }

    if let Some(format) = config.log_format.as_deref()
        && !matches!(format, "json" | "pretty")
    {
        return Err(ConfigError::InvalidField {
            field: "log_format",
            value: Some(format.to_string()),
            reason: "unknown_format",
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        serde_json::from_str(
            r#"{
                "qbittorrent_url": "http://localhost:8080",
                "download_location": "/downloads"
            }"#,
        )
        .expect("valid config")
    }

    #[test]
    fn accepts_a_minimal_config() -> ConfigResult<()> {
        validate(&base_config())
    }

    #[test]
    fn rejects_a_malformed_url() {
        let mut config = base_config();
        config.client_url = "not a url".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::InvalidField {
                field: "qbittorrent_url",
                reason: "not_a_url",
                ..
            })
        ));
    }

    #[test]
    fn rejects_a_non_http_scheme() {
        let mut config = base_config();
        config.client_url = "ftp://localhost".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::InvalidField {
                reason: "unsupported_scheme",
                ..
            })
        ));
    }

    #[test]
    fn rejects_an_empty_download_dir() {
        let mut config = base_config();
        config.download_dir = std::path::PathBuf::new();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::InvalidField {
                field: "download_location",
                ..
            })
        ));
    }

    #[test]
    fn rejects_an_unknown_log_format() {
        let mut config = base_config();
        config.log_format = Some("yaml".to_string());
        assert!(matches!(
            validate(&config),
            Err(ConfigError::InvalidField {
                field: "log_format",
                ..
            })
        ));
    }
}
