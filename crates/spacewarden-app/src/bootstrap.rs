//! Process bootstrap: command line, configuration, logging, and the client
//! session wrapped around one reconciliation pass.

use std::path::PathBuf;

use clap::Parser;
use spacewarden_config::Config;
use spacewarden_engine::ReconcilePolicy;
use spacewarden_telemetry::{LogFormat, LoggingConfig, init_logging};
use spacewarden_torrent_core::TorrentError;
use spacewarden_torrent_qbit::QbitClient;
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::orchestrator::{PassSettings, run_pass};

/// Command line for the reconciler binary.
#[derive(Debug, Parser)]
#[command(
    name = "spacewarden",
    version,
    about = "Pause and resume incomplete torrents so projected disk usage stays under budget"
)]
pub struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, default_value = "./config.json")]
    pub config: PathBuf,
    /// Resume paused torrents when the budget allows it.
    #[arg(long, conflicts_with = "no_auto_resume")]
    pub auto_resume: bool,
    /// Never resume paused torrents, regardless of configuration.
    #[arg(long)]
    pub no_auto_resume: bool,
}

impl Cli {
    /// Auto-resume setting after applying command-line overrides to the
    /// configured value.
    #[must_use]
    pub const fn effective_auto_resume(&self, configured: bool) -> bool {
        if self.no_auto_resume {
            false
        } else {
            self.auto_resume || configured
        }
    }
}

/// Run one reconciliation pass end to end: load configuration, install
/// logging, authenticate, reconcile, and tear the session down.
///
/// # Errors
///
/// Returns an error when configuration, logging setup, authentication, the
/// client listing, or the free-space probe fails. Per-torrent control
/// failures are logged and counted instead.
pub async fn run_app(cli: Cli) -> AppResult<()> {
    let config = spacewarden_config::load(&cli.config)
        .map_err(|source| AppError::config("config.load", source))?;
    init_logging(&logging_config(&config))
        .map_err(|source| AppError::telemetry("logging.init", source))?;

    let policy = ReconcilePolicy {
        auto_resume: cli.effective_auto_resume(config.auto_resume),
        skip_force_resume: config.skip_force_resume,
    };
    info!(
        endpoint = %config.client_url,
        download_dir = %config.download_dir.display(),
        margin_gib = config.space_margin_gib,
        auto_resume = policy.auto_resume,
        skip_force_resume = policy.skip_force_resume,
        "starting reconciliation run"
    );

    let client = QbitClient::new(&config.client_url)
        .map_err(|source| AppError::torrent("client.new", TorrentError::from(source)))?;
    client
        .login(&config.client_user, &config.client_pass)
        .await
        .map_err(|source| AppError::torrent("auth.login", TorrentError::from(source)))?;

    let settings = PassSettings {
        download_dir: config.download_dir.clone(),
        margin_bytes: config.margin_bytes(),
        policy,
    };
    // Log out even when the pass fails; the session is server-side state.
    let outcome = run_pass(&client, &settings).await;
    client.logout().await;
    outcome.map(|_| ())
}

fn logging_config(config: &Config) -> LoggingConfig<'_> {
    LoggingConfig {
        level: &config.log_level,
        format: LogFormat::from_label(config.log_format.as_deref()),
        directory: config.log_dir.as_deref(),
    }
}
