//! One reconciliation pass over a live client.
//!
//! # Design
//! - A pass is observe, decide, apply: list the client, classify and gate
//!   candidates, probe free space, plan against the budget, execute.
//! - The free-space probe is the only fatal step after listing; everything
//!   per-torrent degrades to a log line and the pass continues.

use std::path::PathBuf;

use spacewarden_engine::{
    ActionExecutor, Classification, ExecutionReport, ReconcilePolicy, RunState, TorrentView,
    classify, partition, reconcile,
};
use spacewarden_fsops::available_space;
use spacewarden_torrent_core::TorrentClient;
use tracing::{debug, info, warn};

use crate::error::{AppError, AppResult};
use crate::format::{human_bytes, human_bytes_i64};

/// Fixed inputs for one reconciliation pass.
#[derive(Debug, Clone)]
pub struct PassSettings {
    /// Directory downloads are written to; the free-space probe targets
    /// the volume holding it.
    pub download_dir: PathBuf,
    /// Safety margin in bytes subtracted from the probed free space.
    pub margin_bytes: u64,
    /// Planner policy toggles.
    pub policy: ReconcilePolicy,
}

/// Statistics describing one completed pass.
#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    /// Torrents returned by the client listing.
    pub processed: usize,
    /// Torrents the listing reported in a paused state, whether or not
    /// this run touched them.
    pub paused: usize,
    /// Fully downloaded torrents, excluded from reconciliation.
    pub completed: usize,
    /// Hash-checking torrents, skipped for this pass.
    pub checking: usize,
    /// Outcome counters from applying the plan.
    pub report: ExecutionReport,
    /// Bytes the active set still exceeds the budget by, if pausing alone
    /// could not satisfy it.
    pub shortfall: Option<u64>,
}

/// Execute one observe-decide-apply pass against `client`.
///
/// # Errors
///
/// Returns an error when the client listing or the free-space probe fails.
/// Per-torrent control failures are logged and counted instead.
pub async fn run_pass(
    client: &dyn TorrentClient,
    settings: &PassSettings,
) -> AppResult<RunSummary> {
    let raws = client
        .list_torrents()
        .await
        .map_err(|source| AppError::torrent("torrents.info", source))?;

    let mut paused = 0usize;
    let mut completed = 0usize;
    let mut checking = 0usize;
    let mut views = Vec::new();
    for raw in &raws {
        if RunState::from_label(&raw.state) == RunState::Paused {
            paused += 1;
        }
        match classify(raw) {
            Classification::Complete => completed += 1,
            Classification::Checking => {
                checking += 1;
                debug!(hash = %raw.hash, name = %raw.name, "skipping torrent while it checks");
            }
            Classification::Incomplete(view) => {
                // Paused torrents are not announcing anyway; only running
                // ones are gated on a reachable tracker.
                if view.run_state == RunState::Paused || announced(client, &view).await {
                    views.push(view);
                }
            }
        }
    }
    let candidates = partition(views);

    let free = available_space(&settings.download_dir)
        .map_err(|source| AppError::fsops("space.probe", source))?;
    let budget = budget_bytes(free, settings.margin_bytes);
    info!(
        free = %human_bytes(free),
        margin = %human_bytes(settings.margin_bytes),
        budget = %human_bytes_i64(budget),
        active = candidates.active.len(),
        paused = candidates.paused.len(),
        "computed space budget"
    );

    let plan = reconcile::plan(candidates, budget, settings.policy);
    if let Some(shortfall) = plan.shortfall {
        warn!(
            shortfall = %human_bytes(shortfall),
            "pausing every candidate still leaves the budget exceeded"
        );
    }
    let report = ActionExecutor::new(client).apply(&plan.actions).await;

    let summary = RunSummary {
        processed: raws.len(),
        paused,
        completed,
        checking,
        report,
        shortfall: plan.shortfall,
    };
    info!(
        processed = summary.processed,
        paused = summary.paused,
        completed = summary.completed,
        checking = summary.checking,
        newly_paused = summary.report.paused,
        resumed = summary.report.resumed,
        failed = summary.report.failed,
        remaining = %human_bytes(plan.total_active),
        "reconciliation pass complete"
    );
    Ok(summary)
}

/// Whether the torrent has at least one tracker registered.
///
/// A running torrent with an empty tracker list cannot make progress, so it
/// is nudged with a re-announce and dropped from this pass; the next run
/// sees whether the nudge worked. Lookup failures keep the candidate, since
/// a flaky endpoint must not hide torrents from accounting.
async fn announced(client: &dyn TorrentClient, view: &TorrentView) -> bool {
    match client.trackers(&view.id).await {
        Ok(trackers) if trackers.is_empty() => {
            warn!(
                hash = %view.id,
                name = %view.name,
                "no trackers registered; requesting a re-announce"
            );
            if let Err(error) = client.reannounce(&[view.id.clone()]).await {
                warn!(hash = %view.id, error = %error, "re-announce failed");
            }
            false
        }
        Ok(_) => true,
        Err(error) => {
            warn!(
                hash = %view.id,
                name = %view.name,
                error = %error,
                "tracker lookup failed; keeping candidate"
            );
            true
        }
    }
}

/// Free space minus margin, clamped into the `i64` budget domain.
fn budget_bytes(free: u64, margin: u64) -> i64 {
    let diff = i128::from(free) - i128::from(margin);
    i64::try_from(diff).unwrap_or(if diff.is_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use spacewarden_test_support::fixtures;
    use spacewarden_test_support::mocks::{MockTorrentClient, RecordedCall};

    fn settings(dir: &std::path::Path, margin_bytes: u64, auto_resume: bool) -> PassSettings {
        PassSettings {
            download_dir: dir.to_path_buf(),
            margin_bytes,
            policy: ReconcilePolicy {
                auto_resume,
                skip_force_resume: false,
            },
        }
    }

    #[tokio::test]
    async fn an_impossible_budget_pauses_every_candidate() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let client = MockTorrentClient::default()
            .with_torrent(fixtures::downloading("aa11", "iso", 1000, 0.5))
            .with_trackers(
                "aa11",
                vec![fixtures::tracker("udp://tracker.example/announce")],
            );
        let summary = run_pass(&client, &settings(dir.path(), u64::MAX, false)).await?;
        assert_eq!(summary.report.paused, 1);
        assert!(summary.shortfall.is_some());
        assert!(
            client
                .calls()
                .contains(&RecordedCall::Pause(vec!["aa11".to_string()]))
        );
        Ok(())
    }

    #[tokio::test]
    async fn a_generous_budget_resumes_the_backlog() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let client =
            MockTorrentClient::default().with_torrent(fixtures::paused("bb22", "movie", 10, 0.0));
        let summary = run_pass(&client, &settings(dir.path(), 0, true)).await?;
        assert_eq!(summary.paused, 1);
        assert_eq!(summary.report.resumed, 1);
        assert_eq!(summary.shortfall, None);
        let calls = client.calls();
        assert!(calls.contains(&RecordedCall::Resume(vec!["bb22".to_string()])));
        assert!(calls.contains(&RecordedCall::Reannounce(vec!["bb22".to_string()])));
        Ok(())
    }

    #[tokio::test]
    async fn trackerless_torrents_are_reannounced_and_excluded() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let client =
            MockTorrentClient::default().with_torrent(fixtures::downloading("aa11", "iso", 1000, 0.5));
        let summary = run_pass(&client, &settings(dir.path(), u64::MAX, false)).await?;
        assert_eq!(summary.report.paused, 0);
        let calls = client.calls();
        assert!(calls.contains(&RecordedCall::Trackers("aa11".to_string())));
        assert!(calls.contains(&RecordedCall::Reannounce(vec!["aa11".to_string()])));
        assert!(!calls.contains(&RecordedCall::Pause(vec!["aa11".to_string()])));
        Ok(())
    }

    #[tokio::test]
    async fn complete_and_checking_torrents_are_counted_not_touched() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let mut checking_raw = fixtures::downloading("cc33", "show", 500, 0.2);
        checking_raw.state = "checkingDL".to_string();
        let client = MockTorrentClient::default()
            .with_torrent(fixtures::completed("dd44", "album", 200))
            .with_torrent(checking_raw);
        let summary = run_pass(&client, &settings(dir.path(), u64::MAX, false)).await?;
        assert_eq!(summary.processed, 2);
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.checking, 1);
        assert_eq!(summary.report, ExecutionReport::default());
        assert_eq!(client.calls(), vec![RecordedCall::List]);
        Ok(())
    }

    #[tokio::test]
    async fn paused_listings_are_counted_without_being_touched() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let mut repaused = fixtures::paused("ee55", "season", 300, 0.2);
        repaused.completion_on = 1_700_000_000;
        let client = MockTorrentClient::default()
            .with_torrent(fixtures::paused("bb22", "movie", 500, 0.2))
            .with_torrent(repaused);
        let summary = run_pass(&client, &settings(dir.path(), 0, false)).await?;
        assert_eq!(summary.processed, 2);
        assert_eq!(summary.paused, 2);
        assert_eq!(summary.report, ExecutionReport::default());
        assert_eq!(client.calls(), vec![RecordedCall::List]);
        Ok(())
    }

    #[test]
    fn budgets_subtract_the_margin() {
        assert_eq!(budget_bytes(100, 40), 60);
        assert_eq!(budget_bytes(40, 100), -60);
    }

    #[test]
    fn budgets_clamp_instead_of_overflowing() {
        assert_eq!(budget_bytes(0, u64::MAX), i64::MIN);
        assert_eq!(budget_bytes(u64::MAX, 0), i64::MAX);
    }
}
