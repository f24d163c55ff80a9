//! Sequential application of a reconciliation plan.

use spacewarden_torrent_core::TorrentClient;
use tracing::{info, warn};

use crate::model::{Action, ExecutionReport};

/// Applies planner actions against a torrent client, one at a time.
///
/// A failed action is logged and skipped; the remaining plan still runs
/// because every action targets an independent torrent. Nothing is retried
/// within a run: the next scheduled pass re-observes client state and
/// decides again.
pub struct ActionExecutor<'a> {
    client: &'a dyn TorrentClient,
}

impl<'a> ActionExecutor<'a> {
    /// Create an executor borrowing the client capability.
    #[must_use]
    pub const fn new(client: &'a dyn TorrentClient) -> Self {
        Self { client }
    }

    /// Apply `actions` in order, returning outcome counters.
    pub async fn apply(&self, actions: &[Action]) -> ExecutionReport {
        let mut report = ExecutionReport::default();
        for action in actions {
            match action {
                Action::Pause(view) => {
                    info!(hash = %view.id, name = %view.name, "pause");
                    match self.client.pause(&[view.id.clone()]).await {
                        Ok(()) => report.paused += 1,
                        Err(error) => {
                            warn!(
                                hash = %view.id,
                                name = %view.name,
                                error = %error,
                                "pause failed"
                            );
                            report.failed += 1;
                        }
                    }
                }
                Action::Resume(view) => {
                    info!(hash = %view.id, name = %view.name, "resume");
                    match self.client.resume(&[view.id.clone()]).await {
                        Ok(()) => {
                            report.resumed += 1;
                            // Resuming alone does not guarantee a fresh
                            // tracker contact.
                            info!(hash = %view.id, name = %view.name, "reannounce");
                            if let Err(error) = self.client.reannounce(&[view.id.clone()]).await {
                                warn!(
                                    hash = %view.id,
                                    name = %view.name,
                                    error = %error,
                                    "reannounce failed"
                                );
                            }
                        }
                        Err(error) => {
                            warn!(
                                hash = %view.id,
                                name = %view.name,
                                error = %error,
                                "resume failed"
                            );
                            report.failed += 1;
                        }
                    }
                }
            }
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TorrentView;
    use spacewarden_test_support::fixtures;
    use spacewarden_test_support::mocks::{MockTorrentClient, RecordedCall};

    fn view(raw: &spacewarden_torrent_core::RawTorrent) -> TorrentView {
        TorrentView::from_raw(raw)
    }

    #[tokio::test]
    async fn every_resume_is_paired_with_a_reannounce() {
        let client = MockTorrentClient::default();
        let executor = ActionExecutor::new(&client);
        let actions = vec![Action::Resume(view(&fixtures::paused("x", "x", 10, 0.0)))];
        let report = executor.apply(&actions).await;
        assert_eq!(report.resumed, 1);
        assert_eq!(report.failed, 0);
        assert_eq!(
            client.calls(),
            vec![
                RecordedCall::Resume(vec!["x".to_string()]),
                RecordedCall::Reannounce(vec!["x".to_string()]),
            ]
        );
    }

    #[tokio::test]
    async fn a_failed_action_does_not_abort_the_plan() {
        let client = MockTorrentClient::default().with_failing("a");
        let executor = ActionExecutor::new(&client);
        let actions = vec![
            Action::Pause(view(&fixtures::downloading("a", "a", 10, 0.0))),
            Action::Pause(view(&fixtures::downloading("b", "b", 10, 0.0))),
        ];
        let report = executor.apply(&actions).await;
        assert_eq!(report.paused, 1);
        assert_eq!(report.failed, 1);
        assert_eq!(
            client.calls(),
            vec![
                RecordedCall::Pause(vec!["a".to_string()]),
                RecordedCall::Pause(vec!["b".to_string()]),
            ]
        );
    }

    #[tokio::test]
    async fn a_failed_resume_skips_its_reannounce() {
        let client = MockTorrentClient::default().with_failing("x");
        let executor = ActionExecutor::new(&client);
        let actions = vec![
            Action::Resume(view(&fixtures::paused("x", "x", 10, 0.0))),
            Action::Resume(view(&fixtures::paused("y", "y", 10, 0.0))),
        ];
        let report = executor.apply(&actions).await;
        assert_eq!(report.resumed, 1);
        assert_eq!(report.failed, 1);
        assert_eq!(
            client.calls(),
            vec![
                RecordedCall::Resume(vec!["x".to_string()]),
                RecordedCall::Resume(vec!["y".to_string()]),
                RecordedCall::Reannounce(vec!["y".to_string()]),
            ]
        );
    }

    #[tokio::test]
    async fn an_empty_plan_is_a_no_op() {
        let client = MockTorrentClient::default();
        let executor = ActionExecutor::new(&client);
        let report = executor.apply(&[]).await;
        assert_eq!(report, ExecutionReport::default());
        assert!(client.calls().is_empty());
    }
}
