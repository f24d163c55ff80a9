//! Classification of raw client listings into reconciliation candidates.

use spacewarden_torrent_core::RawTorrent;
use tracing::debug;

use crate::model::{CandidateSets, RunState, TorrentView};

/// Outcome of classifying one raw torrent.
#[derive(Debug, Clone, PartialEq)]
pub enum Classification {
    /// Incomplete torrent that may participate in reconciliation.
    Incomplete(TorrentView),
    /// Fully downloaded; counted in run statistics but never reconciled.
    Complete,
    /// Hash-checking; excluded from this pass entirely.
    Checking,
}

/// Classify one raw listing entry.
#[must_use]
pub fn classify(raw: &RawTorrent) -> Classification {
    if raw.progress >= 1.0 {
        return Classification::Complete;
    }
    let view = TorrentView::from_raw(raw);
    if view.run_state == RunState::Checking {
        return Classification::Checking;
    }
    Classification::Incomplete(view)
}

/// Partition incomplete views into reconciliation candidate sets.
///
/// Paused torrents that recorded a completion timestamp were finished and
/// later re-paused outside this system; they are dropped from candidacy so
/// a deliberate operator pause is never overridden. Unrecognised run states
/// stay in the active set because they still occupy projected space.
#[must_use]
pub fn partition(views: Vec<TorrentView>) -> CandidateSets {
    let mut sets = CandidateSets::default();
    for view in views {
        match view.run_state {
            RunState::Paused => {
                if view.completion_on <= 0 {
                    sets.paused.push(view);
                } else {
                    debug!(
                        hash = %view.id,
                        name = %view.name,
                        completion_on = view.completion_on,
                        "ignoring paused torrent completed outside this run"
                    );
                }
            }
            _ => sets.active.push(view),
        }
    }
    sets
}

#[cfg(test)]
mod tests {
    use super::*;
    use spacewarden_test_support::fixtures;

    #[test]
    fn complete_torrents_are_excluded() {
        let raw = fixtures::downloading("aa11", "iso", 1000, 1.0);
        assert_eq!(classify(&raw), Classification::Complete);
    }

    #[test]
    fn checking_torrents_are_excluded() {
        let mut raw = fixtures::downloading("aa11", "iso", 1000, 0.5);
        raw.state = "checkingDL".to_string();
        assert_eq!(classify(&raw), Classification::Checking);
    }

    #[test]
    fn incomplete_torrents_produce_views() {
        let raw = fixtures::downloading("aa11", "iso", 1000, 0.5);
        let Classification::Incomplete(view) = classify(&raw) else {
            panic!("expected an incomplete classification");
        };
        assert_eq!(view.amount_left(), 500);
        assert_eq!(view.run_state, RunState::Active);
    }

    #[test]
    fn partition_splits_by_run_state() {
        let active = TorrentView::from_raw(&fixtures::downloading("aa11", "iso", 1000, 0.5));
        let paused = TorrentView::from_raw(&fixtures::paused("bb22", "movie", 500, 0.2));
        let sets = partition(vec![active, paused]);
        assert_eq!(sets.active.len(), 1);
        assert_eq!(sets.paused.len(), 1);
        assert_eq!(sets.active[0].id, "aa11");
        assert_eq!(sets.paused[0].id, "bb22");
    }

    #[test]
    fn paused_with_completion_timestamp_loses_candidacy() {
        let mut raw = fixtures::paused("bb22", "movie", 500, 0.2);
        raw.completion_on = 1_700_000_000;
        let sets = partition(vec![TorrentView::from_raw(&raw)]);
        assert!(sets.active.is_empty());
        assert!(sets.paused.is_empty());
    }

    #[test]
    fn unknown_states_count_as_active() {
        let mut raw = fixtures::downloading("cc33", "show", 500, 0.2);
        raw.state = "missingFiles".to_string();
        let sets = partition(vec![TorrentView::from_raw(&raw)]);
        assert_eq!(sets.active.len(), 1);
    }
}
