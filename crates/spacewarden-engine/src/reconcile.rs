//! The greedy pause/resume planner.
//!
//! # Design
//! - One pass is a pure function of (candidates, budget, policy): it returns
//!   an ordered action list plus final projected totals and never touches
//!   the client.
//! - Projected usage is tracked in running totals that transfer bytes
//!   between the active and paused sides; their sum is conserved across the
//!   whole pass.

use tracing::{debug, info};

use crate::model::{Action, CandidateSets, ReconcilePlan, TorrentView};

/// Policy toggles influencing the planner.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReconcilePolicy {
    /// Whether paused candidates may be resumed when the budget allows it.
    pub auto_resume: bool,
    /// Whether force-started torrents are exempt from pausing.
    pub skip_force_resume: bool,
}

/// Compute the action list for one reconciliation pass.
///
/// The decision policy is evaluated in strict order, first match wins:
///
/// 1. when auto-resume is on and the whole backlog fits the budget, resume
///    every paused candidate;
/// 2. when auto-resume is on and the active set fits, resume paused
///    candidates smallest-remaining-first while they still fit, scanning
///    the full list;
/// 3. otherwise pause active candidates largest-remaining-first until the
///    projected active total drops under the budget, skipping force-started
///    torrents when the policy exempts them.
///
/// A negative budget is valid input and simply pauses maximally. Exhausting
/// the pause candidates without satisfying the budget is reported as a
/// shortfall, not an error.
#[must_use]
pub fn plan(candidates: CandidateSets, budget: i64, policy: ReconcilePolicy) -> ReconcilePlan {
    let CandidateSets { active, mut paused } = candidates;
    let mut total_active: u64 = active.iter().map(TorrentView::amount_left).sum();
    let mut total_paused: u64 = paused.iter().map(TorrentView::amount_left).sum();
    let mut actions = Vec::new();

    if policy.auto_resume {
        let backlog = total_active.saturating_add(total_paused);
        if fits(backlog, budget) {
            // The whole backlog fits, so resume order is immaterial.
            for view in paused.drain(..) {
                let amount = view.amount_left();
                total_active = total_active.saturating_add(amount);
                total_paused = total_paused.saturating_sub(amount);
                actions.push(Action::Resume(view));
            }
            return ReconcilePlan {
                actions,
                total_active,
                total_paused,
                shortfall: None,
            };
        }

        if fits(total_active, budget) {
            // Smallest remaining first maximises how many torrents can
            // finish within the slack. Keep scanning past rejections.
            paused.sort_by_key(TorrentView::amount_left);
            for view in paused {
                let amount = view.amount_left();
                if fits(total_active.saturating_add(amount), budget) {
                    total_active = total_active.saturating_add(amount);
                    total_paused = total_paused.saturating_sub(amount);
                    actions.push(Action::Resume(view));
                } else {
                    debug!(
                        hash = %view.id,
                        name = %view.name,
                        amount_left = amount,
                        "paused torrent does not fit the remaining budget"
                    );
                }
            }
            return ReconcilePlan {
                actions,
                total_active,
                total_paused,
                shortfall: None,
            };
        }
    }

    // Largest remaining first frees the most space per pause, disrupting as
    // few torrents as possible.
    let mut active = active;
    active.sort_by(|a, b| b.amount_left().cmp(&a.amount_left()));
    let mut satisfied = fits(total_active, budget);
    for view in active {
        if satisfied {
            break;
        }
        if view.force_start && policy.skip_force_resume {
            info!(
                hash = %view.id,
                name = %view.name,
                "skipping force-started torrent"
            );
            continue;
        }
        let amount = view.amount_left();
        total_active = total_active.saturating_sub(amount);
        total_paused = total_paused.saturating_add(amount);
        actions.push(Action::Pause(view));
        satisfied = fits(total_active, budget);
    }

    let shortfall = if satisfied {
        None
    } else {
        Some(excess(total_active, budget))
    };
    ReconcilePlan {
        actions,
        total_active,
        total_paused,
        shortfall,
    }
}

fn fits(total: u64, budget: i64) -> bool {
    i128::from(total) < i128::from(budget)
}

fn excess(total: u64, budget: i64) -> u64 {
    u64::try_from(i128::from(total) - i128::from(budget)).unwrap_or(u64::MAX)
}
