//! Decision-time data carriers for a reconciliation pass.
//!
//! # Design
//! - A [`TorrentView`] is created fresh each run from the client listing and
//!   never outlives the pass; the client owns the true mutable state.
//! - `amount_left` is computed once at construction and treated as fixed for
//!   the rest of the pass.

use spacewarden_torrent_core::RawTorrent;

/// Run state derived from the client's raw status label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Downloading, stalled, queued, or otherwise occupying budget.
    Active,
    /// Paused by the client or an operator.
    Paused,
    /// Hash-checking; excluded from reconciliation entirely.
    Checking,
    /// Unrecognised label; treated as active for accounting purposes.
    Other,
}

impl RunState {
    /// Derive the run state from a raw client state label.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "pausedDL" | "stoppedDL" => Self::Paused,
            "checkingDL" | "checkingUP" | "checkingResumeData" => Self::Checking,
            "downloading" | "stalledDL" | "metaDL" | "forcedDL" | "queuedDL" | "allocating" => {
                Self::Active
            }
            _ => Self::Other,
        }
    }
}

/// Immutable snapshot of one torrent at decision time.
#[derive(Debug, Clone, PartialEq)]
pub struct TorrentView {
    /// Torrent info-hash; unique within a run.
    pub id: String,
    /// Display name; descriptive only.
    pub name: String,
    /// Category label; descriptive only.
    pub category: String,
    /// Total selected size in bytes.
    pub total_size: u64,
    /// Completion fraction clamped to `[0, 1]`.
    pub progress: f64,
    /// Run state derived from the raw status label.
    pub run_state: RunState,
    /// Whether the torrent is force-started in the client.
    pub force_start: bool,
    /// Unix completion timestamp; `<= 0` means never completed.
    pub completion_on: i64,
    amount_left: u64,
}

impl TorrentView {
    /// Build a view from a raw listing entry, clamping progress and caching
    /// the derived amount left.
    #[must_use]
    pub fn from_raw(raw: &RawTorrent) -> Self {
        let progress = raw.progress.clamp(0.0, 1.0);
        Self {
            id: raw.hash.clone(),
            name: raw.name.clone(),
            category: raw.category.clone(),
            total_size: raw.size,
            progress,
            run_state: RunState::from_label(&raw.state),
            force_start: raw.force_start,
            completion_on: raw.completion_on,
            amount_left: derive_amount_left(raw.size, progress),
        }
    }

    /// Bytes still required to reach completion, fixed at snapshot time.
    #[must_use]
    pub const fn amount_left(&self) -> u64 {
        self.amount_left
    }
}

#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn derive_amount_left(total_size: u64, progress: f64) -> u64 {
    ((total_size as f64) * (1.0 - progress)).round() as u64
}

/// One client-facing decision emitted by the planner.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Pause the torrent to free projected space.
    Pause(TorrentView),
    /// Resume the torrent; the executor pairs this with a re-announce.
    Resume(TorrentView),
}

impl Action {
    /// The view targeted by this action.
    #[must_use]
    pub const fn view(&self) -> &TorrentView {
        match self {
            Self::Pause(view) | Self::Resume(view) => view,
        }
    }
}

/// Candidate torrents partitioned by run state for one pass.
#[derive(Debug, Clone, Default)]
pub struct CandidateSets {
    /// Incomplete torrents currently occupying projected budget.
    pub active: Vec<TorrentView>,
    /// Paused incomplete torrents eligible for resumption.
    pub paused: Vec<TorrentView>,
}

/// Ordered action list plus final projected totals for one pass.
#[derive(Debug, Clone)]
pub struct ReconcilePlan {
    /// Actions to apply, in order.
    pub actions: Vec<Action>,
    /// Projected bytes still needed by active torrents after the plan.
    pub total_active: u64,
    /// Projected bytes still needed by paused torrents after the plan.
    pub total_paused: u64,
    /// Bytes by which the active set still exceeds the budget when the
    /// pause branch exhausted its candidates; `None` when the budget is
    /// satisfied.
    pub shortfall: Option<u64>,
}

/// Outcome counters for one executed action list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecutionReport {
    /// Torrents successfully paused.
    pub paused: usize,
    /// Torrents successfully resumed.
    pub resumed: usize,
    /// Actions that failed and were skipped.
    pub failed: usize,
}
