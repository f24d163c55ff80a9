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

//! Disk-space reconciliation for incomplete torrents.
//!
//! One pass works off a fixed snapshot: classify the client listing into
//! candidates (`snapshot.rs`), decide which torrents to pause or resume
//! under the free-space budget (`reconcile.rs`), then apply the decisions
//! through the client capability (`executor.rs`). Decision-time data
//! carriers live in `model.rs`.

pub mod executor;
pub mod model;
pub mod reconcile;
pub mod snapshot;

pub use executor::ActionExecutor;
pub use model::{Action, CandidateSets, ExecutionReport, ReconcilePlan, RunState, TorrentView};
pub use reconcile::{ReconcilePolicy, plan};
pub use snapshot::{Classification, classify, partition};
