//! Offline evaluation utilities.
//!
//! Provides branch trace loading and a replay driver that feeds a trace
//! through any [`BranchPredictor`](crate::bru::BranchPredictor).

/// Predict/update replay over a branch trace.
pub mod replay;

/// Branch trace parsing and loading.
pub mod trace;

pub use replay::replay;
pub use trace::BranchRecord;
