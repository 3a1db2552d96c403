//! Branch direction and target predictor models.
//!
//! This crate implements the branch predictors a pipelined CPU simulator consults
//! at fetch time, with the following:
//! 1. **Predictors:** gshare (global history) and tournament (gshare vs. local history
//!    arbitrated by a per-site meta table), both backed by a tagged BTB.
//! 2. **Configuration:** Validated table geometry loaded from JSON or defaults.
//! 3. **Evaluation:** Branch trace loading, predict/update replay, and statistics.
//!
//! The fetch stage calls [`BranchPredictor::predict`] for the next fetch address and
//! the branch unit calls [`BranchPredictor::update`] once the branch resolves.

/// Branch prediction unit: predictors, BTB, counter and history tables.
pub mod bru;
/// Common types and constants (table geometry, errors).
pub mod common;
/// Predictor configuration (defaults, enums, validation).
pub mod config;
/// Trace loading and replay.
pub mod sim;
/// Prediction statistics collection and reporting.
pub mod stats;

/// Predictor contract implemented by every algorithm.
pub use crate::bru::BranchPredictor;
/// Statically dispatched predictor built from a [`config::PredictorConfig`].
pub use crate::bru::BranchPredictorWrapper;
/// Root configuration type; use `Config::default()` or [`Config::from_json`].
pub use crate::config::Config;
