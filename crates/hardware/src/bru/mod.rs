//! Branch prediction unit (BRU) implementations.
//!
//! This module contains the gshare and tournament direction predictors, the
//! branch target buffer (BTB) they share, and the counter and history tables
//! they are built from.

pub use self::branch_predictor::BranchPredictor;

/// Branch predictor trait.
pub mod branch_predictor;

/// Branch Target Buffer for storing predicted branch targets.
pub mod btb;

/// Saturating counter tables.
pub mod counter;

/// Global and local history registers.
pub mod history;

/// Global history branch predictor (gshare algorithm).
pub mod gshare;

/// Tournament branch predictor (arbitrates between gshare and local history).
pub mod tournament;

use self::{gshare::GSharePredictor, tournament::TournamentPredictor};
use crate::common::ConfigError;
use crate::config::{BranchPredictor as BpType, PredictorConfig};

/// Enum wrapper for static dispatch of Branch Predictors.
/// This avoids vtable lookups in the critical fetch loop.
#[derive(Debug, Clone)]
pub enum BranchPredictorWrapper {
    /// Global history predictor.
    GShare(GSharePredictor),
    /// Tournament (gshare+) predictor.
    Tournament(TournamentPredictor),
}

impl BranchPredictorWrapper {
    /// Creates a new branch predictor wrapper based on configuration.
    ///
    /// Selects the configured algorithm and sizes its tables from the
    /// configured BTB size and global history width.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the table geometry is invalid.
    pub fn new(config: &PredictorConfig) -> Result<Self, ConfigError> {
        let btb_size = config.btb_size;
        let bhr_size = config.bhr_size;

        Ok(match config.kind {
            BpType::GShare => Self::GShare(GSharePredictor::new(btb_size, bhr_size)?),
            BpType::Tournament => Self::Tournament(TournamentPredictor::with_config(
                &config.tournament,
                btb_size,
                bhr_size,
            )?),
        })
    }
}

impl BranchPredictor for BranchPredictorWrapper {
    #[inline(always)]
    fn name(&self) -> &'static str {
        match self {
            Self::GShare(bp) => bp.name(),
            Self::Tournament(bp) => bp.name(),
        }
    }

    #[inline(always)]
    fn predict_direction(&self, pc: u32) -> bool {
        match self {
            Self::GShare(bp) => bp.predict_direction(pc),
            Self::Tournament(bp) => bp.predict_direction(pc),
        }
    }

    #[inline(always)]
    fn predict(&self, pc: u32) -> u32 {
        match self {
            Self::GShare(bp) => bp.predict(pc),
            Self::Tournament(bp) => bp.predict(pc),
        }
    }

    #[inline(always)]
    fn update(&mut self, pc: u32, next_pc: u32, taken: bool) {
        match self {
            Self::GShare(bp) => bp.update(pc, next_pc, taken),
            Self::Tournament(bp) => bp.update(pc, next_pc, taken),
        }
    }
}
