//! Prediction statistics collection and reporting.
//!
//! This module tracks how well a predictor did over a run. It provides:
//! 1. **Lookups:** Total predictions and the taken/not-taken mix of resolved branches.
//! 2. **Accuracy:** Correct next-PC predictions and mispredictions.
//! 3. **Breakdown:** Mispredictions split into wrong direction and wrong target.

use std::fmt;

use serde::Serialize;

/// Prediction statistics for one predictor over one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PredictorStats {
    /// Number of predictions made.
    pub lookups: u64,
    /// Predictions whose next PC matched the resolved fetch address.
    pub correct: u64,
    /// Predictions whose next PC did not match.
    pub mispredictions: u64,
    /// Mispredictions where the predicted direction was wrong.
    pub direction_mispredictions: u64,
    /// Mispredictions where the direction was right but the target was not
    /// (BTB miss, tag mismatch, or stale target).
    pub target_mispredictions: u64,
    /// Resolved branches that were taken.
    pub taken: u64,
    /// Resolved branches that were not taken.
    pub not_taken: u64,
}

impl PredictorStats {
    /// Records one prediction against its resolution.
    ///
    /// # Arguments
    ///
    /// * `predicted_taken` - Direction the predictor chose
    /// * `predicted_pc` - Next fetch address the predictor returned
    /// * `taken` - Resolved direction
    /// * `resolved_pc` - Address fetch should actually have continued from
    pub fn record(
        &mut self,
        predicted_taken: bool,
        predicted_pc: u32,
        taken: bool,
        resolved_pc: u32,
    ) {
        self.lookups += 1;
        if taken {
            self.taken += 1;
        } else {
            self.not_taken += 1;
        }

        if predicted_pc == resolved_pc {
            self.correct += 1;
        } else {
            self.mispredictions += 1;
            if predicted_taken == taken {
                self.target_mispredictions += 1;
            } else {
                self.direction_mispredictions += 1;
            }
        }
    }

    /// Fraction of lookups that produced the correct next PC, `0.0` when empty.
    pub fn accuracy(&self) -> f64 {
        if self.lookups == 0 {
            0.0
        } else {
            self.correct as f64 / self.lookups as f64
        }
    }

    /// Fraction of lookups whose predicted direction was right, `0.0` when empty.
    pub fn direction_accuracy(&self) -> f64 {
        if self.lookups == 0 {
            0.0
        } else {
            (self.lookups - self.direction_mispredictions) as f64 / self.lookups as f64
        }
    }

    /// Prints the report to stdout under a header naming the predictor.
    pub fn print(&self, name: &str) {
        println!("\n==========================================================");
        println!("BRANCH PREDICTION STATISTICS ({name})");
        println!("==========================================================");
        print!("{self}");
        println!("----------------------------------------------------------");
    }
}

impl fmt::Display for PredictorStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = if self.lookups == 0 { 1 } else { self.lookups };
        let pct = |n: u64| (n as f64 / total as f64) * 100.0;

        writeln!(f, "bp.lookups               {}", self.lookups)?;
        writeln!(f, "bp.taken                 {} ({:.2}%)", self.taken, pct(self.taken))?;
        writeln!(
            f,
            "bp.not_taken             {} ({:.2}%)",
            self.not_taken,
            pct(self.not_taken)
        )?;
        writeln!(f, "bp.correct               {}", self.correct)?;
        writeln!(f, "bp.mispredicts           {}", self.mispredictions)?;
        writeln!(
            f,
            "  mispredict.direction   {}",
            self.direction_mispredictions
        )?;
        writeln!(f, "  mispredict.target      {}", self.target_mispredictions)?;
        writeln!(f, "bp.accuracy              {:.2}%", self.accuracy() * 100.0)?;
        writeln!(
            f,
            "bp.direction_accuracy    {:.2}%",
            self.direction_accuracy() * 100.0
        )
    }
}
