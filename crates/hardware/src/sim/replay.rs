//! Trace Replay.
//!
//! Drives a predictor through a recorded branch trace the way a fetch stage
//! and branch unit would: predict the next PC, compare it against the resolved
//! fetch address, then train with the real outcome.

use tracing::{debug, info};

use super::trace::BranchRecord;
use crate::bru::BranchPredictor;
use crate::stats::PredictorStats;

/// Replays `records` through `bp` and returns the collected statistics.
///
/// Each record is predicted before it is used for training, so the result
/// reflects what an in-order pipeline with one branch in flight would see.
pub fn replay<P, I>(bp: &mut P, records: I) -> PredictorStats
where
    P: BranchPredictor + ?Sized,
    I: IntoIterator<Item = BranchRecord>,
{
    let mut stats = PredictorStats::default();

    for record in records {
        let predicted_taken = bp.predict_direction(record.pc);
        let predicted_pc = bp.predict(record.pc);
        let resolved_pc = record.resolved_pc();

        stats.record(predicted_taken, predicted_pc, record.taken, resolved_pc);
        if predicted_pc != resolved_pc {
            debug!(
                "{}: mispredict pc={:#x}, predicted={predicted_pc:#x}, resolved={resolved_pc:#x}",
                bp.name(),
                record.pc
            );
        }

        bp.update(record.pc, record.next_pc, record.taken);
    }

    info!(
        "{}: replayed {} branches, accuracy {:.2}%",
        bp.name(),
        stats.lookups,
        stats.accuracy() * 100.0
    );
    stats
}
