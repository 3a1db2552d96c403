//! Trace Replay Tests.
//!
//! Checks that replay predicts before training and classifies each
//! misprediction as a wrong direction or a wrong target.

use bpsim_core::bru::gshare::GSharePredictor;
use bpsim_core::bru::tournament::TournamentPredictor;
use bpsim_core::config::PredictorConfig;
use bpsim_core::sim::replay;
use bpsim_core::stats::PredictorStats;
use bpsim_core::{BranchPredictor, BranchPredictorWrapper};
use pretty_assertions::assert_eq;

use crate::common::builder::trace::TraceBuilder;
use crate::common::harness::init_tracing;

#[test]
fn empty_trace_yields_empty_stats() {
    let mut bp = GSharePredictor::new(4, 2).unwrap();
    let stats = replay(&mut bp, Vec::new());
    assert_eq!(stats, PredictorStats::default());
    assert_eq!(stats.accuracy(), 0.0);
}

/// With a 4-entry BTB and 2 history bits the GHR walks 0, 1, 3, 3, so the
/// first four lookups land on cold counters and only the fifth is taken.
#[test]
fn gshare_warms_up_on_a_biased_branch() {
    init_tracing();
    let mut bp = GSharePredictor::new(4, 2).unwrap();
    let trace = TraceBuilder::new().repeat_taken(0x100, 0x200, 5).build();

    let stats = replay(&mut bp, trace);
    assert_eq!(
        stats,
        PredictorStats {
            lookups: 5,
            correct: 1,
            mispredictions: 4,
            direction_mispredictions: 4,
            target_mispredictions: 0,
            taken: 5,
            not_taken: 0,
        }
    );
}

/// 0x110 shares BTB slot 0 with 0x100 under a different tag and reuses the
/// saturated PHT counter, so the direction is right but the target misses.
#[test]
fn btb_tag_mismatch_counts_as_target_misprediction() {
    let mut bp = GSharePredictor::new(4, 2).unwrap();
    let trace = TraceBuilder::new()
        .repeat_taken(0x100, 0x200, 4)
        .taken(0x110, 0x300)
        .build();

    let stats = replay(&mut bp, trace);
    assert_eq!(stats.lookups, 5);
    assert_eq!(stats.correct, 0);
    assert_eq!(stats.direction_mispredictions, 4);
    assert_eq!(stats.target_mispredictions, 1);
}

#[test]
fn not_taken_branches_are_correct_when_cold() {
    let mut bp = TournamentPredictor::new(16, 4).unwrap();
    let trace = TraceBuilder::new()
        .not_taken(0x100)
        .not_taken(0x104)
        .not_taken(0x108)
        .build();

    let stats = replay(&mut bp, trace);
    assert_eq!(stats.correct, 3);
    assert_eq!(stats.not_taken, 3);
    assert_eq!(stats.accuracy(), 1.0);
}

#[test]
fn replay_trains_the_predictor() {
    let mut bp = GSharePredictor::new(64, 6).unwrap();
    let _ = replay(&mut bp, TraceBuilder::new().repeat_taken(0x400, 0x800, 20).build());
    assert_eq!(bp.predict(0x400), 0x800);
}

#[test]
fn replay_through_wrapper_and_trait_object_agree() {
    let trace = TraceBuilder::new()
        .loop_branch(0x400, 0x3C0, 6, 8)
        .alternating(0x500, 0x600, 16)
        .build();

    let mut wrapped = BranchPredictorWrapper::new(&PredictorConfig::default()).unwrap();
    let mut boxed: Box<dyn BranchPredictor> = Box::new(GSharePredictor::new(256, 8).unwrap());

    let a = replay(&mut wrapped, trace.clone());
    let b = replay(boxed.as_mut(), trace);
    assert_eq!(a, b);
    assert_eq!(a.lookups, a.correct + a.mispredictions);
    assert_eq!(
        a.mispredictions,
        a.direction_mispredictions + a.target_mispredictions
    );
}
