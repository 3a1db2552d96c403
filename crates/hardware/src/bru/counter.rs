//! Saturating Counter Tables.
//!
//! Every direction table in the predictors (global PHT, local PHT, meta table)
//! is an array of small unsigned counters that move by one step per update and
//! clamp at `0` and a per-table maximum. A counter at or above the table's
//! threshold reads as "set" (predict taken, or select the global component).

use crate::common::constants::{
    META_COUNTER_INIT, META_COUNTER_MAX, META_GLOBAL_THRESHOLD, PHT_COUNTER_MAX,
    PHT_TAKEN_THRESHOLD,
};

/// A fixed-size table of saturating counters.
#[derive(Debug, Clone)]
pub struct CounterTable {
    /// Counter values, each in `0..=max`.
    counters: Vec<u8>,
    /// Saturation limit.
    max: u8,
    /// Values at or above this read as set.
    threshold: u8,
}

impl CounterTable {
    /// Creates a table of `size` counters, all starting at `init`.
    ///
    /// `init` is clamped to `max`.
    pub fn new(size: usize, init: u8, max: u8, threshold: u8) -> Self {
        Self {
            counters: vec![init.min(max); size],
            max,
            threshold,
        }
    }

    /// Creates a pattern history table of 2-bit counters reset to strongly not-taken.
    pub fn pattern(size: usize) -> Self {
        Self::new(size, 0, PHT_COUNTER_MAX, PHT_TAKEN_THRESHOLD)
    }

    /// Creates a meta-predictor table of 3-bit counters reset to weakly global.
    pub fn meta(size: usize) -> Self {
        Self::new(size, META_COUNTER_INIT, META_COUNTER_MAX, META_GLOBAL_THRESHOLD)
    }

    /// Number of counters in the table.
    pub fn len(&self) -> usize {
        self.counters.len()
    }

    /// Returns `true` if the table has no counters.
    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }

    /// Saturation limit of every counter.
    pub const fn max(&self) -> u8 {
        self.max
    }

    /// Raw counter value at `idx`.
    #[inline]
    pub fn get(&self, idx: usize) -> u8 {
        self.counters[idx]
    }

    /// Returns `true` if the counter at `idx` has reached the threshold.
    #[inline]
    pub fn is_set(&self, idx: usize) -> bool {
        self.counters[idx] >= self.threshold
    }

    /// Moves the counter at `idx` one step up, saturating at the maximum.
    #[inline]
    pub fn increment(&mut self, idx: usize) {
        let c = &mut self.counters[idx];
        if *c < self.max {
            *c += 1;
        }
    }

    /// Moves the counter at `idx` one step down, saturating at zero.
    #[inline]
    pub fn decrement(&mut self, idx: usize) {
        let c = &mut self.counters[idx];
        if *c > 0 {
            *c -= 1;
        }
    }

    /// Trains the counter at `idx` toward the resolved direction.
    #[inline]
    pub fn train(&mut self, idx: usize, taken: bool) {
        if taken {
            self.increment(idx);
        } else {
            self.decrement(idx);
        }
    }

    /// Iterates over every counter value in index order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.counters.iter().copied()
    }
}
