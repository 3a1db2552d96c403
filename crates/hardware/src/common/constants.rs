//! Predictor-wide Constants.
//!
//! This module defines the fixed geometry shared by the predictor tables. It includes:
//! 1. **Instruction Constants:** Fetch width and word alignment of branch addresses.
//! 2. **Counter Constants:** Saturation limits and taken thresholds for the counter tables.
//! 3. **Local History Constants:** Width of the per-site history registers.

/// Size of a fetched instruction in bytes; the sequential fallback is `pc + 4`.
pub const INSTRUCTION_SIZE: u32 = 4;

/// Shift that turns a byte address into a word address (branches are word-aligned).
pub const WORD_SHIFT: u32 = 2;

/// Maximum value of a 2-bit pattern history counter.
pub const PHT_COUNTER_MAX: u8 = 3;

/// A pattern history counter at or above this value predicts taken.
pub const PHT_TAKEN_THRESHOLD: u8 = 2;

/// Maximum value of a 3-bit meta-predictor counter.
pub const META_COUNTER_MAX: u8 = 7;

/// A meta-predictor counter at or above this value selects the global predictor.
pub const META_GLOBAL_THRESHOLD: u8 = 4;

/// Reset value of every meta-predictor counter (weakly global).
pub const META_COUNTER_INIT: u8 = 4;

/// Width in bits of each local history register.
pub const LOCAL_HISTORY_BITS: u32 = 8;

/// Number of entries in the local pattern history table (`2^LOCAL_HISTORY_BITS`).
pub const LOCAL_PHT_SIZE: usize = 1 << LOCAL_HISTORY_BITS;

/// Largest supported global history width.
pub const MAX_HISTORY_BITS: u32 = 32;
