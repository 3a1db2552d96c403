//! Configuration and Trace Error definitions.
//!
//! This module defines the error types for the predictor library. It provides:
//! 1. **Configuration Errors:** Rejected table geometries and malformed config documents.
//! 2. **Trace Errors:** I/O and parse failures while loading a branch trace.
//!
//! Prediction and training themselves never fail: every table index is masked to the
//! table size, so the only fallible step is construction.

use std::io;

use thiserror::Error;

/// Errors raised while validating or loading a predictor configuration.
///
/// Returned at construction time so that an invalid geometry never produces
/// out-of-range table indices later on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The BTB size is zero or not a power of two.
    ///
    /// The BTB size doubles as the source of the index mask (`size - 1`),
    /// so only powers of two are accepted.
    #[error("BTB size must be a non-zero power of two, got {0}")]
    BtbSizeNotPowerOfTwo(u32),

    /// The global history width is zero or wider than 32 bits.
    #[error("global history width must be in 1..=32 bits, got {0}")]
    HistoryBitsOutOfRange(u32),

    /// The predictor name is not one of the supported algorithms.
    #[error("unknown branch predictor `{0}` (expected gshare or tournament)")]
    UnknownPredictor(String),

    /// A configuration document could not be deserialized.
    #[error("invalid configuration document: {0}")]
    Json(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Errors raised while reading a branch trace.
#[derive(Debug, Error)]
pub enum TraceError {
    /// The trace file could not be opened or read.
    #[error("failed to read trace: {0}")]
    Io(#[from] io::Error),

    /// A trace line did not match `<pc> <next_pc> <taken>`.
    #[error("trace line {line}: {reason}")]
    Parse {
        /// One-based line number of the offending record.
        line: usize,
        /// Human-readable description of what was wrong.
        reason: String,
    },
}
