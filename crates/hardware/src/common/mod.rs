//! Common types and constants shared by every predictor.
//!
//! This module provides the building blocks used across the crate. It includes:
//! 1. **Constants:** Counter limits, thresholds, and table geometry.
//! 2. **Error Handling:** Configuration and trace error types.

/// Common constants used throughout the predictors.
pub mod constants;

/// Error types for configuration and trace loading.
pub mod error;

pub use error::{ConfigError, TraceError};
