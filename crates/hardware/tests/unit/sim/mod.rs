//! Trace replay tests.


/// Predict/update replay tests.
pub mod replay;
