//! Branch prediction unit tests.
