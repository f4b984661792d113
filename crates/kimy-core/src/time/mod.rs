//! Timestamp presentation helpers.

pub mod format;
