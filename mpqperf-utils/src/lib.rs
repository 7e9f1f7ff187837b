//! Utility library for the mpqperf measurement runner.

pub mod other;
pub mod serde;
