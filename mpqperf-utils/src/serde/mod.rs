//! Utility module for serde of types.

pub mod generic_hashmap;

use serde::{Deserialize, Serialize};

/// Struct used to (de-)serialize the data collected for a single trial ran on the testbed.
#[derive(Debug, Deserialize, Serialize)]
pub struct TrialRecord {
    /// Human-readable formatted timestamp when the trial was started
    pub execution_timestamp: String,
    /// Overall duration of this trial in seconds, including provisioning and teardown
    pub execution_duration: f64,
    /// Implementation under test
    pub implementation: String,
    /// Name of the measurement that was run
    pub measurement: String,
    /// Number of network paths the endpoints negotiated
    pub paths: usize,
    /// Zero-based repetition index within the aggregation
    pub repetition: usize,
    /// Trial verdict (`succeeded`, `failed` or `unsupported`)
    pub status: String,
    /// Measured value, if the trial produced one
    #[serde(default)]
    pub value: Option<f64>,
    /// Unit of `value`
    pub unit: String,
    /// Directory where the persisted logs of this trial ended up, if any
    #[serde(default)]
    pub log_dir: String,
}
