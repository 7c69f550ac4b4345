use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// The declared per-record bounds do not form a valid range.
///
/// This is the single domain error of the aggregator. It is raised at
/// validation time, before any noise is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeError {
    pub lower_bound: f64,
    pub upper_bound: f64,
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lower_bound must be less than upper_bound (lower_bound={}, upper_bound={})",
            self.lower_bound, self.upper_bound
        )
    }
}

impl std::error::Error for RangeError {}

// ---------------------------------------------------------------------------
// AggregateResult
// ---------------------------------------------------------------------------

/// Output of one aggregate query: noised statistics alongside the exact ones.
///
/// Produced once per call and never stored. With `epsilon == 0` the noised
/// sum and mean are non-finite (infinite noise scale); callers must surface
/// those values rather than replace them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateResult {
    /// Noised record count. Exact when `epsilon == 0`.
    pub dp_count: f64,
    /// Noised sum.
    pub dp_sum: f64,
    /// Noised mean; exactly `0.0` for an empty dataset.
    pub dp_mean: f64,
    pub actual_count: u64,
    pub actual_sum: f64,
    /// `actual_sum / actual_count`, or `0.0` for an empty dataset.
    pub actual_mean: f64,
}
