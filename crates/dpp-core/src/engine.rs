//! Aggregation engine: count / sum / mean with independent Laplace noise.

use crate::noise::{laplace_noise, laplace_scale};
use crate::types::{AggregateResult, RangeError};

/// L1 sensitivity of the count statistic: adding or removing one record
/// changes the count by at most 1.
const COUNT_SENSITIVITY: f64 = 1.0;

/// Compute differentially-private count, sum, and mean for `data`.
///
/// `lower_bound` / `upper_bound` declare the per-record value range; the
/// range width is the L1 sensitivity of the sum. Each statistic is noised
/// independently:
///
/// - count: sensitivity 1, noise Laplace(0, 1/ε)
/// - sum:   sensitivity (upper − lower), noise Laplace(0, range/ε)
/// - mean:  noise Laplace(0, range/(ε·n)) for n > 0
///
/// Noised outputs are not clamped to the declared range; values outside
/// `[lower_bound, upper_bound]` are expected behavior.
///
/// Degenerate inputs produce defined results, not errors:
///
/// - empty `data`: mean is exactly `0.0` with no noise drawn for it; count
///   and sum are still noised
/// - `epsilon == 0.0`: count is exact (no noise), while sum and mean go
///   through an infinite noise scale and come back non-finite
///
/// # Errors
///
/// [`RangeError`] when `lower_bound >= upper_bound`. This is the only
/// validation failure, raised before any noise is drawn.
pub fn compute(
    data: &[f64],
    epsilon: f64,
    lower_bound: f64,
    upper_bound: f64,
) -> Result<AggregateResult, RangeError> {
    if lower_bound >= upper_bound {
        return Err(RangeError {
            lower_bound,
            upper_bound,
        });
    }

    let range = upper_bound - lower_bound;
    let sum_scale = laplace_scale(range, epsilon);

    let actual_count = data.len() as u64;
    let actual_sum: f64 = data.iter().sum();

    let dp_count = if epsilon == 0.0 {
        // Infinite scale would drown the count entirely; the degenerate
        // contract is an exact count instead.
        actual_count as f64
    } else {
        actual_count as f64 + laplace_noise(laplace_scale(COUNT_SENSITIVITY, epsilon))
    };

    let dp_sum = actual_sum + laplace_noise(sum_scale);

    let (actual_mean, dp_mean) = if data.is_empty() {
        // Defined, not erroneous: an empty dataset has mean 0 and no noise
        // is drawn for it.
        (0.0, 0.0)
    } else {
        let n = data.len() as f64;
        let actual_mean = actual_sum / n;
        (actual_mean, actual_mean + laplace_noise(sum_scale / n))
    };

    Ok(AggregateResult {
        dp_count,
        dp_sum,
        dp_mean,
        actual_count,
        actual_sum,
        actual_mean,
    })
}
