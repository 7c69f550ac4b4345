//! Laplace noise sampling.
//!
//! Inverse-CDF method: for U ~ Uniform(-0.5, 0.5),
//!
//! ```text
//! X = -b * sign(U) * ln(1 - 2|U|)
//! ```
//!
//! is distributed Laplace(0, b). Randomness comes from a thread-local RNG
//! handle obtained fresh inside each call — no module-level generator state,
//! no seed reuse, no cached draws.

use rand::distributions::{Distribution, Uniform};

/// Laplace scale parameter for a query with the given L1 sensitivity.
///
/// `scale = sensitivity / epsilon`. With `epsilon == 0.0` IEEE division
/// yields `+inf`; the degenerate scale is passed through unmodified so the
/// caller sees non-finite noise instead of a silently substituted value.
pub fn laplace_scale(sensitivity: f64, epsilon: f64) -> f64 {
    sensitivity / epsilon
}

/// Draw one sample from Laplace(0, `scale`).
///
/// An infinite `scale` produces a non-finite sample: `±inf` carrying the
/// sign of the uniform draw (NaN at the measure-zero draw u = 0). The sign
/// of a finite `scale` is irrelevant — the inverse CDF is symmetric in it.
pub fn laplace_noise(scale: f64) -> f64 {
    let mut rng = rand::thread_rng();
    let u: f64 = Uniform::new(-0.5, 0.5).sample(&mut rng);
    -scale * u.signum() * (1.0 - 2.0 * u.abs()).ln()
}
