//! dpp-core
//!
//! Differentially-private aggregate statistics (count / sum / mean) via the
//! Laplace mechanism.
//!
//! Guarantees:
//! - Bounded-range sensitivity accounting: range for sum, 1 for count,
//!   range/n for mean
//! - Each statistic is noised independently with fresh randomness per call
//! - Noised outputs are never clamped to the declared range
//! - The only validation failure is an invalid bound range
//!
//! Pure logic. No IO, no shared state, no async.

mod engine;
mod noise;
mod types;

pub use engine::compute;
pub use noise::{laplace_noise, laplace_scale};
pub use types::*;
