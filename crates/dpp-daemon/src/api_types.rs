//! Request and response types for all dpp-daemon HTTP endpoints.
//!
//! These types are `Serialize + Deserialize` so they can be JSON-encoded
//! by Axum and decoded by tests.  No business logic lives here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// POST /calculate
// ---------------------------------------------------------------------------

/// Body of `POST /calculate`: one dataset plus the privacy parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateRequest {
    pub data: Vec<f64>,
    pub epsilon: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
}

/// Response of `POST /calculate`.
///
/// `count` / `sum` / `mean` are the noised statistics; the `actual_*`
/// fields are exact. Non-finite noised values (epsilon = 0) serialize as
/// JSON `null` — serde_json's representation of non-finite floats.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateResponse {
    pub count: f64,
    pub sum: f64,
    pub mean: f64,
    pub actual_count: u64,
    pub actual_sum: f64,
    pub actual_mean: f64,
}

/// Response body when a request is refused by bound-range validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvalidRangeResponse {
    pub detail: String,
}

// ---------------------------------------------------------------------------
// GET /  GET /health  GET /ready
// ---------------------------------------------------------------------------

/// Service banner returned by `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BannerResponse {
    pub service: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub service: &'static str,
    pub version: &'static str,
}

/// Readiness probe body. The aggregator is pure and needs no warm-up, so
/// readiness follows liveness.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadyResponse {
    pub ready: bool,
}

// ---------------------------------------------------------------------------
// GET /status
// ---------------------------------------------------------------------------

/// Point-in-time operational snapshot returned by `GET /status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub daemon_uptime_secs: u64,
    pub started_at_utc: DateTime<Utc>,
    /// Queries answered 200 since boot.
    pub queries_served: u64,
    /// Queries refused by range validation since boot.
    pub queries_rejected: u64,
}
