//! Shared runtime state for dpp-daemon.
//!
//! Handlers receive `State<Arc<AppState>>` from Axum; this module owns
//! nothing async itself. The aggregator stays pure — the only mutable state
//! here is daemon-level telemetry, held in atomics.

use std::sync::atomic::AtomicU64;

use chrono::{DateTime, Utc};

// ---------------------------------------------------------------------------
// BuildInfo
// ---------------------------------------------------------------------------

/// Static build metadata included in banner / health responses.
#[derive(Clone, Debug)]
pub struct BuildInfo {
    pub service: &'static str,
    pub version: &'static str,
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

/// Shared (Arc) handle across all Axum handlers.
pub struct AppState {
    /// Static build metadata.
    pub build: BuildInfo,
    /// Process start time, surfaced by GET /status.
    pub started_at_utc: DateTime<Utc>,
    /// Queries answered 200 since boot.
    pub queries_served: AtomicU64,
    /// Queries refused by range validation since boot.
    pub queries_rejected: AtomicU64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            build: BuildInfo {
                service: "dpp-daemon",
                version: env!("CARGO_PKG_VERSION"),
            },
            started_at_utc: Utc::now(),
            queries_served: AtomicU64::new(0),
            queries_rejected: AtomicU64::new(0),
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Monotonically increasing uptime since first call (process lifetime).
pub fn uptime_secs() -> u64 {
    static START: std::sync::OnceLock<std::time::Instant> = std::sync::OnceLock::new();
    START
        .get_or_init(std::time::Instant::now)
        .elapsed()
        .as_secs()
}
