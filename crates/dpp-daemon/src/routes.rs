//! Axum router and all HTTP handlers for dpp-daemon.
//!
//! `build_router` is the single entry point; `main.rs` calls it and attaches
//! middleware layers.  All handlers are `pub(crate)` so the scenario tests in
//! `tests/` can compose the router directly.

use std::sync::{atomic::Ordering, Arc};

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tracing::info;
use uuid::Uuid;

use crate::{
    api_types::{
        BannerResponse, CalculateRequest, CalculateResponse, HealthResponse,
        InvalidRangeResponse, ReadyResponse, StatusResponse,
    },
    state::{uptime_secs, AppState},
};

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Build the complete application router wired to the given shared state.
///
/// Middleware layers (CORS, tracing) are **not** applied here; `main.rs`
/// attaches them after this call so tests can use the bare router.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(banner))
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/status", get(status_handler))
        .route("/calculate", post(calculate))
        .with_state(state)
}

// ---------------------------------------------------------------------------
// GET /
// ---------------------------------------------------------------------------

pub(crate) async fn banner(State(st): State<Arc<AppState>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(BannerResponse {
            service: st.build.service,
            version: st.build.version,
        }),
    )
}

// ---------------------------------------------------------------------------
// GET /health
// ---------------------------------------------------------------------------

pub(crate) async fn health(State(st): State<Arc<AppState>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            ok: true,
            service: st.build.service,
            version: st.build.version,
        }),
    )
}

// ---------------------------------------------------------------------------
// GET /ready
// ---------------------------------------------------------------------------

pub(crate) async fn ready() -> impl IntoResponse {
    // No warm-up dependencies: the aggregator is pure and allocation-free
    // beyond its inputs, so readiness follows liveness.
    (StatusCode::OK, Json(ReadyResponse { ready: true }))
}

// ---------------------------------------------------------------------------
// GET /status
// ---------------------------------------------------------------------------

pub(crate) async fn status_handler(State(st): State<Arc<AppState>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(StatusResponse {
            daemon_uptime_secs: uptime_secs(),
            started_at_utc: st.started_at_utc,
            queries_served: st.queries_served.load(Ordering::Relaxed),
            queries_rejected: st.queries_rejected.load(Ordering::Relaxed),
        }),
    )
}

// ---------------------------------------------------------------------------
// POST /calculate
// ---------------------------------------------------------------------------

/// Run one differentially-private aggregate query.
///
/// Returns `400 Bad Request` with a descriptive `detail` field when the
/// declared bounds are not a valid range. Every other input — empty data,
/// epsilon 0 — answers `200` with a defined (possibly degenerate) result.
/// Non-finite noised values serialize as JSON `null`.
pub(crate) async fn calculate(
    State(st): State<Arc<AppState>>,
    Json(req): Json<CalculateRequest>,
) -> Response {
    let query_id = Uuid::new_v4();

    match dpp_core::compute(&req.data, req.epsilon, req.lower_bound, req.upper_bound) {
        Ok(res) => {
            st.queries_served.fetch_add(1, Ordering::Relaxed);
            info!(
                %query_id,
                records = res.actual_count,
                epsilon = req.epsilon,
                "calculate"
            );
            (
                StatusCode::OK,
                Json(CalculateResponse {
                    count: res.dp_count,
                    sum: res.dp_sum,
                    mean: res.dp_mean,
                    actual_count: res.actual_count,
                    actual_sum: res.actual_sum,
                    actual_mean: res.actual_mean,
                }),
            )
                .into_response()
        }
        Err(err) => {
            st.queries_rejected.fetch_add(1, Ordering::Relaxed);
            info!(%query_id, %err, "calculate refused");
            (
                StatusCode::BAD_REQUEST,
                Json(InvalidRangeResponse {
                    detail: err.to_string(),
                }),
            )
                .into_response()
        }
    }
}
