//! In-process scenario tests for POST /calculate.
//!
//! # Invariants under test
//!
//! 1. Happy path: 200 with all six fields; actuals exact; noised values
//!    finite JSON numbers
//! 2. Inverted or equal bounds: 400 with a descriptive `detail` message,
//!    no result fields
//! 3. Empty dataset: 200 with zero actuals and an exactly-zero mean
//! 4. /status counters track served and rejected queries

use std::sync::Arc;

use axum::http::{Request, StatusCode};
use dpp_daemon::{api_types::CalculateRequest, routes, state};
use http_body_util::BodyExt;
use tower::ServiceExt; // oneshot

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn make_router() -> axum::Router {
    let st = Arc::new(state::AppState::new());
    routes::build_router(st)
}

async fn call(router: axum::Router, req: Request<axum::body::Body>) -> (StatusCode, bytes::Bytes) {
    let resp = router.oneshot(req).await.expect("oneshot failed");
    let status = resp.status();
    let body = resp
        .into_body()
        .collect()
        .await
        .expect("body collect failed")
        .to_bytes();
    (status, body)
}

fn parse_json(b: bytes::Bytes) -> serde_json::Value {
    serde_json::from_slice(&b).expect("body is not valid JSON")
}

fn post_calculate(req: &CalculateRequest) -> Request<axum::body::Body> {
    Request::builder()
        .method("POST")
        .uri("/calculate")
        .header("content-type", "application/json")
        .body(axum::body::Body::from(serde_json::to_vec(req).unwrap()))
        .unwrap()
}

fn query(data: &[f64], epsilon: f64, lower_bound: f64, upper_bound: f64) -> CalculateRequest {
    CalculateRequest {
        data: data.to_vec(),
        epsilon,
        lower_bound,
        upper_bound,
    }
}

// ---------------------------------------------------------------------------
// 1. Happy path
// ---------------------------------------------------------------------------

#[tokio::test]
async fn calculate_returns_noised_and_actual_statistics() {
    let req = post_calculate(&query(&[1.0, 2.0, 3.0, 4.0, 5.0], 1.0, 0.0, 10.0));
    let (status, body) = call(make_router(), req).await;
    assert_eq!(status, StatusCode::OK);

    let json = parse_json(body);
    assert_eq!(json["actual_count"], 5);
    assert_eq!(json["actual_sum"], 15.0);
    assert_eq!(json["actual_mean"], 3.0);

    // Noised values are finite JSON numbers at ε = 1.
    assert!(json["count"].is_f64(), "count must be a number: {json}");
    assert!(json["sum"].is_f64(), "sum must be a number: {json}");
    assert!(json["mean"].is_f64(), "mean must be a number: {json}");
}

#[tokio::test]
async fn calculate_noise_differs_across_requests() {
    let st = Arc::new(state::AppState::new());
    let q = query(&[1.0, 2.0, 3.0], 1.0, 0.0, 10.0);

    let (_, body1) = call(routes::build_router(Arc::clone(&st)), post_calculate(&q)).await;
    let (_, body2) = call(routes::build_router(Arc::clone(&st)), post_calculate(&q)).await;

    let sum1 = parse_json(body1)["sum"].as_f64().unwrap();
    let sum2 = parse_json(body2)["sum"].as_f64().unwrap();
    assert_ne!(sum1, sum2, "noise must be re-sampled per request");
}

// ---------------------------------------------------------------------------
// 2. Invalid range → 400
// ---------------------------------------------------------------------------

#[tokio::test]
async fn inverted_bounds_return_400_with_detail() {
    let req = post_calculate(&query(&[1.0, 2.0], 1.0, 10.0, 0.0));
    let (status, body) = call(make_router(), req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let json = parse_json(body);
    assert!(
        json["detail"]
            .as_str()
            .unwrap_or("")
            .contains("lower_bound must be less than upper_bound"),
        "detail should name the contract: {json}"
    );
    assert!(json.get("count").is_none(), "no result fields on refusal");
}

#[tokio::test]
async fn equal_bounds_return_400() {
    let req = post_calculate(&query(&[1.0], 1.0, 5.0, 5.0));
    let (status, _) = call(make_router(), req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// 3. Empty dataset
// ---------------------------------------------------------------------------

#[tokio::test]
async fn empty_dataset_returns_zero_actuals_and_exact_zero_mean() {
    let req = post_calculate(&query(&[], 1.0, 0.0, 10.0));
    let (status, body) = call(make_router(), req).await;
    assert_eq!(status, StatusCode::OK);

    let json = parse_json(body);
    assert_eq!(json["actual_count"], 0);
    assert_eq!(json["actual_sum"], 0.0);
    assert_eq!(json["actual_mean"], 0.0);
    assert_eq!(json["mean"], 0.0, "empty mean is exact, never noised");

    // Count and sum still carry (finite) noise.
    assert!(json["count"].is_f64());
    assert!(json["sum"].is_f64());
}

// ---------------------------------------------------------------------------
// 4. Status counters
// ---------------------------------------------------------------------------

#[tokio::test]
async fn status_counters_track_served_and_rejected() {
    let st = Arc::new(state::AppState::new());

    let ok = query(&[1.0, 2.0], 1.0, 0.0, 10.0);
    let bad = query(&[1.0, 2.0], 1.0, 10.0, 0.0);

    let _ = call(routes::build_router(Arc::clone(&st)), post_calculate(&ok)).await;
    let _ = call(routes::build_router(Arc::clone(&st)), post_calculate(&ok)).await;
    let _ = call(routes::build_router(Arc::clone(&st)), post_calculate(&bad)).await;

    let status_req = Request::builder()
        .method("GET")
        .uri("/status")
        .body(axum::body::Body::empty())
        .unwrap();
    let (status, body) = call(routes::build_router(Arc::clone(&st)), status_req).await;
    assert_eq!(status, StatusCode::OK);

    let json = parse_json(body);
    assert_eq!(json["queries_served"], 2);
    assert_eq!(json["queries_rejected"], 1);
}
