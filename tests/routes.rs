//! Route-level tests that stop before the database: liveness, version, and
//! boundary rejection of malformed filter input.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use screener_backend::{common_routes, stock_routes, AppState};
use tower::ServiceExt;

/// The pool is lazy and never dials; every request below either skips the
/// store entirely or is rejected at the boundary first.
fn test_app() -> Router {
    let pool = sqlx::postgres::PgPoolOptions::new()
        .connect_lazy("postgres://localhost/screener_test")
        .expect("lazy pool");
    let state = AppState { pool };
    Router::new()
        .merge(common_routes(state.clone()))
        .nest("/api/stocks", stock_routes(state))
}

async fn body_json(res: axum::response::Response) -> serde_json::Value {
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_is_ok() {
    let res = test_app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let json = body_json(res).await;
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn version_reports_crate() {
    let res = test_app()
        .oneshot(
            Request::builder()
                .uri("/version")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let json = body_json(res).await;
    assert_eq!(json["name"], "screener-backend");
}

#[tokio::test]
async fn screener_rejects_non_numeric_bound() {
    let res = test_app()
        .oneshot(
            Request::builder()
                .uri("/api/stocks/screener?maxPE=abc")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let json = body_json(res).await;
    assert_eq!(json["error"]["code"], "bad_request");
}

#[tokio::test]
async fn screener_rejects_non_boolean_flag() {
    let res = test_app()
        .oneshot(
            Request::builder()
                .uri("/api/stocks/screener?revenueGrowth=yes")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn screener_rejects_non_positive_bound() {
    let res = test_app()
        .oneshot(
            Request::builder()
                .uri("/api/stocks/screener?maxPE=-3")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(res).await;
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn ai_screener_rejects_wrong_body_types() {
    let res = test_app()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/stocks/ai-screener")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"maxPE": "fifteen"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(res.status().is_client_error());
}

#[tokio::test]
async fn ai_screener_rejects_out_of_range_bound() {
    let res = test_app()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/stocks/ai-screener")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"maxPEG": -1}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let res = test_app()
        .oneshot(
            Request::builder()
                .uri("/api/bonds")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
