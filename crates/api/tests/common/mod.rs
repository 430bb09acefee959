//! Shared helpers for HTTP integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use bonuses_api::config::ServerConfig;
use bonuses_api::router::build_app_router;
use bonuses_api::state::AppState;
use bonuses_core::clock::{Clock, FixedClock};
use bonuses_core::types::CalendarDate;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

/// The date every test app considers "today" unless overridden.
pub fn test_today() -> CalendarDate {
    CalendarDate::from_ymd_opt(2024, 6, 1).unwrap()
}

/// Build the full application router against a test database.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, ServerConfig::default(), FixedClock(test_today()))
}

/// Build the application with a custom configuration and clock.
pub fn build_test_app_with(pool: PgPool, config: ServerConfig, clock: impl Clock + 'static) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        clock: Arc::new(clock),
    };
    build_app_router(state, &config).unwrap()
}

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    json_request(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    json_request(app, Method::PUT, uri, body).await
}

/// POST without a body or content type.
pub async fn post_empty(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn json_request(app: Router, method: Method, uri: &str, body: Value) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();
    send(app, request).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Create a record through the API and return its `data.id`.
pub async fn create_id(app: &Router, uri: &str, body: Value) -> i64 {
    let response = post_json(app.clone(), uri, body).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED, "POST {uri}");
    body_json(response).await["data"]["id"].as_i64().unwrap()
}
