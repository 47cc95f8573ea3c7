#![allow(dead_code)]

use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use serde_json::Value;
use sqlx::PgPool;
use std::sync::Arc;
use tinylink::routes::app_router;
use tinylink::state::AppState;

pub async fn create_test_link(pool: &PgPool, code: &str, url: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO links (code, target_url) VALUES ($1, $2) RETURNING id")
        .bind(code)
        .bind(url)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn get_clicks(pool: &PgPool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT total_clicks FROM links WHERE code = $1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_links(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM links")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool))
}

/// Full application, exactly as served: path normalization included.
pub fn create_test_server(pool: PgPool) -> TestServer {
    let app = app_router(create_test_state(pool));

    TestServer::new(ServiceExt::<Request>::into_make_service(app)).unwrap()
}

pub fn error_code(body: &Value) -> &str {
    body["error"]["code"].as_str().unwrap_or_default()
}
