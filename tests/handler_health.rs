mod common;

use axum_test::TestServer;
use sqlx::postgres::PgPoolOptions;

/// The health endpoint never touches the store, so a lazy pool pointing
/// nowhere is enough.
fn make_server() -> TestServer {
    let pool = PgPoolOptions::new()
        .connect_lazy("postgres://nobody@127.0.0.1:1/none")
        .unwrap();

    common::create_test_server(pool)
}

#[tokio::test]
async fn test_health_endpoint_success() {
    let server = make_server();

    let response = server.get("/healthz").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["ok"], true);
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let server = make_server();

    let json = server.get("/healthz").await.json::<serde_json::Value>();

    assert!(json["uptime"].as_f64().unwrap() >= 0.0);

    let timestamp = json["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
}

#[tokio::test]
async fn test_health_endpoint_trailing_slash() {
    let server = make_server();

    let response = server.get("/healthz/").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["ok"], true);
}
