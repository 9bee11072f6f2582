mod common;

use axum::{extract::State, http::StatusCode};
use drink_order_api::routes::health::health_check;
use serde_json::json;

#[tokio::test]
async fn health_check_returns_ok() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let response = health_check(State(state)).await?;
    assert_eq!(response.0.status, "ok");
    Ok(())
}

#[tokio::test]
async fn health_route_is_mounted() -> anyhow::Result<()> {
    let app = common::setup_app().await?;
    let (status, body) = common::get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
    Ok(())
}

#[tokio::test]
async fn unknown_route_is_json_not_found() -> anyhow::Result<()> {
    let app = common::setup_app().await?;
    let (status, body) = common::get(&app, "/coffee-machines").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Not Found" }));
    Ok(())
}
