//! Tests whether the static routes return appropriate status codes and messages.

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::Value;

use crate::helpers::TestApp;

#[tokio::test]
async fn healthcheck_ok() -> Result<()> {
    let app = TestApp::spawn_without_db().await?;

    let res = app.get("/health-check").await?;

    assert!(res.status() == StatusCode::OK, "Healthcheck FAILED!");

    Ok(())
}

#[tokio::test]
async fn invalid_path_404() -> Result<()> {
    let app = TestApp::spawn_without_db().await?;

    let res = app.get("/invalidpath").await?;

    assert!(
        res.status() == StatusCode::NOT_FOUND,
        "Invalid Path check FAILED!, expected: {}, got: {}",
        404,
        res.status().as_u16()
    );

    Ok(())
}

#[tokio::test]
async fn root_returns_running_message() -> Result<()> {
    let app = TestApp::spawn_without_db().await?;

    let res = app.get("/").await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await?;
    assert_eq!(body["message"], "SportLive SaaS Backend Running");

    Ok(())
}

#[tokio::test]
async fn api_hello_returns_greeting() -> Result<()> {
    let app = TestApp::spawn_without_db().await?;

    let res = app.get("/api/hello").await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await?;
    assert_eq!(body["message"], "Hello from SportLive backend API!");

    Ok(())
}
