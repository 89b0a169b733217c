use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

use crate::helpers::TestApp;

#[tokio::test]
#[ignore = "requires a running Postgres"]
async fn api_subscribe_ok() -> Result<()> {
    let app = TestApp::spawn().await?;

    let json_request = json!({
        "email": "john.doe@example.com",
        "favorite_team": "Arsenal"
    });

    let res = app.post_subscriptions(&json_request).await?;

    assert_eq!(
        res.status(),
        StatusCode::OK,
        "Wrong response StatusCode: {}",
        res.status()
    );

    let body: Value = res.json().await?;
    assert_eq!(body["status"], "ok");
    assert!(
        !body["id"].as_str().unwrap_or_default().is_empty(),
        "Expected a non-empty subscriber id"
    );

    let dm = app.db.manager()?;
    let (email, favorite_team, source): (String, Option<String>, String) =
        sqlx::query_as("SELECT email, favorite_team, source FROM subscribers")
            .fetch_one(dm.db())
            .await?;

    assert_eq!(email, "john.doe@example.com");
    assert_eq!(favorite_team.as_deref(), Some("Arsenal"));
    assert_eq!(source, "website");

    Ok(())
}

#[tokio::test]
async fn api_subscribe_unprocessable_entity() -> Result<()> {
    let app = TestApp::spawn_without_db().await?;

    let tests = [
        (
            json!({
                "favorite_team": "Arsenal",
            }),
            "Missing email",
        ),
        (
            json!({
                "email": null,
            }),
            "Null email",
        ),
        (json!({}), "Empty json"),
    ];

    for (json_request, params) in tests {
        let res = app.post_subscriptions(&json_request).await?;
        assert_eq!(
            res.status(),
            StatusCode::UNPROCESSABLE_ENTITY,
            "Wrong response: ({}), Expected: ({}); for request with: {params}",
            res.status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    Ok(())
}

#[tokio::test]
async fn api_subscribe_returns_a_400_when_email_is_present_but_invalid() -> Result<()> {
    let app = TestApp::spawn_without_db().await?;

    let cases = vec![
        (
            json!({
                "email": "",
            }),
            "Empty email",
        ),
        (
            json!({
                "email": "not an email",
            }),
            "Invalid email",
        ),
        (
            json!({
                "email": "ursuladomain.com",
            }),
            "Missing @ symbol",
        ),
    ];

    for (body, description) in cases {
        let response = app.post_subscriptions(&body).await?;
        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not return a 400 BAD REQUEST, the payload was {}.",
            description
        );

        // Validation fails before any storage access; the detail names the
        // parsing error, not the missing database.
        let body: Value = response.json().await?;
        assert_eq!(body["detail"], "EmailInvalid");
    }

    Ok(())
}

#[tokio::test]
async fn api_subscribe_storage_failure_surfaces_as_400_with_detail() -> Result<()> {
    let app = TestApp::spawn_with_broken_db().await?;

    let json_request = json!({
        "email": "jane.doe@example.com",
    });

    let res = app.post_subscriptions(&json_request).await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body: Value = res.json().await?;
    let detail = body["detail"].as_str().unwrap_or_default();
    assert!(!detail.is_empty(), "Expected the storage error text in detail");

    Ok(())
}

#[tokio::test]
async fn api_subscribe_without_storage_reports_missing_module() -> Result<()> {
    let app = TestApp::spawn_without_db().await?;

    let res = app
        .post_subscriptions(&json!({ "email": "jane.doe@example.com" }))
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body: Value = res.json().await?;
    assert_eq!(body["detail"], "database module not found");

    Ok(())
}
