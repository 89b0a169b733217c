use anyhow::Result;
use reqwest::StatusCode;
use serde_json::Value;

use crate::helpers::TestApp;

#[tokio::test]
async fn api_matches_returns_four_fixed_records() -> Result<()> {
    let app = TestApp::spawn_without_db().await?;

    let res = app.get("/api/matches").await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Vec<Value> = res.json().await?;
    assert_eq!(body.len(), 4, "Expected exactly 4 sample matches");

    for m in &body {
        let status = m["status"].as_str().unwrap();
        assert!(
            ["LIVE", "FT", "HT", "NS"].contains(&status),
            "Unknown match status: {status}"
        );
    }

    Ok(())
}

#[tokio::test]
async fn api_matches_ucl_fixture_is_level_at_57_minutes() -> Result<()> {
    let app = TestApp::spawn_without_db().await?;

    let body: Vec<Value> = app.get("/api/matches").await?.json().await?;
    let ucl = body
        .iter()
        .find(|m| m["id"] == "ucl-001")
        .expect("ucl-001 missing from the sample");

    assert_eq!(ucl["home_score"], 1);
    assert_eq!(ucl["away_score"], 1);
    assert_eq!(ucl["minute"], 57);
    assert_eq!(ucl["status"], "LIVE");

    Ok(())
}

#[tokio::test]
async fn api_matches_finished_record_has_null_minute() -> Result<()> {
    let app = TestApp::spawn_without_db().await?;

    let body: Vec<Value> = app.get("/api/matches").await?.json().await?;
    let epl = body
        .iter()
        .find(|m| m["id"] == "epl-101")
        .expect("epl-101 missing from the sample");

    assert_eq!(epl["status"], "FT");
    assert!(epl["minute"].is_null());

    Ok(())
}
