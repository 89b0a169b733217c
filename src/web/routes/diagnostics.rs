//! The `/test` diagnostics probe: a best-effort status report that never fails.
//! Every failure along the chain degrades to a descriptive string instead of an error.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::{database::DbState, AppState};

/// How much of an enumeration error message the report may carry.
const ERROR_DETAIL_LIMIT: usize = 50;

/// Flat status report served by `GET /test`. Built fresh per request.
#[derive(Debug, Serialize)]
pub struct DiagnosticReport {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

pub async fn test_database(State(app_state): State<AppState>) -> Json<DiagnosticReport> {
    let mut connection_status = "Not Connected";
    let mut collections = Vec::new();

    let database = match &app_state.db {
        DbState::Missing => {
            "❌ Database module not found (run enable-database first)".to_string()
        }
        DbState::Uninitialized => "⚠️  Available but not initialized".to_string(),
        DbState::Ready(dm) => {
            connection_status = "Connected";
            match dm.list_collection_names().await {
                Ok(names) => {
                    collections = names;
                    "✅ Connected & Working".to_string()
                }
                Err(er) => format!(
                    "⚠️  Connected but Error: {}",
                    truncate_chars(&er.to_string(), ERROR_DETAIL_LIMIT)
                ),
            }
        }
    };

    // Presence only; the values themselves are never echoed back.
    Json(DiagnosticReport {
        backend: "✅ Running".to_string(),
        database,
        database_url: env_presence("DATABASE_URL"),
        database_name: env_presence("DATABASE_NAME"),
        connection_status: connection_status.to_string(),
        collections,
    })
}

/// An empty value counts as "Not Set", same as an absent one.
fn env_presence(key: &str) -> String {
    match std::env::var(key) {
        Ok(val) if !val.is_empty() => "✅ Set".to_string(),
        _ => "❌ Not Set".to_string(),
    }
}

/// Truncates on a character boundary, never mid-codepoint.
fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
