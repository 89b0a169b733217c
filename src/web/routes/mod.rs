//! Contains all the routes that this application can handle.

mod api;
mod diagnostics;
mod home;

use crate::AppState;

use axum::{
    http::StatusCode,
    routing::{get, post},
    Router,
};

async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// All the routes of the server
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(home::root))
        .route("/test", get(diagnostics::test_database))
        .with_state(app_state.clone())
        .nest("/api", api_routes(app_state))
        .route("/health-check", get(health_check))
}

/// API - Routes nested under "/api" path
fn api_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/hello", get(api::hello))
        .route("/subscribe", post(api::subscribe))
        .route("/matches", get(api::matches))
        .with_state(app_state)
}
