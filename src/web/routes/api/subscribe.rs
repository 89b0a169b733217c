use axum::{extract::State, Json};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::{
    web::{
        data::{DeserSubscriber, ValidSubscriber},
        WebResult,
    },
    AppState,
};

/// Body returned on a successful subscription.
#[derive(Debug, Serialize)]
pub struct SubscribeResponse {
    pub status: &'static str,
    pub id: Uuid,
}

#[tracing::instrument(
    name = "Saving new subscriber to the database",
    skip(app_state, subscriber),
    fields(subscriber_email = %subscriber.email)
)]
pub async fn subscribe(
    State(app_state): State<AppState>,
    Json(subscriber): Json<DeserSubscriber>,
) -> WebResult<Json<SubscribeResponse>> {
    let subscriber: ValidSubscriber = subscriber.try_into()?;

    let dm = app_state.db.manager()?;
    let id = dm.create_subscriber(&subscriber).await?;

    info!("{:<12} - New subscriber stored: {id}", "subscribe");
    Ok(Json(SubscribeResponse { status: "ok", id }))
}
