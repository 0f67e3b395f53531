// rsvp-backend/src/features/rsvp/handlers.rs

use crate::api::AppState;
use crate::error::{AppError, AppResult};
use crate::features::rsvp::dto::RsvpAck;
use crate::features::rsvp::error::SubmissionError;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use serde_json::Value;
use tracing::debug;

/// RSVP を受け付けて通知メールを送信
pub async fn submit_rsvp_handler(
    State(app_state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<RsvpAck>> {
    // サイズ超過以外（ボディなし・JSON 不正・Content-Type 不一致）は InvalidPayload
    let Json(payload) = payload.map_err(|rejection| {
        debug!(reason = %rejection.body_text(), "Rejected RSVP body");
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge
        } else {
            AppError::from(SubmissionError::InvalidPayload)
        }
    })?;

    let ack = app_state.rsvp_service.submit(&payload).await?;

    Ok(Json(ack))
}

pub fn rsvp_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/send", post(submit_rsvp_handler))
        .with_state(app_state)
}
