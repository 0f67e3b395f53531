use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;

use super::dto::HealthCheckResponse;
use crate::api::AppState;

pub async fn health_check(State(app_state): State<AppState>) -> Json<HealthCheckResponse> {
    let config = &app_state.config;

    Json(HealthCheckResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: config.environment.clone(),
        email_mode: if config.email.development_mode {
            "log"
        } else {
            "smtp"
        }
        .to_string(),
        timestamp: Utc::now(),
    })
}

pub fn system_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .with_state(app_state)
}
