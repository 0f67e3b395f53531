// rsvp-backend/src/api/mod.rs
use crate::config::AppConfig;
use crate::error::AppResult;
use crate::features::rsvp::{rsvp_router, RsvpService};
use crate::features::system::system_router;
use crate::infrastructure::email::EmailSender;
use crate::logging::{inject_request_context, logging_middleware};
use crate::middleware::cors_layer;
use axum::{extract::DefaultBodyLimit, middleware, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// 統一されたアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub rsvp_service: Arc<RsvpService>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// 送信実装を注入して状態を組み立てる
    pub fn new(config: AppConfig, sender: Arc<dyn EmailSender>) -> Self {
        let rsvp_service = Arc::new(RsvpService::new(sender, config.rsvp.clone()));

        Self {
            rsvp_service,
            config: Arc::new(config),
        }
    }
}

/// 全ルーターとミドルウェアを組み立てる
pub fn app_router(app_state: AppState) -> AppResult<Router> {
    let cors = cors_layer(&app_state.config)?;
    let body_limit = app_state.config.body_limit;

    // 後に追加したレイヤーほど外側で実行される
    Ok(Router::new()
        .merge(rsvp_router(app_state.clone()))
        .merge(system_router(app_state))
        // 超過時は JSON 抽出のリジェクションとして 413 を返す
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(cors)
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(inject_request_context))
        .layer(TraceLayer::new_for_http()))
}
