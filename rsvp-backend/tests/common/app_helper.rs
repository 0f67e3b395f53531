// tests/common/app_helper.rs

use axum::Router;
use rsvp_backend::{app_router, config::AppConfig, AppState};
use std::sync::Arc;

use super::mock_sender::MockEmailSender;

/// モック送信付きアプリのセットアップ
pub fn setup_app() -> (Router, MockEmailSender) {
    setup_app_with_sender(MockEmailSender::new())
}

pub fn setup_app_with_sender(sender: MockEmailSender) -> (Router, MockEmailSender) {
    super::init_test_env();

    let app_state = AppState::new(AppConfig::for_testing(), Arc::new(sender.clone()));
    let app = app_router(app_state).unwrap();

    (app, sender)
}
