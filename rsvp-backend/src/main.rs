// src/main.rs
use rsvp_backend::{
    app_router, config::AppConfig, infrastructure::email::build_sender, AppState,
};
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // トレーシングの設定
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rsvp_backend=info,tower_http=info".into()),
        )
        .with(fmt::layer())
        .init();

    tracing::info!("Starting RSVP backend...");

    // 設定を読み込む
    let app_config = AppConfig::from_env()?;
    tracing::info!(
        environment = %app_config.environment,
        email_development_mode = app_config.email.development_mode,
        max_guests = app_config.rsvp.max_guests,
        "Configuration loaded"
    );

    // 通知送信の実装を選択（開発モードではログ出力のみ）
    let sender = build_sender(&app_config.email)?;

    let server_addr = app_config.server_addr();
    let app = app_router(AppState::new(app_config, sender))?;

    // サーバーの起動
    tracing::info!("Router configured. Server listening on {}", server_addr);

    let listener = TcpListener::bind(&server_addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
