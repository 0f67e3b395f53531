// rsvp-backend/src/middleware/cors.rs

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use axum::http::{header, HeaderValue, Method};
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// CORS ミドルウェア設定
/// 招待状サイトのオリジンからの POST のみを想定している
pub fn cors_layer(config: &AppConfig) -> AppResult<CorsLayer> {
    let origins = config
        .cors_allowed_origins
        .iter()
        .map(|origin| {
            origin.parse::<HeaderValue>().map_err(|_| {
                AppError::Configuration(format!("Invalid CORS origin: {}", origin))
            })
        })
        .collect::<AppResult<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600))) // プリフライトリクエストのキャッシュ時間
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_layer_rejects_invalid_origin() {
        let mut config = AppConfig::for_testing();
        config.cors_allowed_origins = vec!["http://ok.example.com".to_string(), "bad\norigin".to_string()];

        assert!(matches!(
            cors_layer(&config),
            Err(AppError::Configuration(_))
        ));
    }

    #[test]
    fn test_cors_layer_accepts_configured_origins() {
        assert!(cors_layer(&AppConfig::for_testing()).is_ok());
    }
}
