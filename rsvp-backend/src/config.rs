// rsvp-backend/src/config.rs
use crate::error::{AppError, AppResult};
use crate::infrastructure::email::{is_valid_email, EmailConfig};
use dotenvy::dotenv;
use std::env;

/// RSVP 受付の設定
#[derive(Clone, Debug)]
pub struct RsvpConfig {
    /// 通知の宛先（新郎新婦）
    pub recipient: String,
    /// 送信者の表示名
    pub sender_name: String,
    /// 時刻が未指定の場合の既定値
    pub default_time: String,
    /// 1回の送信で受け付けるゲスト数の上限
    pub max_guests: usize,
}

impl Default for RsvpConfig {
    fn default() -> Self {
        Self {
            recipient: "rsvp@example.com".to_string(),
            sender_name: "Wedding RSVP".to_string(),
            default_time: "19:00".to_string(),
            max_guests: 5,
        }
    }
}

impl RsvpConfig {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 任意のキー参照関数から設定を組み立てる（値は前後の空白を除去して保持）
    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> AppResult<Self> {
        let defaults = Self::default();
        let text = |key: &str, default: String| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .unwrap_or(default)
        };

        let config = Self {
            recipient: text("RSVP_RECIPIENT", defaults.recipient),
            sender_name: text("RSVP_SENDER_NAME", defaults.sender_name),
            default_time: text("RSVP_DEFAULT_TIME", defaults.default_time),
            max_guests: match lookup("RSVP_MAX_GUESTS") {
                Some(value) => value.trim().parse().map_err(|_| {
                    AppError::Configuration("Invalid RSVP_MAX_GUESTS value".to_string())
                })?,
                None => defaults.max_guests,
            },
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if !is_valid_email(&self.recipient) {
            return Err(AppError::Configuration(format!(
                "Invalid RSVP_RECIPIENT: {}",
                self.recipient
            )));
        }

        if self.default_time.trim().is_empty() {
            return Err(AppError::Configuration(
                "RSVP_DEFAULT_TIME must not be blank".to_string(),
            ));
        }

        if self.max_guests == 0 {
            return Err(AppError::Configuration(
                "RSVP_MAX_GUESTS must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub body_limit: usize,
    pub rsvp: RsvpConfig,
    pub email: EmailConfig,
}

impl AppConfig {
    pub fn from_env() -> AppResult<Self> {
        dotenv().ok(); // .env ファイルを読み込む (存在しなくてもエラーにしない)
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> AppResult<Self> {
        let email = EmailConfig::from_lookup(&lookup)
            .map_err(|e| AppError::Configuration(e.to_string()))?;

        let config = Self {
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|| "5000".to_string())
                .parse()
                .map_err(|_| AppError::Configuration("Invalid PORT value".to_string()))?,
            cors_allowed_origins: parse_origins(
                &lookup("CORS_ALLOWED_ORIGINS")
                    .unwrap_or_else(|| "http://localhost:3000".to_string()),
            ),
            body_limit: lookup("BODY_LIMIT_BYTES")
                .unwrap_or_else(|| "65536".to_string())
                .parse()
                .map_err(|_| AppError::Configuration("Invalid BODY_LIMIT_BYTES value".to_string()))?,
            rsvp: RsvpConfig::from_lookup(&lookup)?,
            email,
        };

        config.validate()?;
        Ok(config)
    }

    /// 本番環境で開発モード（送信せずログのみ）のまま起動しない
    pub fn validate(&self) -> AppResult<()> {
        if self.environment == "production" && self.email.development_mode {
            return Err(AppError::Configuration(
                "EMAIL_DEVELOPMENT_MODE must be false when ENVIRONMENT=production".to_string(),
            ));
        }

        Ok(())
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// テスト用の設定を作成
    pub fn for_testing() -> Self {
        Self {
            environment: "test".to_string(),
            host: "127.0.0.1".to_string(),
            port: 5000,
            cors_allowed_origins: vec!["http://localhost:3000".to_string()],
            body_limit: 64 * 1024,
            rsvp: RsvpConfig::default(),
            email: EmailConfig::default(),
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
