// rsvp-backend/src/infrastructure/email.rs

use async_trait::async_trait;
use lettre::{
    message::{Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
    Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use std::env;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// メール送信エラー
#[derive(Error, Debug)]
pub enum EmailError {
    #[error("SMTP configuration error: {0}")]
    ConfigurationError(String),

    #[error("Failed to send email: {0}")]
    SendError(String),

    #[error("Invalid email address: {0}")]
    InvalidAddress(String),

    #[error("Missing email configuration: {0}")]
    MissingConfiguration(&'static str),
}

/// メール設定
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// SMTP サーバーホスト
    pub smtp_host: String,
    /// SMTP サーバーポート
    pub smtp_port: u16,
    /// SMTP ユーザー名
    pub smtp_username: String,
    /// SMTP パスワード
    pub smtp_password: String,
    /// 送信者メールアドレス
    pub from_email: String,
    /// TLS を使用するか
    pub use_tls: bool,
    /// 開発モードかどうか（ログ出力のみ）
    pub development_mode: bool,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_host: "smtp.gmail.com".to_string(),
            smtp_port: 465,
            smtp_username: "user".to_string(),
            smtp_password: "password".to_string(),
            from_email: "noreply@example.com".to_string(),
            use_tls: true,
            development_mode: true, // 開発環境ではデフォルトで true
        }
    }
}

impl EmailConfig {
    /// 環境変数から設定を読み込み
    pub fn from_env() -> Result<Self, EmailError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// キーから値を引く関数で設定を組み立てる。
    /// 真偽値は "true" / "false" のみ受け付け、それ以外は起動エラーにする
    pub fn from_lookup<F>(lookup: F) -> Result<Self, EmailError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let development_mode =
            parse_flag("EMAIL_DEVELOPMENT_MODE", lookup("EMAIL_DEVELOPMENT_MODE"), true)?;

        // 開発モードでは SMTP 資格情報は使わないので既定値で埋める
        let credential = |key: &'static str, default: String| match lookup(key) {
            Some(value) => Ok(value),
            None if development_mode => Ok(default),
            None => Err(EmailError::MissingConfiguration(key)),
        };
        let smtp_username = credential("SMTP_USERNAME", defaults.smtp_username)?;
        let smtp_password = credential("SMTP_PASSWORD", defaults.smtp_password)?;

        let smtp_port = match lookup("SMTP_PORT") {
            Some(port) => port.trim().parse().map_err(|_| {
                EmailError::ConfigurationError(format!("Invalid SMTP_PORT value: {port}"))
            })?,
            None => defaults.smtp_port,
        };

        // Gmail のアプリパスワード運用では送信者とログインユーザーが同一
        let from_email = lookup("FROM_EMAIL").unwrap_or_else(|| {
            if development_mode {
                defaults.from_email
            } else {
                smtp_username.clone()
            }
        });

        Ok(Self {
            smtp_host: lookup("SMTP_HOST").unwrap_or(defaults.smtp_host),
            smtp_port,
            smtp_username,
            smtp_password,
            from_email,
            use_tls: parse_flag("SMTP_USE_TLS", lookup("SMTP_USE_TLS"), defaults.use_tls)?,
            development_mode,
        })
    }

    /// 設定の検証
    pub fn validate(&self) -> Result<(), EmailError> {
        if !is_valid_email(&self.from_email) {
            return Err(EmailError::InvalidAddress(self.from_email.clone()));
        }

        if self.development_mode {
            return Ok(()); // 開発モードでは SMTP 設定の検証をスキップ
        }

        if self.smtp_host.is_empty() {
            return Err(EmailError::ConfigurationError(
                "SMTP host is required".to_string(),
            ));
        }

        if self.smtp_username.is_empty() {
            return Err(EmailError::ConfigurationError(
                "SMTP username is required".to_string(),
            ));
        }

        if self.smtp_password.is_empty() {
            return Err(EmailError::ConfigurationError(
                "SMTP password is required".to_string(),
            ));
        }

        Ok(())
    }
}

/// メール送信内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    /// 送信者の表示名（アドレスは送信側の設定を使う）
    pub from_name: String,
    /// 宛先メールアドレス
    pub to_email: String,
    /// 件名
    pub subject: String,
    /// テキストボディ
    pub text_body: String,
    /// HTMLボディ
    pub html_body: String,
}

/// 通知送信の抽象。ハンドラーはこのトレイト越しにのみメールを送る
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, message: EmailMessage) -> Result<(), EmailError>;
}

/// 設定に応じた送信実装を作成
pub fn build_sender(config: &EmailConfig) -> Result<Arc<dyn EmailSender>, EmailError> {
    config.validate()?;

    if config.development_mode {
        info!("Email development mode enabled, messages will only be logged");
        return Ok(Arc::new(LogEmailSender::new(config.from_email.clone())));
    }

    Ok(Arc::new(SmtpEmailSender::new(config)?))
}

/// lettre による SMTP 送信
pub struct SmtpEmailSender {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from_email: String,
}

impl SmtpEmailSender {
    pub fn new(config: &EmailConfig) -> Result<Self, EmailError> {
        let credentials =
            Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());

        let builder = if !config.use_tls {
            // ローカルのメールキャッチャー向け
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.smtp_host)
        } else if config.smtp_port == 465 {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
                .map_err(|e| EmailError::ConfigurationError(e.to_string()))?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
                .map_err(|e| EmailError::ConfigurationError(e.to_string()))?
        };

        let transport = builder
            .port(config.smtp_port)
            .credentials(credentials)
            .build();

        Ok(Self {
            transport,
            from_email: config.from_email.clone(),
        })
    }

    fn build_message(&self, message: EmailMessage) -> Result<Message, EmailError> {
        let from_address: Address = self
            .from_email
            .parse()
            .map_err(|_| EmailError::InvalidAddress(self.from_email.clone()))?;
        let to: Mailbox = message
            .to_email
            .parse()
            .map_err(|_| EmailError::InvalidAddress(message.to_email.clone()))?;

        Message::builder()
            .from(Mailbox::new(Some(message.from_name), from_address))
            .to(to)
            .subject(message.subject)
            .multipart(MultiPart::alternative_plain_html(
                message.text_body,
                message.html_body,
            ))
            .map_err(|e| EmailError::SendError(e.to_string()))
    }
}

#[async_trait]
impl EmailSender for SmtpEmailSender {
    async fn send(&self, message: EmailMessage) -> Result<(), EmailError> {
        if !is_valid_email(&message.to_email) {
            return Err(EmailError::InvalidAddress(message.to_email));
        }

        let to_email = message.to_email.clone();
        let subject = message.subject.clone();
        let email = self.build_message(message)?;

        self.transport
            .send(email)
            .await
            .map_err(|e| EmailError::SendError(e.to_string()))?;

        info!(
            to_email = %mask_email(&to_email),
            subject = %subject,
            "Email sent successfully"
        );

        Ok(())
    }
}

/// 開発モード用。送信せずにログへ出力する
pub struct LogEmailSender {
    from_email: String,
}

impl LogEmailSender {
    pub fn new(from_email: String) -> Self {
        Self { from_email }
    }
}

#[async_trait]
impl EmailSender for LogEmailSender {
    async fn send(&self, message: EmailMessage) -> Result<(), EmailError> {
        if !is_valid_email(&message.to_email) {
            return Err(EmailError::InvalidAddress(message.to_email));
        }

        info!("📧 EMAIL (Development Mode)");
        info!("From: {} <{}>", message.from_name, self.from_email);
        info!("To: {}", message.to_email);
        info!("Subject: {}", message.subject);
        info!("--- HTML Body ---");
        info!("{}", message.html_body);
        info!("--- Text Body ---");
        info!("{}", message.text_body);
        info!("--- End Email ---");

        Ok(())
    }
}

// --- ユーティリティ関数 ---

fn parse_flag(key: &str, raw: Option<String>, default: bool) -> Result<bool, EmailError> {
    match raw {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| {
            EmailError::ConfigurationError(format!(
                "{key} must be \"true\" or \"false\", got {value:?}"
            ))
        }),
    }
}

/// 簡単なメールアドレス検証
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    // @が一つだけあること
    if domain.contains('@') {
        return false;
    }

    // ローカル部とドメイン部が空でないこと
    if local.is_empty() || domain.is_empty() {
        return false;
    }

    // ドメイン部に.が含まれ、.で始まったり終わったりしないこと
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// メールアドレスをマスク
pub fn mask_email(email: &str) -> String {
    if let Some(at_pos) = email.find('@') {
        let (local, domain) = email.split_at(at_pos);
        let masked_local = if local.chars().count() <= 2 {
            "*".repeat(local.chars().count())
        } else {
            let first: String = local.chars().take(1).collect();
            format!("{}****", first)
        };
        format!("{}{}", masked_local, domain)
    } else {
        "****@****".to_string()
    }
}
