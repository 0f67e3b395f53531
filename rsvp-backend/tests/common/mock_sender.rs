// tests/common/mock_sender.rs

use async_trait::async_trait;
use rsvp_backend::infrastructure::email::{EmailError, EmailMessage, EmailSender};
use std::sync::{Arc, Mutex};

/// テスト用のモック送信。送られたメッセージを記録する
#[derive(Clone, Default)]
pub struct MockEmailSender {
    sent: Arc<Mutex<Vec<EmailMessage>>>,
    failure: Option<String>,
}

impl MockEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// 常に送信失敗（認証エラー等）を返す
    pub fn failing(reason: &str) -> Self {
        Self {
            failure: Some(reason.to_string()),
            ..Default::default()
        }
    }

    pub fn sent(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl EmailSender for MockEmailSender {
    async fn send(&self, message: EmailMessage) -> Result<(), EmailError> {
        if let Some(reason) = &self.failure {
            return Err(EmailError::SendError(reason.clone()));
        }

        self.sent.lock().unwrap().push(message);
        Ok(())
    }
}
