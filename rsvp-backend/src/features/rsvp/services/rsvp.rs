// rsvp-backend/src/features/rsvp/services/rsvp.rs

use super::template::RsvpNotification;
use crate::config::RsvpConfig;
use crate::features::rsvp::dto::RsvpAck;
use crate::features::rsvp::error::SubmissionError;
use crate::features::rsvp::models::SubmissionRequest;
use crate::infrastructure::email::{mask_email, EmailMessage, EmailSender};
use crate::log_with_context;
use serde_json::Value;
use std::sync::Arc;

/// RSVP受付サービス。1リクエストにつき最大1通の通知を送る
pub struct RsvpService {
    sender: Arc<dyn EmailSender>,
    config: RsvpConfig,
}

impl RsvpService {
    pub fn new(sender: Arc<dyn EmailSender>, config: RsvpConfig) -> Self {
        Self { sender, config }
    }

    /// ペイロードを検証し、通知メールを送信する
    pub async fn submit(&self, payload: &Value) -> Result<RsvpAck, SubmissionError> {
        let request = SubmissionRequest::from_payload(payload, self.config.max_guests)?;
        let rsvp = request.validate(&self.config.default_time)?;
        let notification = RsvpNotification::render(&rsvp);

        let message = EmailMessage {
            from_name: self.config.sender_name.clone(),
            to_email: self.config.recipient.clone(),
            subject: notification.subject,
            text_body: notification.text_body,
            html_body: notification.html_body,
        };

        // 再送はしない。失敗の記録はレスポンス変換側で行う
        self.sender
            .send(message)
            .await
            .map_err(SubmissionError::DispatchFailed)?;

        log_with_context!(
            tracing::Level::INFO,
            "RSVP notification dispatched",
            "recipient" => mask_email(&self.config.recipient),
            "guest_count" => rsvp.guest_count(),
            "attending" => rsvp.attending_count(),
            "declining" => rsvp.declining_count(),
        );

        Ok(RsvpAck::success())
    }
}
