// rsvp-backend/src/features/rsvp/error.rs

use crate::infrastructure::email::EmailError;
use thiserror::Error;

/// RSVP 送信処理のエラー
#[derive(Error, Debug)]
pub enum SubmissionError {
    #[error("Invalid payload")]
    InvalidPayload,

    #[error("Each provided guest must include both first and last name.")]
    IncompleteGuestName,

    #[error("At least one guest must be provided.")]
    NoGuestsProvided,

    #[error("Email failed: {0}")]
    DispatchFailed(#[source] EmailError),
}

impl SubmissionError {
    /// クライアント向けのエラー分類
    pub fn kind(&self) -> &'static str {
        match self {
            SubmissionError::InvalidPayload => "invalid_payload",
            SubmissionError::IncompleteGuestName => "incomplete_guest_name",
            SubmissionError::NoGuestsProvided => "no_guests_provided",
            SubmissionError::DispatchFailed(_) => "dispatch_failed",
        }
    }

    /// クライアントに返すメッセージ。送信失敗の詳細は含めない
    pub fn public_message(&self) -> String {
        match self {
            SubmissionError::DispatchFailed(_) => "Email failed".to_string(),
            other => other.to_string(),
        }
    }

    pub fn is_validation_error(&self) -> bool {
        !matches!(self, SubmissionError::DispatchFailed(_))
    }
}
