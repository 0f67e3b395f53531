// rsvp-backend/src/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::features::rsvp::error::SubmissionError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Submission(#[from] SubmissionError),

    #[error("Request body exceeds the configured limit")]
    PayloadTooLarge,

    #[error("Configuration error: {0}")]
    Configuration(String),
}

// axum でエラーをHTTPレスポンスに変換するための実装
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::Submission(err) => {
                let status = if err.is_validation_error() {
                    tracing::warn!(error_type = err.kind(), "RSVP rejected: {}", err);
                    StatusCode::BAD_REQUEST
                } else {
                    // 原因はサーバーログにのみ出す
                    tracing::error!(error_type = err.kind(), error = ?err, "RSVP dispatch failed");
                    StatusCode::INTERNAL_SERVER_ERROR
                };

                (
                    status,
                    ErrorResponse {
                        error: err.public_message(),
                        error_type: err.kind().to_string(),
                    },
                )
            }
            AppError::PayloadTooLarge => {
                tracing::warn!("RSVP rejected: request body too large");
                (
                    StatusCode::PAYLOAD_TOO_LARGE,
                    ErrorResponse {
                        error: "Payload too large".to_string(),
                        error_type: "payload_too_large".to_string(),
                    },
                )
            }
            AppError::Configuration(message) => {
                tracing::error!("Configuration error: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "An internal server error occurred".to_string(),
                        error_type: "internal_server_error".to_string(),
                    },
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

// Result 型のエイリアス
pub type AppResult<T> = Result<T, AppError>;

/// 統一的なエラーレスポンス構造
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::email::EmailError;

    #[test]
    fn test_status_codes() {
        let cases = [
            (SubmissionError::InvalidPayload, StatusCode::BAD_REQUEST),
            (SubmissionError::IncompleteGuestName, StatusCode::BAD_REQUEST),
            (SubmissionError::NoGuestsProvided, StatusCode::BAD_REQUEST),
            (
                SubmissionError::DispatchFailed(EmailError::SendError("timeout".to_string())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            let response = AppError::from(err).into_response();
            assert_eq!(response.status(), expected);
        }

        assert_eq!(
            AppError::PayloadTooLarge.into_response().status(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
    }
}
