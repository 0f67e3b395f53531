// rsvp-backend/src/features/rsvp/models/submission.rs

use super::guest::{text_field, GuestEntry};
use crate::features::rsvp::error::SubmissionError;
use serde_json::Value;

/// 受信したRSVPリクエスト（正規化済み・未検証）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRequest {
    pub scheduled_time: String,
    pub guest_entries: Vec<GuestEntry>,
}

impl SubmissionRequest {
    /// JSON ペイロードを解釈する。
    /// `attendees` が配列でなければ InvalidPayload。配列は先頭 `max_guests` 件に切り詰める
    pub fn from_payload(payload: &Value, max_guests: usize) -> Result<Self, SubmissionError> {
        let attendees = payload
            .get("attendees")
            .and_then(Value::as_array)
            .ok_or(SubmissionError::InvalidPayload)?;

        let guest_entries = attendees
            .iter()
            .take(max_guests)
            .map(GuestEntry::from_value)
            .collect();

        Ok(Self {
            scheduled_time: text_field(payload, "time").trim().to_string(),
            guest_entries,
        })
    }

    /// 検証して入力済みのゲストだけを残す。
    /// 片方だけ入力された行はフィルタ前に検出し、黙って捨てない
    pub fn validate(self, default_time: &str) -> Result<ValidatedRsvp, SubmissionError> {
        if self.guest_entries.iter().any(GuestEntry::is_half_filled) {
            return Err(SubmissionError::IncompleteGuestName);
        }

        let guests: Vec<GuestEntry> = self
            .guest_entries
            .into_iter()
            .filter(GuestEntry::is_filled)
            .collect();

        if guests.is_empty() {
            return Err(SubmissionError::NoGuestsProvided);
        }

        let scheduled_time = if self.scheduled_time.is_empty() {
            default_time.to_string()
        } else {
            self.scheduled_time
        };

        Ok(ValidatedRsvp {
            scheduled_time,
            guests,
        })
    }
}

/// 検証済みのRSVP。guests は入力順を保持し、必ず1件以上
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRsvp {
    pub scheduled_time: String,
    pub guests: Vec<GuestEntry>,
}

impl ValidatedRsvp {
    pub fn guest_count(&self) -> usize {
        self.guests.len()
    }

    pub fn attending_count(&self) -> usize {
        self.guests
            .iter()
            .filter(|g| g.attendance.is_attending())
            .count()
    }

    pub fn declining_count(&self) -> usize {
        self.guest_count() - self.attending_count()
    }
}
