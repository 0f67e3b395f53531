use serde::{Deserialize, Serialize};

/// RSVP 送信成功レスポンス: `{ "ok": true }`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsvpAck {
    pub ok: bool,
}

impl RsvpAck {
    pub fn success() -> Self {
        Self { ok: true }
    }
}
