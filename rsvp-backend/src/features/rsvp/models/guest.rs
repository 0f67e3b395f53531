// rsvp-backend/src/features/rsvp/models/guest.rs

use serde_json::Value;

/// 出欠の回答
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttendanceChoice {
    #[default]
    Attending,
    Declined,
}

impl AttendanceChoice {
    /// 生の値が厳密に "no" の場合のみ欠席。それ以外（未指定・不明な値）は出席扱い
    pub fn from_raw(raw: Option<&Value>) -> Self {
        match raw.and_then(Value::as_str) {
            Some("no") => AttendanceChoice::Declined,
            _ => AttendanceChoice::Attending,
        }
    }

    pub fn is_attending(self) -> bool {
        self == AttendanceChoice::Attending
    }

    /// 通知メールに載せる表示ラベル
    pub fn label(self) -> &'static str {
        match self {
            AttendanceChoice::Attending => "Po — Pranoj me Kënaqësi (YES)",
            AttendanceChoice::Declined => "Jo — Refuzoj me Keqardhje (NO)",
        }
    }
}

/// 招待客一人分の回答
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestEntry {
    pub first_name: String,
    pub last_name: String,
    pub attendance: AttendanceChoice,
}

impl GuestEntry {
    pub fn new(first_name: &str, last_name: &str, attendance: AttendanceChoice) -> Self {
        Self {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            attendance,
        }
    }

    /// リクエストの1要素から正規化済みのエントリを作る。
    /// 文字列以外の値は空文字として扱う
    pub fn from_value(value: &Value) -> Self {
        Self::new(
            text_field(value, "first"),
            text_field(value, "last"),
            AttendanceChoice::from_raw(value.get("attending")),
        )
    }

    pub fn normalized(&self) -> Self {
        Self::new(&self.first_name, &self.last_name, self.attendance)
    }

    pub fn is_empty(&self) -> bool {
        self.first_name.is_empty() && self.last_name.is_empty()
    }

    pub fn is_filled(&self) -> bool {
        !self.first_name.is_empty() && !self.last_name.is_empty()
    }

    /// 姓名の片方だけが入力されている
    pub fn is_half_filled(&self) -> bool {
        !self.is_empty() && !self.is_filled()
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// 文字列フィールドを取り出す。存在しない・文字列でない場合は空文字
pub(crate) fn text_field<'a>(value: &'a Value, key: &str) -> &'a str {
    value.get(key).and_then(Value::as_str).unwrap_or("")
}
