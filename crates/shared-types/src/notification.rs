use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Notification category, stored as snake_case text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Info,
    Warning,
    Success,
    FeeReminder,
}

impl NotificationKind {
    /// Human label, e.g. "fee reminder".
    pub fn label(&self) -> &'static str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Warning => "warning",
            NotificationKind::Success => "success",
            NotificationKind::FeeReminder => "fee reminder",
        }
    }
}

/// A system notification shown to admins and members.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    #[serde(deserialize_with = "crate::timestamp::deserialize_normalized")]
    pub created_at: DateTime<Utc>,
    pub read: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&NotificationKind::FeeReminder).unwrap(),
            "\"fee_reminder\""
        );
    }
}
