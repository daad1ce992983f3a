//! Notification Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Backend-assigned notification identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(pub u64);

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for NotificationId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// What part of the portal a notification originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Appointment,
    Payment,
    Record,
    System,
}

/// A single notification.
///
/// Field names map to the backend's camelCase JSON (`type`, `createdAt`).
/// List position is decided by insertion order, not `created_at`: new
/// notifications are prepended even when their timestamp is skewed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: NotificationId,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_backend_json() {
        let json = r#"{
            "id": 1,
            "title": "Appointment Confirmed",
            "message": "Your appointment for tomorrow at 2:00 PM has been confirmed.",
            "type": "appointment",
            "read": false,
            "createdAt": "2026-08-28T14:00:00Z"
        }"#;

        let notification: Notification = serde_json::from_str(json).unwrap();
        assert_eq!(notification.id, NotificationId(1));
        assert_eq!(notification.kind, NotificationKind::Appointment);
        assert!(!notification.read);

        let round = serde_json::to_string(&notification).unwrap();
        assert!(round.contains("\"type\":\"appointment\""));
        assert!(round.contains("\"createdAt\""));
    }
}
