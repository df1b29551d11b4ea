use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::NotificationId;

/// Where a notification is addressed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NotificationRecipient {
    Email(String),
    Group(String),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    /// Sent to a freshly provisioned partner account.
    AccountApproved,
    /// Optional courtesy notice on rejection.
    SubmissionRejected,
}

/// An append-only notification record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    pub id: NotificationId,
    pub recipient: NotificationRecipient,
    pub notification_type: NotificationType,
    pub title: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn account_approved(email: impl Into<String>, company_name: &str) -> Self {
        Self {
            id: NotificationId::new(),
            recipient: NotificationRecipient::Email(email.into()),
            notification_type: NotificationType::AccountApproved,
            title: "Your partner account is ready".to_string(),
            message: format!(
                "The registration for {} was approved. Sign in with the temporary \
                 password shown to you once and change it on first login.",
                company_name
            ),
            created_at: Utc::now(),
        }
    }
}
