//! Partner notifications.
//!
//! Append-only and best-effort: a failure to record a notification is
//! logged and swallowed, never surfaced to the review workflow. Consumers
//! must tolerate duplicates (retried provisioning may notify twice).

pub mod models;

pub use models::{Notification, NotificationRecipient, NotificationType};

use tracing::warn;

use crate::kernel::ServerDeps;

/// Append a notification via the sink.
///
/// Returns the stored notification, or `None` if the sink failed (the
/// failure is logged here and deliberately not propagated).
pub async fn dispatch(notification: Notification, deps: &ServerDeps) -> Option<Notification> {
    match deps.notifications.append(notification).await {
        Ok(stored) => Some(stored),
        Err(e) => {
            warn!(error = %e, "Failed to record notification, continuing");
            None
        }
    }
}
