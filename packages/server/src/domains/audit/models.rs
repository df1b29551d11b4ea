use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{Actor, AuditEntryId, ItemId};
use crate::domains::moderation::models::{ApprovableItem, ReviewOutcome};

/// One immutable record of who did what to which item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuditLogEntry {
    pub id: AuditEntryId,
    /// Display identity of the reviewer.
    pub actor: String,
    /// Action code, e.g. `PARTNER_REGISTRATION_APPROVED`.
    pub action: String,
    pub target_id: ItemId,
    /// Human-readable summary of what happened.
    pub details: String,
    /// Free-form context (requester identity and the like).
    /// Never contains credentials.
    pub metadata: serde_json::Value,
    pub timestamp: DateTime<Utc>,
}

impl AuditLogEntry {
    /// Build the entry for a completed review transition.
    pub fn for_review(item: &ApprovableItem, outcome: ReviewOutcome, actor: &Actor) -> Self {
        let verb = match outcome {
            ReviewOutcome::Approved => "approved",
            ReviewOutcome::Rejected => "rejected",
        };
        Self {
            id: AuditEntryId::new(),
            actor: actor.to_string(),
            action: item.kind().audit_action(outcome),
            target_id: item.id,
            details: format!(
                "{} \"{}\" submitted by {}",
                verb,
                item.payload.title(),
                item.requester_name
            ),
            metadata: serde_json::json!({
                "requester_id": item.requester_id,
                "requester_name": item.requester_name,
                "kind": item.kind(),
                "rejection_reason": item.rejection_reason,
            }),
            timestamp: Utc::now(),
        }
    }
}
