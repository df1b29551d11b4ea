//! Immutable audit trail of moderation decisions.
//!
//! Entries are append-only and never mutated or deleted. Local durability
//! of the trail is an infrastructure concern; from the workflow's point of
//! view `record` always succeeds (a failed append is logged, not surfaced,
//! so a decision is never blocked on its own paper trail).

pub mod models;

pub use models::AuditLogEntry;

use tracing::error;

use crate::kernel::ServerDeps;

/// Append an entry to the audit trail.
pub async fn record(entry: AuditLogEntry, deps: &ServerDeps) {
    if let Err(e) = deps.audit.append(entry).await {
        error!(error = %e, "Failed to append audit entry");
    }
}
