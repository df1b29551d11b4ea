// TestDependencies - failure-injecting doubles for testing
//
// The in-memory implementations in `memory` already serve as the happy-path
// test substrate; these doubles exist to exercise the failure contracts
// (best-effort notifications, never-blocking audit appends).

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::domains::audit::models::AuditLogEntry;
use crate::domains::notifications::models::Notification;

use super::memory::{InMemoryAccountDirectory, InMemoryAuditTrail, InMemoryItemStore};
use super::traits::{BaseAuditTrail, BaseNotificationSink};
use super::ServerDeps;

// =============================================================================
// Failing notification sink
// =============================================================================

/// A sink whose every append fails. Approvals must still succeed.
pub struct FailingNotificationSink;

#[async_trait]
impl BaseNotificationSink for FailingNotificationSink {
    async fn append(&self, _notification: Notification) -> Result<Notification> {
        Err(anyhow::anyhow!("notification backend unavailable"))
    }

    async fn list(&self) -> Result<Vec<Notification>> {
        Ok(Vec::new())
    }
}

// =============================================================================
// Failing audit trail
// =============================================================================

/// A trail whose every append fails. The workflow logs and moves on.
pub struct FailingAuditTrail;

#[async_trait]
impl BaseAuditTrail for FailingAuditTrail {
    async fn append(&self, _entry: AuditLogEntry) -> Result<AuditLogEntry> {
        Err(anyhow::anyhow!("audit backend unavailable"))
    }

    async fn recent(&self, _limit: usize) -> Result<Vec<AuditLogEntry>> {
        Ok(Vec::new())
    }
}

// =============================================================================
// Wiring helpers
// =============================================================================

impl ServerDeps {
    /// In-memory wiring with a broken notification sink.
    pub fn with_failing_notifications(dashboard_base_url: impl Into<String>) -> Self {
        Self::new(
            Arc::new(InMemoryItemStore::new()),
            Arc::new(InMemoryAccountDirectory::new()),
            Arc::new(FailingNotificationSink),
            Arc::new(InMemoryAuditTrail::new()),
            dashboard_base_url,
        )
    }
}
