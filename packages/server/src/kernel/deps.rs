//! Server dependencies (using traits for testability)
//!
//! Central dependency container handed to every domain action. All
//! infrastructure is behind trait objects so tests can swap in doubles.

use std::sync::Arc;

use super::memory::{
    InMemoryAccountDirectory, InMemoryAuditTrail, InMemoryItemStore, InMemoryNotificationSink,
};
use super::traits::{BaseAccountDirectory, BaseAuditTrail, BaseItemStore, BaseNotificationSink};

/// Default base for partner dashboard URLs when none is configured.
pub const DEFAULT_DASHBOARD_BASE_URL: &str = "https://partners.marketplace.example";

/// Dependencies accessible to domain actions.
#[derive(Clone)]
pub struct ServerDeps {
    pub items: Arc<dyn BaseItemStore>,
    pub accounts: Arc<dyn BaseAccountDirectory>,
    pub notifications: Arc<dyn BaseNotificationSink>,
    pub audit: Arc<dyn BaseAuditTrail>,
    /// Base URL the role-scoped dashboard paths are appended to.
    pub dashboard_base_url: String,
}

impl ServerDeps {
    pub fn new(
        items: Arc<dyn BaseItemStore>,
        accounts: Arc<dyn BaseAccountDirectory>,
        notifications: Arc<dyn BaseNotificationSink>,
        audit: Arc<dyn BaseAuditTrail>,
        dashboard_base_url: impl Into<String>,
    ) -> Self {
        Self {
            items,
            accounts,
            notifications,
            audit,
            dashboard_base_url: dashboard_base_url.into(),
        }
    }

    /// Fully in-memory wiring. The persistence substrate is out of scope
    /// for this core, so this is both the default and the test wiring.
    pub fn in_memory(dashboard_base_url: impl Into<String>) -> Self {
        Self::new(
            Arc::new(InMemoryItemStore::new()),
            Arc::new(InMemoryAccountDirectory::new()),
            Arc::new(InMemoryNotificationSink::new()),
            Arc::new(InMemoryAuditTrail::new()),
            dashboard_base_url,
        )
    }
}
