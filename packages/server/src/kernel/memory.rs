//! In-memory implementations of the infrastructure traits.
//!
//! The persistence substrate is out of scope for this core; these
//! mutex-guarded maps are the shipped substrate and double as the test
//! substrate. The locking discipline matters more than the containers:
//! `complete_review` and `create` hold the lock across their
//! assert-and-write, which is what makes the CAS contracts hold.

use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;

use crate::common::ItemId;
use crate::domains::accounts::models::BusinessAccount;
use crate::domains::audit::models::AuditLogEntry;
use crate::domains::moderation::models::{
    ApprovableItem, ItemStatus, ReviewDecision, TransitionResult,
};
use crate::domains::notifications::models::Notification;

use super::traits::{
    BaseAccountDirectory, BaseAuditTrail, BaseItemStore, BaseNotificationSink, DirectoryError,
};

// =============================================================================
// Item store
// =============================================================================

#[derive(Default)]
pub struct InMemoryItemStore {
    items: Mutex<HashMap<ItemId, ApprovableItem>>,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseItemStore for InMemoryItemStore {
    async fn insert(&self, item: ApprovableItem) -> Result<()> {
        let mut items = self.items.lock().unwrap();
        items.insert(item.id, item);
        Ok(())
    }

    async fn get(&self, id: ItemId) -> Result<Option<ApprovableItem>> {
        let items = self.items.lock().unwrap();
        Ok(items.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<ApprovableItem>> {
        let items = self.items.lock().unwrap();
        Ok(items.values().cloned().collect())
    }

    async fn complete_review(
        &self,
        id: ItemId,
        decision: ReviewDecision,
    ) -> Result<TransitionResult> {
        let mut items = self.items.lock().unwrap();
        let Some(item) = items.get_mut(&id) else {
            return Ok(TransitionResult::Missing);
        };
        if item.status != ItemStatus::PendingApproval {
            return Ok(TransitionResult::NotPending(item.status));
        }
        item.apply_decision(&decision);
        Ok(TransitionResult::Updated(item.clone()))
    }
}

// =============================================================================
// Account directory
// =============================================================================

#[derive(Default)]
pub struct InMemoryAccountDirectory {
    // Keyed by lowercased email; the duplicate check is case-insensitive.
    accounts: Mutex<HashMap<String, BusinessAccount>>,
}

impl InMemoryAccountDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of accounts ever created. Test-facing.
    pub fn len(&self) -> usize {
        self.accounts.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl BaseAccountDirectory for InMemoryAccountDirectory {
    async fn create(&self, account: BusinessAccount) -> Result<BusinessAccount, DirectoryError> {
        let mut accounts = self.accounts.lock().unwrap();
        let key = account.email.to_lowercase();
        if accounts.contains_key(&key) {
            return Err(DirectoryError::Duplicate {
                email: account.email,
            });
        }
        accounts.insert(key, account.clone());
        Ok(account)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<BusinessAccount>> {
        let accounts = self.accounts.lock().unwrap();
        Ok(accounts.get(&email.to_lowercase()).cloned())
    }
}

// =============================================================================
// Notification sink
// =============================================================================

#[derive(Default)]
pub struct InMemoryNotificationSink {
    notifications: Mutex<Vec<Notification>>,
}

impl InMemoryNotificationSink {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseNotificationSink for InMemoryNotificationSink {
    async fn append(&self, notification: Notification) -> Result<Notification> {
        let mut notifications = self.notifications.lock().unwrap();
        notifications.push(notification.clone());
        Ok(notification)
    }

    async fn list(&self) -> Result<Vec<Notification>> {
        let notifications = self.notifications.lock().unwrap();
        Ok(notifications.clone())
    }
}

// =============================================================================
// Audit trail
// =============================================================================

#[derive(Default)]
pub struct InMemoryAuditTrail {
    entries: Mutex<Vec<AuditLogEntry>>,
}

impl InMemoryAuditTrail {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseAuditTrail for InMemoryAuditTrail {
    async fn append(&self, entry: AuditLogEntry) -> Result<AuditLogEntry> {
        let mut entries = self.entries.lock().unwrap();
        entries.push(entry.clone());
        Ok(entry)
    }

    async fn recent(&self, limit: usize) -> Result<Vec<AuditLogEntry>> {
        let entries = self.entries.lock().unwrap();
        Ok(entries.iter().rev().take(limit).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{Actor, RequesterId, ReviewerId};
    use crate::domains::moderation::models::{ItemPayload, RequesterType};

    fn pending_item() -> ApprovableItem {
        ApprovableItem::new_pending(
            RequesterId::new(),
            "Lee Sujin",
            RequesterType::Business,
            ItemPayload::DeliveryPackage {
                title: "Same-day city parcel".to_string(),
                base_fee_krw: 3500,
                per_km_fee_krw: 500,
                category_code: "DP-01-003".to_string(),
                description: None,
            },
        )
    }

    #[tokio::test]
    async fn complete_review_applies_only_once() {
        let store = InMemoryItemStore::new();
        let item = pending_item();
        let id = item.id;
        store.insert(item).await.unwrap();

        let actor = Actor::new(ReviewerId::new(), "reviewer");
        let first = store
            .complete_review(id, ReviewDecision::approve(actor.clone()))
            .await
            .unwrap();
        assert!(matches!(first, TransitionResult::Updated(_)));

        let second = store
            .complete_review(id, ReviewDecision::approve(actor))
            .await
            .unwrap();
        assert!(matches!(
            second,
            TransitionResult::NotPending(ItemStatus::Approved)
        ));
    }

    #[tokio::test]
    async fn complete_review_reports_missing_items() {
        let store = InMemoryItemStore::new();
        let result = store
            .complete_review(
                ItemId::new(),
                ReviewDecision::approve(Actor::new(ReviewerId::new(), "reviewer")),
            )
            .await
            .unwrap();
        assert!(matches!(result, TransitionResult::Missing));
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected_case_insensitively() {
        use crate::common::{AccountId, ItemId};
        use crate::domains::accounts::models::{AccountRole, BusinessAccount};
        use chrono::Utc;

        let directory = InMemoryAccountDirectory::new();
        let account = BusinessAccount {
            id: AccountId::new(),
            email: "owner@seoulrealty.com".to_string(),
            company_name: "Seoul Realty Co".to_string(),
            role: AccountRole::RealEstatePartner,
            dashboard_url: "/dashboard/realty".to_string(),
            source_item_id: ItemId::new(),
            created_at: Utc::now(),
        };
        directory.create(account.clone()).await.unwrap();

        let mut duplicate = account;
        duplicate.email = "Owner@SeoulRealty.com".to_string();
        let err = directory.create(duplicate).await.unwrap_err();
        assert!(matches!(err, DirectoryError::Duplicate { .. }));
        assert_eq!(directory.len(), 1);
    }

    #[tokio::test]
    async fn audit_trail_reads_most_recent_first() {
        use crate::domains::moderation::models::ReviewOutcome;

        let trail = InMemoryAuditTrail::new();
        let actor = Actor::new(ReviewerId::new(), "reviewer");
        for _ in 0..3 {
            let mut item = pending_item();
            item.apply_decision(&ReviewDecision::approve(actor.clone()));
            trail
                .append(AuditLogEntry::for_review(&item, ReviewOutcome::Approved, &actor))
                .await
                .unwrap();
        }

        let recent = trail.recent(2).await.unwrap();
        assert_eq!(recent.len(), 2);
        assert!(recent[0].timestamp >= recent[1].timestamp);
    }
}
