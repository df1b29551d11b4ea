// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic. Business rules
// (what a transition requires, who gets an account) live in domain actions
// that use these traits.
//
// Naming convention: Base* for trait names (e.g., BaseItemStore)

use anyhow::Result;
use async_trait::async_trait;
use thiserror::Error;

use crate::common::ItemId;
use crate::domains::accounts::models::BusinessAccount;
use crate::domains::audit::models::AuditLogEntry;
use crate::domains::moderation::models::{ApprovableItem, ReviewDecision, TransitionResult};
use crate::domains::notifications::models::Notification;

// =============================================================================
// Approvable Item Store (Infrastructure - abstract keyed store)
// =============================================================================

/// Keyed store for approvable items.
///
/// The concrete substrate (in-memory map, file, database) is deliberately
/// unspecified; the workflow only needs these operations, and in particular
/// the compare-and-set in [`complete_review`](BaseItemStore::complete_review)
/// so that a given item has a single logical writer.
#[async_trait]
pub trait BaseItemStore: Send + Sync {
    /// Insert a new item. IDs are caller-generated (UUID v7).
    async fn insert(&self, item: ApprovableItem) -> Result<()>;

    /// Fetch an item by id.
    async fn get(&self, id: ItemId) -> Result<Option<ApprovableItem>>;

    /// All items, unordered. The read side filters and sorts.
    async fn list(&self) -> Result<Vec<ApprovableItem>>;

    /// Atomically assert the item is `pending_approval` and apply the
    /// decision. Two concurrent calls for the same id must yield exactly
    /// one `Updated`.
    async fn complete_review(
        &self,
        id: ItemId,
        decision: ReviewDecision,
    ) -> Result<TransitionResult>;
}

// =============================================================================
// Account Directory (Infrastructure)
// =============================================================================

/// Errors from the account directory.
#[derive(Error, Debug)]
pub enum DirectoryError {
    /// An account already exists for this email. The check is atomic with
    /// creation: two simultaneous creates for one email cannot both win.
    #[error("account already exists for {email}")]
    Duplicate { email: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Directory of provisioned business accounts, keyed by email.
#[async_trait]
pub trait BaseAccountDirectory: Send + Sync {
    /// Create an account, failing with [`DirectoryError::Duplicate`] if the
    /// email is already taken.
    async fn create(&self, account: BusinessAccount) -> Result<BusinessAccount, DirectoryError>;

    /// Look up an account by email.
    async fn find_by_email(&self, email: &str) -> Result<Option<BusinessAccount>>;
}

// =============================================================================
// Notification Sink (Infrastructure)
// =============================================================================

/// Append-only notification sink.
#[async_trait]
pub trait BaseNotificationSink: Send + Sync {
    /// Append a notification record.
    async fn append(&self, notification: Notification) -> Result<Notification>;

    /// All recorded notifications, oldest first.
    async fn list(&self) -> Result<Vec<Notification>>;
}

// =============================================================================
// Audit Trail (Infrastructure)
// =============================================================================

/// Append-only, immutable audit trail.
#[async_trait]
pub trait BaseAuditTrail: Send + Sync {
    /// Append an entry. Entries are never mutated or deleted.
    async fn append(&self, entry: AuditLogEntry) -> Result<AuditLogEntry>;

    /// Most-recent-first read, capped at `limit`.
    async fn recent(&self, limit: usize) -> Result<Vec<AuditLogEntry>>;
}
