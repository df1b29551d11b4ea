//! Typed ID aliases for all back-office entities.
//!
//! Each alias is incompatible with the others at compile time, so an
//! `ItemId` can never be handed to something expecting a `ReviewerId`.

pub use super::id::{Id, V4, V7};

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for approvable items (registrations, listings, packages).
pub struct ApprovableItemEntity;

/// Marker type for the partner/member who submitted an item.
pub struct RequesterEntity;

/// Marker type for back-office reviewers.
pub struct ReviewerEntity;

/// Marker type for provisioned business accounts.
pub struct BusinessAccountEntity;

/// Marker type for partner notifications.
pub struct NotificationEntity;

/// Marker type for audit log entries.
pub struct AuditEntryEntity;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

/// Typed ID for approvable items.
pub type ItemId = Id<ApprovableItemEntity>;

/// Typed ID for requesters (submitting partners).
pub type RequesterId = Id<RequesterEntity>;

/// Typed ID for reviewers.
pub type ReviewerId = Id<ReviewerEntity>;

/// Typed ID for business accounts.
pub type AccountId = Id<BusinessAccountEntity>;

/// Typed ID for notifications.
pub type NotificationId = Id<NotificationEntity>;

/// Typed ID for audit log entries.
pub type AuditEntryId = Id<AuditEntryEntity>;
