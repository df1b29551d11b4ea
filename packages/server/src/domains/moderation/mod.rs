//! Moderation domain: the approval workflow engine.
//!
//! One generic review workflow covers all three item kinds; kind-specific
//! side effects hang off the payload variant, not off parallel code paths.

pub mod actions;
pub mod models;
pub mod validation;

pub use actions::{
    approve_item, list_items, reject_item, submit_item, ApprovalOutcome, ItemFilter,
    ProvisioningOutcome, SubmitItemInput, WorkflowError,
};
pub use models::{ApprovableItem, ItemKind, ItemStatus};
pub use validation::{validate_rejection_reason, ValidationError, MIN_REJECTION_REASON_CHARS};
