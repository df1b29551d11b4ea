//! Review workflow actions
//!
//! All review write operations go through these actions. Actions are
//! self-contained: they check preconditions in a fixed order, apply the
//! state change through the store's compare-and-set, and then run the
//! kind-specific side effects.
//!
//! Ordering contract for a transition:
//! 1. compare-and-set the status (durable before anything else)
//! 2. append exactly one audit entry for the decision
//! 3. approved partner registrations only: provision an account, then
//!    dispatch a best-effort notification to the new account's email
//!
//! A provisioning failure after step 1 is a *partial success*: the
//! decision stands, the caller gets the failure alongside the approved
//! item and can retry provisioning without re-approving.

use thiserror::Error;
use tracing::{info, warn};

use crate::common::{Actor, ItemId, RequesterId};
use crate::domains::accounts::actions::{provision_account, ProvisionError};
use crate::domains::accounts::models::ProvisionedAccount;
use crate::domains::audit::{self, models::AuditLogEntry};
use crate::domains::moderation::models::{
    ApprovableItem, ItemKind, ItemPayload, ItemStatus, RequesterType, ReviewDecision,
    ReviewOutcome, TransitionResult,
};
use crate::domains::moderation::validation::{validate_rejection_reason, ValidationError};
use crate::domains::notifications::{self, models::Notification};
use crate::kernel::ServerDeps;

// ============================================================================
// Errors and outcomes
// ============================================================================

#[derive(Error, Debug)]
pub enum WorkflowError {
    #[error("item not found: {0}")]
    NotFound(ItemId),

    /// The item exists but is not pending review. A reviewer double-click
    /// surfaces here instead of silently succeeding.
    #[error("item {id} is {current}, expected pending_approval")]
    InvalidState { id: ItemId, current: ItemStatus },

    #[error(transparent)]
    InvalidReason(#[from] ValidationError),

    #[error("store error: {0}")]
    Store(#[from] anyhow::Error),
}

/// What happened to account provisioning during an approval.
#[derive(Debug)]
pub enum ProvisioningOutcome {
    /// Item kind has no account side effect.
    NotRequired,
    /// Account created; the temporary password inside is shown once and
    /// never stored.
    Provisioned(ProvisionedAccount),
    /// The approval is durable but onboarding is incomplete. Recoverable:
    /// provisioning can be retried without re-approving.
    Failed(ProvisionError),
}

/// Result of a successful approval, including any partial-success detail.
#[derive(Debug)]
pub struct ApprovalOutcome {
    pub item: ApprovableItem,
    pub provisioning: ProvisioningOutcome,
}

// ============================================================================
// Submission (consumed from collaborators)
// ============================================================================

/// Input for submitting a new approvable item.
#[derive(Debug, Clone)]
pub struct SubmitItemInput {
    pub requester_id: RequesterId,
    pub requester_name: String,
    pub requester_type: RequesterType,
    pub payload: ItemPayload,
    /// Drafts are stored but never surfaced to reviewers.
    pub as_draft: bool,
}

/// Create a new item (goes to pending_approval, or draft if requested).
pub async fn submit_item(
    input: SubmitItemInput,
    deps: &ServerDeps,
) -> Result<ApprovableItem, WorkflowError> {
    let item = if input.as_draft {
        ApprovableItem::new_draft(
            input.requester_id,
            input.requester_name,
            input.requester_type,
            input.payload,
        )
    } else {
        ApprovableItem::new_pending(
            input.requester_id,
            input.requester_name,
            input.requester_type,
            input.payload,
        )
    };

    deps.items.insert(item.clone()).await?;

    info!(
        item_id = %item.id,
        kind = %item.kind(),
        status = %item.status,
        "Item submitted"
    );

    Ok(item)
}

// ============================================================================
// Approve
// ============================================================================

/// Approve a pending item.
///
/// Returns the updated item plus the provisioning outcome for partner
/// registrations. Errors leave the item untouched.
pub async fn approve_item(
    item_id: ItemId,
    actor: Actor,
    deps: &ServerDeps,
) -> Result<ApprovalOutcome, WorkflowError> {
    info!(item_id = %item_id, reviewed_by = %actor.id, "Approving item");

    let decision = ReviewDecision::approve(actor.clone());
    let item = apply_transition(item_id, decision, deps).await?;

    audit::record(
        AuditLogEntry::for_review(&item, ReviewOutcome::Approved, &actor),
        deps,
    )
    .await;

    let provisioning = match item.kind() {
        ItemKind::PartnerRegistration => match provision_account(&item, deps).await {
            Ok(provisioned) => {
                notifications::dispatch(
                    Notification::account_approved(
                        provisioned.account.email.clone(),
                        &provisioned.account.company_name,
                    ),
                    deps,
                )
                .await;
                ProvisioningOutcome::Provisioned(provisioned)
            }
            Err(e) => {
                // The approval is already durable; report, don't roll back.
                warn!(
                    item_id = %item.id,
                    error = %e,
                    "Approval recorded but account provisioning failed"
                );
                ProvisioningOutcome::Failed(e)
            }
        },
        ItemKind::RealEstateListing | ItemKind::DeliveryPackage => {
            ProvisioningOutcome::NotRequired
        }
    };

    info!(item_id = %item.id, "Item approved");

    Ok(ApprovalOutcome { item, provisioning })
}

// ============================================================================
// Reject
// ============================================================================

/// Reject a pending item with a reason.
///
/// Precondition order (first failure wins): item exists, item is pending,
/// reason passes validation. The reason is stored trimmed.
pub async fn reject_item(
    item_id: ItemId,
    reason: &str,
    actor: Actor,
    deps: &ServerDeps,
) -> Result<ApprovableItem, WorkflowError> {
    info!(item_id = %item_id, reviewed_by = %actor.id, "Rejecting item");

    // Existence and state are checked before the reason so that NOT_FOUND
    // and INVALID_STATE win over TOO_SHORT. The CAS below re-asserts the
    // state; this read is only for error ordering.
    let current = deps
        .items
        .get(item_id)
        .await?
        .ok_or(WorkflowError::NotFound(item_id))?;
    if !current.is_pending() {
        return Err(WorkflowError::InvalidState {
            id: item_id,
            current: current.status,
        });
    }

    let trimmed = validate_rejection_reason(reason)?;

    let decision = ReviewDecision::reject(actor.clone(), trimmed);
    let item = apply_transition(item_id, decision, deps).await?;

    audit::record(
        AuditLogEntry::for_review(&item, ReviewOutcome::Rejected, &actor),
        deps,
    )
    .await;

    info!(item_id = %item.id, "Item rejected");

    Ok(item)
}

// ============================================================================
// Shared transition plumbing
// ============================================================================

/// Run the store CAS and map its result into workflow errors.
async fn apply_transition(
    item_id: ItemId,
    decision: ReviewDecision,
    deps: &ServerDeps,
) -> Result<ApprovableItem, WorkflowError> {
    match deps.items.complete_review(item_id, decision).await? {
        TransitionResult::Updated(item) => Ok(item),
        TransitionResult::NotPending(current) => Err(WorkflowError::InvalidState {
            id: item_id,
            current,
        }),
        TransitionResult::Missing => Err(WorkflowError::NotFound(item_id)),
    }
}
