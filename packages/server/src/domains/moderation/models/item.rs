//! Approvable item model - the envelope every moderated submission shares.
//!
//! Three otherwise-unrelated marketplace objects (partner registrations,
//! real-estate listings, delivery packages) go through the same review
//! lifecycle. The envelope carries the workflow fields; everything
//! kind-specific lives in the tagged [`ItemPayload`] union.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{Actor, ItemId, RequesterId, ReviewerId};

// ============================================================================
// Status / kind enums
// ============================================================================

/// Item status enum for type-safe querying
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    /// Draft items are never surfaced to reviewers.
    Draft,
    PendingApproval,
    Approved,
    Rejected,
}

impl ItemStatus {
    /// Approved and Rejected are terminal for the review workflow.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ItemStatus::Approved | ItemStatus::Rejected)
    }
}

impl std::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemStatus::Draft => write!(f, "draft"),
            ItemStatus::PendingApproval => write!(f, "pending_approval"),
            ItemStatus::Approved => write!(f, "approved"),
            ItemStatus::Rejected => write!(f, "rejected"),
        }
    }
}

impl std::str::FromStr for ItemStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "draft" => Ok(ItemStatus::Draft),
            "pending_approval" => Ok(ItemStatus::PendingApproval),
            "approved" => Ok(ItemStatus::Approved),
            "rejected" => Ok(ItemStatus::Rejected),
            _ => Err(anyhow::anyhow!("Invalid item status: {}", s)),
        }
    }
}

/// The three moderated item kinds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    PartnerRegistration,
    RealEstateListing,
    DeliveryPackage,
}

impl ItemKind {
    /// Audit action string for a review outcome, e.g.
    /// `PARTNER_REGISTRATION_APPROVED` or `DELIVERY_PACKAGE_REJECTED`.
    pub fn audit_action(&self, outcome: ReviewOutcome) -> String {
        let kind = match self {
            ItemKind::PartnerRegistration => "PARTNER_REGISTRATION",
            ItemKind::RealEstateListing => "REAL_ESTATE_LISTING",
            ItemKind::DeliveryPackage => "DELIVERY_PACKAGE",
        };
        let outcome = match outcome {
            ReviewOutcome::Approved => "APPROVED",
            ReviewOutcome::Rejected => "REJECTED",
        };
        format!("{}_{}", kind, outcome)
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemKind::PartnerRegistration => write!(f, "partner_registration"),
            ItemKind::RealEstateListing => write!(f, "real_estate_listing"),
            ItemKind::DeliveryPackage => write!(f, "delivery_package"),
        }
    }
}

impl std::str::FromStr for ItemKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "partner_registration" => Ok(ItemKind::PartnerRegistration),
            "real_estate_listing" => Ok(ItemKind::RealEstateListing),
            "delivery_package" => Ok(ItemKind::DeliveryPackage),
            _ => Err(anyhow::anyhow!("Invalid item kind: {}", s)),
        }
    }
}

/// Who submitted the item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RequesterType {
    Individual,
    Business,
}

/// Declared line of business on a partner registration. Drives the role
/// (and dashboard) the provisioned account gets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BusinessType {
    RealEstate,
    Delivery,
    General,
}

// ============================================================================
// Payload
// ============================================================================

/// Kind-specific fields, opaque to the workflow except where a rule reads
/// them (registration contact details feed account provisioning).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemPayload {
    PartnerRegistration {
        company_name: String,
        contact_email: String,
        contact_phone: Option<String>,
        business_type: BusinessType,
    },
    RealEstateListing {
        title: String,
        address: String,
        price_krw: i64,
        floor_area_sqm: Option<f64>,
        description: Option<String>,
    },
    DeliveryPackage {
        title: String,
        base_fee_krw: i64,
        per_km_fee_krw: i64,
        /// Allocated by the category-code service at creation time.
        category_code: String,
        description: Option<String>,
    },
}

impl ItemPayload {
    pub fn kind(&self) -> ItemKind {
        match self {
            ItemPayload::PartnerRegistration { .. } => ItemKind::PartnerRegistration,
            ItemPayload::RealEstateListing { .. } => ItemKind::RealEstateListing,
            ItemPayload::DeliveryPackage { .. } => ItemKind::DeliveryPackage,
        }
    }

    /// Display title used by the review queue and free-text search.
    pub fn title(&self) -> &str {
        match self {
            ItemPayload::PartnerRegistration { company_name, .. } => company_name,
            ItemPayload::RealEstateListing { title, .. } => title,
            ItemPayload::DeliveryPackage { title, .. } => title,
        }
    }
}

// ============================================================================
// Item envelope
// ============================================================================

/// An item awaiting (or past) moderation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApprovableItem {
    pub id: ItemId,
    pub status: ItemStatus,

    // Submitter
    pub requester_id: RequesterId,
    pub requester_name: String,
    pub requester_type: RequesterType,

    // Review workflow
    pub reviewed_by: Option<ReviewerId>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub rejection_reason: Option<String>,

    // Timestamps
    pub submitted_at: DateTime<Utc>,
    pub last_updated_at: DateTime<Utc>,

    pub payload: ItemPayload,
}

impl ApprovableItem {
    /// Create a new item awaiting review.
    pub fn new_pending(
        requester_id: RequesterId,
        requester_name: impl Into<String>,
        requester_type: RequesterType,
        payload: ItemPayload,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: ItemId::new(),
            status: ItemStatus::PendingApproval,
            requester_id,
            requester_name: requester_name.into(),
            requester_type,
            reviewed_by: None,
            reviewed_at: None,
            rejection_reason: None,
            submitted_at: now,
            last_updated_at: now,
            payload,
        }
    }

    /// Create a draft that reviewers never see.
    pub fn new_draft(
        requester_id: RequesterId,
        requester_name: impl Into<String>,
        requester_type: RequesterType,
        payload: ItemPayload,
    ) -> Self {
        let mut item = Self::new_pending(requester_id, requester_name, requester_type, payload);
        item.status = ItemStatus::Draft;
        item
    }

    pub fn kind(&self) -> ItemKind {
        self.payload.kind()
    }

    pub fn is_pending(&self) -> bool {
        self.status == ItemStatus::PendingApproval
    }

    /// Apply a review decision in place. Callers (the store CAS) must have
    /// already asserted the item is pending.
    pub fn apply_decision(&mut self, decision: &ReviewDecision) {
        self.status = match decision.outcome {
            ReviewOutcome::Approved => ItemStatus::Approved,
            ReviewOutcome::Rejected => ItemStatus::Rejected,
        };
        self.reviewed_by = Some(decision.actor.id);
        self.reviewed_at = Some(decision.decided_at);
        self.last_updated_at = decision.decided_at;
        self.rejection_reason = decision.rejection_reason.clone();
    }
}

// ============================================================================
// Review decisions (input to the store CAS)
// ============================================================================

/// The two ways out of `pending_approval`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReviewOutcome {
    Approved,
    Rejected,
}

/// A fully validated review decision, ready to be applied atomically.
#[derive(Debug, Clone)]
pub struct ReviewDecision {
    pub outcome: ReviewOutcome,
    pub actor: Actor,
    /// Already trimmed and length-checked; `Some` iff rejecting.
    pub rejection_reason: Option<String>,
    pub decided_at: DateTime<Utc>,
}

impl ReviewDecision {
    pub fn approve(actor: Actor) -> Self {
        Self {
            outcome: ReviewOutcome::Approved,
            actor,
            rejection_reason: None,
            decided_at: Utc::now(),
        }
    }

    pub fn reject(actor: Actor, trimmed_reason: String) -> Self {
        Self {
            outcome: ReviewOutcome::Rejected,
            actor,
            rejection_reason: Some(trimmed_reason),
            decided_at: Utc::now(),
        }
    }
}

/// Result of the store's compare-and-set review transition.
#[derive(Debug, Clone)]
pub enum TransitionResult {
    /// The item was pending and the decision was applied.
    Updated(ApprovableItem),
    /// The item exists but is not pending; carries the current status.
    NotPending(ItemStatus),
    /// No item with that id.
    Missing,
}
