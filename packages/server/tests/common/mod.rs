//! Shared test harness for moderation integration tests.

#![allow(dead_code)]

use server_core::common::{Actor, RequesterId, ReviewerId};
use server_core::domains::moderation::actions::{submit_item, SubmitItemInput};
use server_core::domains::moderation::models::{
    ApprovableItem, BusinessType, ItemPayload, RequesterType,
};
use server_core::kernel::ServerDeps;

pub const DASHBOARD_BASE: &str = "https://partners.test";

/// Fresh in-memory dependency wiring for one test.
pub fn harness() -> ServerDeps {
    ServerDeps::in_memory(DASHBOARD_BASE)
}

/// A reviewer identity for tests.
pub fn reviewer(name: &str) -> Actor {
    Actor::new(ReviewerId::new(), name)
}

pub fn registration_payload(company: &str, email: &str, business_type: BusinessType) -> ItemPayload {
    ItemPayload::PartnerRegistration {
        company_name: company.to_string(),
        contact_email: email.to_string(),
        contact_phone: Some("02-555-0100".to_string()),
        business_type,
    }
}

pub fn listing_payload(title: &str) -> ItemPayload {
    ItemPayload::RealEstateListing {
        title: title.to_string(),
        address: "12 Teheran-ro, Gangnam-gu".to_string(),
        price_krw: 450_000_000,
        floor_area_sqm: Some(59.5),
        description: Some("South-facing, renovated kitchen".to_string()),
    }
}

pub fn package_payload(title: &str) -> ItemPayload {
    ItemPayload::DeliveryPackage {
        title: title.to_string(),
        base_fee_krw: 3500,
        per_km_fee_krw: 500,
        category_code: "DP-01-003".to_string(),
        description: None,
    }
}

/// Submit a pending item owned by a fresh requester.
pub async fn seed_pending(
    deps: &ServerDeps,
    requester_name: &str,
    payload: ItemPayload,
) -> ApprovableItem {
    submit_item(
        SubmitItemInput {
            requester_id: RequesterId::new(),
            requester_name: requester_name.to_string(),
            requester_type: RequesterType::Business,
            payload,
            as_draft: false,
        },
        deps,
    )
    .await
    .expect("Failed to seed pending item")
}

/// Submit a draft item (invisible to reviewers).
pub async fn seed_draft(
    deps: &ServerDeps,
    requester_name: &str,
    payload: ItemPayload,
) -> ApprovableItem {
    submit_item(
        SubmitItemInput {
            requester_id: RequesterId::new(),
            requester_name: requester_name.to_string(),
            requester_type: RequesterType::Business,
            payload,
            as_draft: true,
        },
        deps,
    )
    .await
    .expect("Failed to seed draft item")
}
