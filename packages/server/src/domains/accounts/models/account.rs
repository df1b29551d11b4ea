//! Business account model - the record provisioned when a partner
//! registration is approved.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{AccountId, ItemId};
use crate::domains::moderation::models::BusinessType;

/// Role assigned to a provisioned account, derived from the declared
/// business type on the registration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AccountRole {
    RealEstatePartner,
    DeliveryPartner,
    GeneralPartner,
}

impl AccountRole {
    pub fn from_business_type(business_type: BusinessType) -> Self {
        match business_type {
            BusinessType::RealEstate => AccountRole::RealEstatePartner,
            BusinessType::Delivery => AccountRole::DeliveryPartner,
            BusinessType::General => AccountRole::GeneralPartner,
        }
    }

    /// Path segment of the role-scoped dashboard. Deterministic: the same
    /// role always lands on the same dashboard.
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            AccountRole::RealEstatePartner => "realty",
            AccountRole::DeliveryPartner => "delivery",
            AccountRole::GeneralPartner => "partner",
        }
    }
}

impl std::fmt::Display for AccountRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountRole::RealEstatePartner => write!(f, "real_estate_partner"),
            AccountRole::DeliveryPartner => write!(f, "delivery_partner"),
            AccountRole::GeneralPartner => write!(f, "general_partner"),
        }
    }
}

/// A provisioned business account.
///
/// Note what is absent: the temporary password. It travels once inside
/// [`ProvisionedAccount`] and is never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BusinessAccount {
    pub id: AccountId,
    pub email: String,
    pub company_name: String,
    pub role: AccountRole,
    pub dashboard_url: String,
    /// The registration this account was provisioned from.
    pub source_item_id: ItemId,
    pub created_at: DateTime<Utc>,
}

/// One-time return value of account provisioning.
///
/// The caller shows `temp_password` exactly once; this core never re-reads
/// or re-logs it.
#[derive(Debug, Clone)]
pub struct ProvisionedAccount {
    pub account: BusinessAccount,
    pub temp_password: String,
}
