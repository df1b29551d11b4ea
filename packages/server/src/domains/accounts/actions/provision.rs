//! Business-account provisioning for approved partner registrations.

use chrono::Utc;
use rand::distributions::Alphanumeric;
use rand::rngs::OsRng;
use rand::Rng;
use thiserror::Error;
use tracing::info;

use crate::common::AccountId;
use crate::domains::accounts::models::{AccountRole, BusinessAccount, ProvisionedAccount};
use crate::domains::moderation::models::{ApprovableItem, ItemPayload};
use crate::kernel::{DirectoryError, ServerDeps};

/// Length of generated temporary passwords.
const TEMP_PASSWORD_CHARS: usize = 16;

#[derive(Error, Debug)]
pub enum ProvisionError {
    /// An account already exists for the derived email. Reviewer-visible
    /// and recoverable; the approval itself stands.
    #[error("an account already exists for {email}")]
    DuplicateAccount { email: String },

    /// The item's payload is not a partner registration.
    #[error("item {item_id} is a {kind}, which does not get an account")]
    NotARegistration { item_id: String, kind: String },

    #[error("account directory error: {0}")]
    Directory(#[from] anyhow::Error),
}

/// Provision a business account from an approved partner registration.
///
/// Derives email, company name, and role from the registration payload;
/// generates a single-display temporary password; and creates the account
/// record. The duplicate-email check is atomic with creation inside the
/// directory.
pub async fn provision_account(
    item: &ApprovableItem,
    deps: &ServerDeps,
) -> Result<ProvisionedAccount, ProvisionError> {
    let ItemPayload::PartnerRegistration {
        company_name,
        contact_email,
        business_type,
        ..
    } = &item.payload
    else {
        return Err(ProvisionError::NotARegistration {
            item_id: item.id.to_string(),
            kind: item.kind().to_string(),
        });
    };

    let role = AccountRole::from_business_type(*business_type);
    let account = BusinessAccount {
        id: AccountId::new(),
        email: contact_email.clone(),
        company_name: company_name.clone(),
        role,
        dashboard_url: format!("{}/dashboard/{}", deps.dashboard_base_url, role.dashboard_path()),
        source_item_id: item.id,
        created_at: Utc::now(),
    };

    let account = deps
        .accounts
        .create(account)
        .await
        .map_err(|e| match e {
            DirectoryError::Duplicate { email } => ProvisionError::DuplicateAccount { email },
            DirectoryError::Other(e) => ProvisionError::Directory(e),
        })?;

    // The password is minted after the record exists and handed straight
    // back to the caller. It must not appear in any log or audit entry.
    let temp_password = generate_temp_password();

    info!(
        account_id = %account.id,
        email = %account.email,
        role = %account.role,
        "Business account provisioned"
    );

    Ok(ProvisionedAccount {
        account,
        temp_password,
    })
}

/// Generate a temporary password from the OS CSPRNG.
pub(crate) fn generate_temp_password() -> String {
    OsRng
        .sample_iter(&Alphanumeric)
        .take(TEMP_PASSWORD_CHARS)
        .map(char::from)
        .collect()
}
