//! Business accounts provisioned for approved partners.

pub mod actions;
pub mod models;

pub use actions::{provision_account, ProvisionError};
pub use models::{AccountRole, BusinessAccount, ProvisionedAccount};
