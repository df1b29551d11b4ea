//! Account provisioning actions
//!
//! Runs as a side effect of approving a partner registration. The review
//! decision is already durable by the time we get here; a failure in this
//! module is reported as a partial success, never rolled back.

pub mod provision;

pub use provision::{provision_account, ProvisionError};
