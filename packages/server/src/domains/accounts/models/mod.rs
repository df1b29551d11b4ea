pub mod account;

pub use account::{AccountRole, BusinessAccount, ProvisionedAccount};
