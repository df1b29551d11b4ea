//! Marketplace back office core.
//!
//! Partner registrations, real-estate listings, and delivery packages all
//! pass human moderation before becoming publicly visible. This crate owns
//! the review workflow (pending → approved/rejected), the side effects an
//! approval triggers (business-account provisioning, partner notification,
//! audit trail), and the read side reviewers page through.
//!
//! Layout follows the usual split:
//! - [`common`] — typed IDs, actor identity, pagination
//! - [`kernel`] — infrastructure traits, in-memory stores, `ServerDeps`
//! - [`domains`] — moderation, accounts, notifications, audit
//! - [`server`] — axum application (config, routes, main)

pub mod common;
pub mod domains;
pub mod kernel;
pub mod server;
