pub mod health;
pub mod moderation;

pub use health::health_handler;
pub use moderation::{approve_handler, list_handler, reject_handler, submit_handler};
