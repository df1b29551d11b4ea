pub mod accounts;
pub mod audit;
pub mod moderation;
pub mod notifications;
