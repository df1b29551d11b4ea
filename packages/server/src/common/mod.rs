// Common types and utilities shared across the application

pub mod actor;
pub mod entity_ids;
pub mod id;
pub mod pagination;

pub use actor::Actor;
pub use entity_ids::*;
pub use id::{Id, V4, V7};
pub use pagination::{Page, PageArgs, ValidatedPageArgs, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
