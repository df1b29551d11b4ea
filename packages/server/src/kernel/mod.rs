//! Infrastructure layer: trait definitions, in-memory substrates, and the
//! dependency container domain actions run against.

pub mod deps;
pub mod memory;
pub mod test_dependencies;
pub mod traits;

pub use deps::{ServerDeps, DEFAULT_DASHBOARD_BASE_URL};
pub use memory::{
    InMemoryAccountDirectory, InMemoryAuditTrail, InMemoryItemStore, InMemoryNotificationSink,
};
pub use traits::{
    BaseAccountDirectory, BaseAuditTrail, BaseItemStore, BaseNotificationSink, DirectoryError,
};
