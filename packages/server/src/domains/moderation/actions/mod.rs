pub mod mutations;
pub mod queries;

pub use mutations::{
    approve_item, reject_item, submit_item, ApprovalOutcome, ProvisioningOutcome, SubmitItemInput,
    WorkflowError,
};
pub use queries::{list_items, pending_count, ItemFilter};
