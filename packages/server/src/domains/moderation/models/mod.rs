pub mod item;

pub use item::{
    ApprovableItem, BusinessType, ItemKind, ItemPayload, ItemStatus, RequesterType,
    ReviewDecision, ReviewOutcome, TransitionResult,
};
