//! Reviewer identity attached to moderation decisions.

use serde::{Deserialize, Serialize};

use super::ReviewerId;

/// The human (or service) performing a review action.
///
/// Authentication is handled outside this core; callers hand us an
/// already-resolved identity, which flows into `reviewed_by` and the
/// audit trail.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Actor {
    pub id: ReviewerId,
    pub name: String,
}

impl Actor {
    pub fn new(id: ReviewerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl std::fmt::Display for Actor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
