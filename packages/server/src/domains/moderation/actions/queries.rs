//! Moderation queue queries
//!
//! Read side for reviewer dashboards: filter, search, paginate. No
//! mutation capability lives here.

use anyhow::Result;

use crate::common::{Page, RequesterId, ValidatedPageArgs};
use crate::domains::moderation::models::{ApprovableItem, ItemKind, ItemStatus};
use crate::kernel::ServerDeps;

/// Filter for the moderation queue.
///
/// `status` defaults to pending approval - the operationally relevant
/// default for a review queue. Draft items are excluded no matter what.
#[derive(Debug, Clone, Default)]
pub struct ItemFilter {
    pub kind: Option<ItemKind>,
    pub status: Option<ItemStatus>,
    pub requester_id: Option<RequesterId>,
    /// Case-insensitive free text over requester name and item title.
    pub q: Option<String>,
}

impl ItemFilter {
    fn matches(&self, item: &ApprovableItem) -> bool {
        // Drafts never reach reviewers, even when asked for explicitly.
        if item.status == ItemStatus::Draft {
            return false;
        }

        let status = self.status.unwrap_or(ItemStatus::PendingApproval);
        if item.status != status {
            return false;
        }
        if let Some(kind) = self.kind {
            if item.kind() != kind {
                return false;
            }
        }
        if let Some(requester_id) = self.requester_id {
            if item.requester_id != requester_id {
                return false;
            }
        }
        if let Some(q) = &self.q {
            let q = q.to_lowercase();
            let in_name = item.requester_name.to_lowercase().contains(&q);
            let in_title = item.payload.title().to_lowercase().contains(&q);
            if !(in_name || in_title) {
                return false;
            }
        }
        true
    }
}

/// List items for the review queue, newest submissions first.
pub async fn list_items(
    filter: &ItemFilter,
    page_args: ValidatedPageArgs,
    deps: &ServerDeps,
) -> Result<Page<ApprovableItem>> {
    let mut matched: Vec<ApprovableItem> = deps
        .items
        .list()
        .await?
        .into_iter()
        .filter(|item| filter.matches(item))
        .collect();

    // V7 ids are time-ordered; they break ties between equal timestamps.
    matched.sort_by(|a, b| {
        b.submitted_at
            .cmp(&a.submitted_at)
            .then_with(|| b.id.cmp(&a.id))
    });

    Ok(Page::from_filtered(matched, page_args))
}

/// Count pending items, for the health endpoint's queue-depth gauge.
pub async fn pending_count(deps: &ServerDeps) -> Result<usize> {
    Ok(deps
        .items
        .list()
        .await?
        .iter()
        .filter(|item| item.status == ItemStatus::PendingApproval)
        .count())
}
