//! Offset pagination for reviewer dashboards.
//!
//! The moderation queue is paged with `page`/`page_size` query params.
//! Raw arguments are validated once at the edge; domain code only ever
//! sees a [`ValidatedPageArgs`].

use serde::{Deserialize, Serialize};

/// Default page size when the caller does not specify one.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Hard cap on page size, regardless of what the caller asks for.
pub const MAX_PAGE_SIZE: u32 = 100;

// ============================================================================
// Arguments
// ============================================================================

/// Raw pagination arguments as they arrive from the caller.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageArgs {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl PageArgs {
    /// Normalize into validated arguments.
    ///
    /// `page` is 1-based and floors at 1; `page_size` is clamped to
    /// `1..=MAX_PAGE_SIZE` and defaults to [`DEFAULT_PAGE_SIZE`].
    pub fn validate(self) -> ValidatedPageArgs {
        let page = self.page.unwrap_or(1).max(1);
        let page_size = self
            .page_size
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE);
        ValidatedPageArgs { page, page_size }
    }
}

/// Pagination arguments after validation.
#[derive(Debug, Clone, Copy)]
pub struct ValidatedPageArgs {
    pub page: u32,
    pub page_size: u32,
}

impl ValidatedPageArgs {
    /// Number of records to skip before this page starts.
    pub fn offset(&self) -> usize {
        ((self.page - 1) as usize) * (self.page_size as usize)
    }
}

// ============================================================================
// Page
// ============================================================================

/// One page of results plus the total count across all pages.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: u32,
    pub page_size: u32,
}

impl<T> Page<T> {
    /// Slice a fully filtered, fully sorted result set into one page.
    pub fn from_filtered(filtered: Vec<T>, args: ValidatedPageArgs) -> Self {
        let total = filtered.len();
        let items = filtered
            .into_iter()
            .skip(args.offset())
            .take(args.page_size as usize)
            .collect();
        Page {
            items,
            total,
            page: args.page,
            page_size: args.page_size,
        }
    }

    /// Whether pages exist beyond this one.
    pub fn has_more(&self) -> bool {
        (self.page as usize) * (self.page_size as usize) < self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unspecified() {
        let args = PageArgs::default().validate();
        assert_eq!(args.page, 1);
        assert_eq!(args.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(args.offset(), 0);
    }

    #[test]
    fn page_size_is_clamped() {
        let args = PageArgs {
            page: Some(0),
            page_size: Some(10_000),
        }
        .validate();
        assert_eq!(args.page, 1);
        assert_eq!(args.page_size, MAX_PAGE_SIZE);
    }

    #[test]
    fn slicing_reports_total_across_pages() {
        let page = Page::from_filtered(
            (0..45).collect::<Vec<_>>(),
            PageArgs {
                page: Some(3),
                page_size: Some(20),
            }
            .validate(),
        );
        assert_eq!(page.total, 45);
        assert_eq!(page.items, (40..45).collect::<Vec<_>>());
        assert!(!page.has_more());
    }

    #[test]
    fn out_of_range_page_is_empty_not_an_error() {
        let page = Page::from_filtered(
            vec![1, 2, 3],
            PageArgs {
                page: Some(9),
                page_size: Some(10),
            }
            .validate(),
        );
        assert!(page.items.is_empty());
        assert_eq!(page.total, 3);
    }
}
