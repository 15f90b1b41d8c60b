//! Page-based windowing over resident data

use crate::error::{QueryError, QueryResult};
use serde::Serialize;
use std::ops::Range;

/// Fixed-size page windowing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
}

/// Metadata for one page of a sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    /// Current page (1-based, clamped into range)
    pub page: usize,
    /// Items per page
    pub per_page: usize,
    /// Total number of items
    pub total: usize,
    /// Total number of pages (at least 1)
    pub total_pages: usize,
    /// Whether there's a next page
    pub has_next: bool,
    /// Whether there's a previous page
    pub has_prev: bool,
    /// Index of the first item on the page
    pub start: usize,
    /// One past the last item on the page
    pub end: usize,
}

impl PageWindow {
    /// Item range covered by the page
    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Next page number (if exists)
    #[must_use]
    pub const fn next_page(&self) -> Option<usize> {
        if self.has_next { Some(self.page + 1) } else { None }
    }

    /// Previous page number (if exists)
    #[must_use]
    pub const fn prev_page(&self) -> Option<usize> {
        if self.has_prev { Some(self.page - 1) } else { None }
    }
}

impl Paginator {
    /// Create a paginator
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::ZeroPageSize`] when `page_size` is zero.
    pub const fn new(page_size: usize) -> QueryResult<Self> {
        if page_size == 0 {
            return Err(QueryError::ZeroPageSize);
        }
        Ok(Self { page_size })
    }

    /// Items per page
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Window for `requested` (1-based) over `total` items
    ///
    /// Page 0 is treated as page 1 and pages past the end clamp to the last
    /// page. An empty sequence has a single empty page.
    #[must_use]
    pub fn window(&self, total: usize, requested: usize) -> PageWindow {
        let total_pages = total.div_ceil(self.page_size).max(1);
        let page = requested.clamp(1, total_pages);
        let start = (page - 1).saturating_mul(self.page_size).min(total);
        let end = start.saturating_add(self.page_size).min(total);

        PageWindow {
            page,
            per_page: self.page_size,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
            start,
            end,
        }
    }

    /// Slice `items` to page `requested`
    #[must_use]
    pub fn page<'a, T>(&self, items: &'a [T], requested: usize) -> (&'a [T], PageWindow) {
        let window = self.window(items.len(), requested);
        let slice = items.get(window.range()).unwrap_or_default();
        (slice, window)
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_zero_page_size_is_rejected() {
        assert_eq!(Paginator::new(0), Err(QueryError::ZeroPageSize));
    }

    #[test]
    fn test_first_page_of_25() {
        let paginator = Paginator::new(10).unwrap();
        let window = paginator.window(25, 1);

        assert_eq!(window.page, 1);
        assert_eq!(window.total_pages, 3);
        assert_eq!(window.range(), 0..10);
        assert!(window.has_next);
        assert!(!window.has_prev);
        assert_eq!(window.next_page(), Some(2));
        assert_eq!(window.prev_page(), None);
    }

    #[test]
    fn test_last_page_is_partial() {
        let paginator = Paginator::new(10).unwrap();
        let window = paginator.window(25, 3);

        assert_eq!(window.range(), 20..25);
        assert!(!window.has_next);
        assert!(window.has_prev);
        assert_eq!(window.prev_page(), Some(2));
    }

    #[rstest]
    #[case(0, 1)]
    #[case(4, 3)]
    #[case(usize::MAX, 3)]
    fn test_out_of_range_pages_clamp(#[case] requested: usize, #[case] expected: usize) {
        let paginator = Paginator::new(10).unwrap();
        assert_eq!(paginator.window(25, requested).page, expected);
    }

    #[test]
    fn test_huge_page_size_holds_everything() {
        let paginator = Paginator::new(usize::MAX).unwrap();
        let window = paginator.window(25, 7);

        assert_eq!(window.page, 1);
        assert_eq!(window.total_pages, 1);
        assert_eq!(window.range(), 0..25);
        assert!(!window.has_next);
    }

    #[test]
    fn test_empty_sequence_has_one_empty_page() {
        let paginator = Paginator::new(6).unwrap();
        let window = paginator.window(0, 5);

        assert_eq!(window.page, 1);
        assert_eq!(window.total_pages, 1);
        assert_eq!(window.range(), 0..0);
        assert!(!window.has_next);
        assert!(!window.has_prev);
    }

    #[test]
    fn test_exact_multiple_has_no_trailing_page() {
        let paginator = Paginator::new(6).unwrap();
        assert_eq!(paginator.window(12, 1).total_pages, 2);
    }

    #[test]
    fn test_page_slices_items() {
        let items: Vec<u32> = (1..=13).collect();
        let paginator = Paginator::new(6).unwrap();

        let (slice, window) = paginator.page(&items, 3);
        assert_eq!(slice, &[13]);
        assert_eq!(window.page, 3);

        let (slice, _) = paginator.page(&items, 2);
        assert_eq!(slice, &[7, 8, 9, 10, 11, 12]);
    }
}
