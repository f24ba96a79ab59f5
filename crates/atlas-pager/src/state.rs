//! Pagination state and its transitions.

use serde::Serialize;

use crate::error::{PagerError, Result};

/// Page size used by [`PaginationState::default`].
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Number of pages needed for `count` items, never less than one.
///
/// ```
/// use atlas_pager::total_pages_for;
///
/// assert_eq!(total_pages_for(23, 10), 3);
/// assert_eq!(total_pages_for(20, 10), 2);
/// assert_eq!(total_pages_for(0, 10), 1);
/// ```
///
/// # Panics
///
/// Panics if `page_size` is zero.
pub fn total_pages_for(count: usize, page_size: usize) -> usize {
    assert!(page_size > 0, "page size must be at least 1");
    count.div_ceil(page_size).max(1)
}

/// What caused a total-page recomputation.
///
/// Only a search-term change may send the user back to page 1; the other
/// triggers keep the current page even when it ends up past the last page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecomputeTrigger {
    /// The search term changed.
    SearchTerm,
    /// The page size changed.
    PageSize,
    /// The source records were (re)loaded.
    Records,
}

/// Current page, page size and total page count.
///
/// Invariants: all three fields are at least 1. `current_page <= total_pages`
/// holds after every transition except a recomputation triggered by
/// something other than a search-term change; see
/// [`recompute_total_pages`](Self::recompute_total_pages).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationState {
    current_page: usize,
    total_pages: usize,
    page_size: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PaginationState {
    /// Creates a state on page 1 of 1.
    ///
    /// # Panics
    ///
    /// Panics if `page_size` is zero. Use [`try_new`](Self::try_new) for
    /// sizes coming from user input.
    pub fn new(page_size: usize) -> Self {
        assert!(page_size > 0, "page size must be at least 1");
        Self {
            current_page: 1,
            total_pages: 1,
            page_size,
        }
    }

    /// Fallible variant of [`new`](Self::new).
    pub fn try_new(page_size: usize) -> Result<Self> {
        if page_size == 0 {
            return Err(PagerError::ZeroPageSize);
        }
        Ok(Self::new(page_size))
    }

    /// The 1-based current page.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// The total number of pages, at least 1.
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Records per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Moves to `target` if it is a valid page.
    ///
    /// Targets outside `1..=total_pages` are ignored without error: they
    /// come from controls that should have been disabled, and must not
    /// corrupt the state. Returns `true` if the page changed.
    pub fn change_page(&mut self, target: usize) -> bool {
        if target < 1 || target > self.total_pages || target == self.current_page {
            return false;
        }
        self.current_page = target;
        true
    }

    /// Goes to the next page, if there is one.
    pub fn next_page(&mut self) -> bool {
        self.change_page(self.current_page.saturating_add(1))
    }

    /// Goes to the previous page, if there is one.
    pub fn previous_page(&mut self) -> bool {
        self.change_page(self.current_page.saturating_sub(1))
    }

    /// Sets the current page back to 1, keeping page size and total pages.
    pub fn reset_to_first_page(&mut self) {
        self.current_page = 1;
    }

    /// Recomputes the total page count for a filtered set of
    /// `filtered_count` records.
    ///
    /// `total_pages = max(1, ceil(filtered_count / page_size))`. When the
    /// recomputation comes from a search-term change and the current page no
    /// longer exists, the current page goes back to 1. For every other
    /// trigger the current page is left alone; the slicer then shows an
    /// empty page until the user navigates.
    pub fn recompute_total_pages(&mut self, filtered_count: usize, trigger: RecomputeTrigger) {
        self.total_pages = total_pages_for(filtered_count, self.page_size);
        if trigger == RecomputeTrigger::SearchTerm && self.current_page > self.total_pages {
            self.current_page = 1;
        }
    }

    /// Changes the page size. Callers recompute with
    /// [`RecomputeTrigger::PageSize`] afterwards.
    ///
    /// # Panics
    ///
    /// Panics if `page_size` is zero.
    pub fn set_page_size(&mut self, page_size: usize) {
        assert!(page_size > 0, "page size must be at least 1");
        self.page_size = page_size;
    }

    /// Whether a "previous" control should be enabled.
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Whether a "next" control should be enabled.
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Whether the current page lies past the last page.
    pub fn is_stale(&self) -> bool {
        self.current_page > self.total_pages
    }
}
