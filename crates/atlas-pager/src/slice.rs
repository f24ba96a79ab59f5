//! Page slicing.

use std::ops::Range;

use crate::state::PaginationState;

/// Index range of the current page within a list of `len` records.
///
/// The range is clipped to `0..len`; a page past the end gives an empty
/// range at `len`.
///
/// ```
/// use atlas_pager::{page_bounds, PaginationState, RecomputeTrigger};
///
/// let mut state = PaginationState::new(10);
/// state.recompute_total_pages(23, RecomputeTrigger::Records);
/// state.change_page(3);
/// assert_eq!(page_bounds(23, &state), 20..23);
/// ```
pub fn page_bounds(len: usize, state: &PaginationState) -> Range<usize> {
    let start = state
        .current_page()
        .saturating_sub(1)
        .saturating_mul(state.page_size());
    let end = start.saturating_add(state.page_size());
    start.min(len)..end.min(len)
}

/// Returns the records of the current page.
///
/// Never panics for out-of-range pages: a stale current page (for example
/// after the page size grew) yields an empty slice.
pub fn slice<'a, T>(filtered: &'a [T], state: &PaginationState) -> &'a [T] {
    &filtered[page_bounds(filtered.len(), state)]
}
