//! The shared pagination context of one browsing session.
//!
//! Every mutation recomputes in dependency order: filter, then total pages.
//! The visible slice and the page window are derived on read, so they can
//! never disagree with the state.

use atlas_pager::{
    page_window_with, slice, PageEntry, PagerError, PaginationState, RecomputeTrigger,
    DEFAULT_MAX_VISIBLE,
};
use atlas_seeker::{Search, Searchable};

/// Records, search term and pagination state of one browsing session.
///
/// `records` is the loaded snapshot; `filtered` is always
/// `Search::new(term).filter_cloned(records)`, and `state.total_pages()` is
/// always computed from `filtered.len()`.
///
/// ```
/// use atlas::{Country, PageSession};
///
/// let mut session = PageSession::new(2).unwrap();
/// session.load(vec![
///     Country::new("CL", "Chile", "South America", Some("CLP")),
///     Country::new("CN", "China", "Asia", Some("CNY")),
///     Country::new("DE", "Germany", "Europe", Some("EUR")),
/// ]);
/// assert_eq!(session.state().total_pages(), 2);
///
/// session.search("ch");
/// assert_eq!(session.filtered_count(), 2);
/// assert_eq!(session.visible().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct PageSession<T> {
    records: Vec<T>,
    term: String,
    filtered: Vec<T>,
    state: PaginationState,
    max_visible: usize,
}

impl<T: Searchable + Clone> PageSession<T> {
    /// An empty session. Fails on a zero page size.
    pub fn new(page_size: usize) -> Result<Self, PagerError> {
        Ok(Self {
            records: Vec::new(),
            term: String::new(),
            filtered: Vec::new(),
            state: PaginationState::try_new(page_size)?,
            max_visible: DEFAULT_MAX_VISIBLE,
        })
    }

    /// Sets the window size used by [`window`](Self::window). Values below 3
    /// are raised to 3.
    pub fn with_max_visible(mut self, max_visible: usize) -> Self {
        self.max_visible = max_visible.max(3);
        self
    }

    /// Replaces the record snapshot. The current page is kept as is; only a
    /// search moves it back to page 1.
    pub fn load(&mut self, records: Vec<T>) {
        tracing::debug!(count = records.len(), "records loaded");
        self.records = records;
        self.refilter();
        self.recompute(RecomputeTrigger::Records);
    }

    /// Changes the search term. Returns to page 1 when the current page no
    /// longer exists. Setting the same term again is a no-op.
    pub fn search(&mut self, term: &str) {
        if term == self.term {
            return;
        }
        self.term = term.to_string();
        self.refilter();
        self.recompute(RecomputeTrigger::SearchTerm);
        tracing::debug!(
            term = %self.term,
            matches = self.filtered.len(),
            page = self.state.current_page(),
            "search applied"
        );
    }

    /// Changes the page size without moving the current page, which may
    /// leave it past the end (see [`is_stale`](Self::is_stale)).
    pub fn set_page_size(&mut self, page_size: usize) -> Result<(), PagerError> {
        if page_size == 0 {
            return Err(PagerError::ZeroPageSize);
        }
        self.state.set_page_size(page_size);
        self.recompute(RecomputeTrigger::PageSize);
        if self.state.is_stale() {
            tracing::warn!(
                page = self.state.current_page(),
                total = self.state.total_pages(),
                "current page is past the end after page size change"
            );
        }
        Ok(())
    }

    /// Moves to `page` if it is in `1..=total_pages` and not already current.
    ///
    /// Returns `false` (and changes nothing) otherwise.
    pub fn change_page(&mut self, page: usize) -> bool {
        let moved = self.state.change_page(page);
        if !moved {
            tracing::debug!(
                requested = page,
                total = self.state.total_pages(),
                "page change ignored"
            );
        }
        moved
    }

    /// Moves forward one page. `false` on the last page, or past it.
    pub fn next_page(&mut self) -> bool {
        self.state.next_page()
    }

    /// Moves back one page. `false` on page 1, and on a stale page whose
    /// predecessor does not exist either.
    pub fn previous_page(&mut self) -> bool {
        self.state.previous_page()
    }

    /// Jumps to page 1.
    pub fn first_page(&mut self) -> bool {
        self.change_page(1)
    }

    /// Jumps to the last page. Also the way out of a stale page.
    pub fn last_page(&mut self) -> bool {
        self.change_page(self.state.total_pages())
    }

    /// Sets the current page to 1 unconditionally.
    pub fn reset_to_first_page(&mut self) {
        self.state.reset_to_first_page();
    }

    /// Records on the current page. Empty for a stale page.
    pub fn visible(&self) -> &[T] {
        slice(&self.filtered, &self.state)
    }

    /// The page window, computed for `min(current_page, total_pages)`.
    pub fn window(&self) -> Vec<PageEntry> {
        let total = self.state.total_pages();
        let current = self.state.current_page().min(total);
        page_window_with(current, total, self.max_visible)
    }

    /// Current page, page size and total pages.
    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    /// The term as entered, before case folding.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Every record matching the term, in snapshot order.
    pub fn filtered(&self) -> &[T] {
        &self.filtered
    }

    /// Size of the loaded snapshot.
    pub fn total_count(&self) -> usize {
        self.records.len()
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    /// `true` when the current page is past the last page.
    pub fn is_stale(&self) -> bool {
        self.state.is_stale()
    }

    pub fn max_visible(&self) -> usize {
        self.max_visible
    }

    fn refilter(&mut self) {
        self.filtered = Search::new(&self.term).filter_cloned(&self.records);
    }

    fn recompute(&mut self, trigger: RecomputeTrigger) {
        self.state.recompute_total_pages(self.filtered.len(), trigger);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::country::Country;

    fn countries(n: usize) -> Vec<Country> {
        (0..n)
            .map(|i| Country::new(&format!("C{i}"), &format!("Country {i}"), "Europe", None))
            .collect()
    }

    fn session(n: usize, page_size: usize) -> PageSession<Country> {
        let mut s = PageSession::new(page_size).unwrap();
        s.load(countries(n));
        s
    }

    #[test]
    fn zero_page_size_is_rejected() {
        assert!(PageSession::<Country>::new(0).is_err());
        let mut s = session(5, 2);
        assert_eq!(s.set_page_size(0), Err(PagerError::ZeroPageSize));
        assert_eq!(s.state().page_size(), 2);
    }

    #[test]
    fn same_term_twice_is_noop() {
        let mut s = session(23, 5);
        s.search("country 1");
        s.change_page(2);
        s.search("country 1");
        assert_eq!(s.state().current_page(), 2);
    }

    #[test]
    fn last_and_first() {
        let mut s = session(23, 5);
        assert!(s.last_page());
        assert_eq!(s.state().current_page(), 5);
        assert_eq!(s.visible().len(), 3);
        assert!(s.first_page());
        assert!(!s.first_page());
    }

    #[test]
    fn max_visible_floor() {
        let s = PageSession::<Country>::new(10).unwrap().with_max_visible(1);
        assert_eq!(s.max_visible(), 3);
    }
}
