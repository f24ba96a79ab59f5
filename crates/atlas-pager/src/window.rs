//! Page-window generation for pagination controls.
//!
//! The window always shows the first and last page, a three-wide run of
//! pages around the current one, and an ellipsis for each elided range:
//!
//! ```text
//! current=1  total=10   1 2 3 … 10
//! current=5  total=10   1 … 4 5 6 … 10
//! current=10 total=10   1 … 8 9 10
//! total=3               1 2 3
//! ```

use std::fmt;

use serde::{Serialize, Serializer};

/// Window size at or below which every page is listed.
pub const DEFAULT_MAX_VISIBLE: usize = 5;

/// One slot of a page window.
///
/// Both ellipses in a window mean the same thing ("elided range") and are
/// never interactive. When rendered as a keyed list, use the slot position
/// for identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageEntry {
    /// A page number control.
    Number(usize),
    /// An elided range of pages.
    Ellipsis,
}

impl PageEntry {
    /// The page number, or `None` for an ellipsis.
    pub fn page(&self) -> Option<usize> {
        match self {
            PageEntry::Number(page) => Some(*page),
            PageEntry::Ellipsis => None,
        }
    }

    /// Returns `true` for an ellipsis.
    pub fn is_ellipsis(&self) -> bool {
        matches!(self, PageEntry::Ellipsis)
    }
}

impl fmt::Display for PageEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageEntry::Number(page) => write!(f, "{}", page),
            PageEntry::Ellipsis => f.write_str("…"),
        }
    }
}

// Numbers serialize as numbers, ellipses as the string "ellipsis".
impl Serialize for PageEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageEntry::Number(page) => serializer.serialize_u64(*page as u64),
            PageEntry::Ellipsis => serializer.serialize_str("ellipsis"),
        }
    }
}

/// Page window with the default `max_visible` of 5.
pub fn page_window(current_page: usize, total_pages: usize) -> Vec<PageEntry> {
    page_window_with(current_page, total_pages, DEFAULT_MAX_VISIBLE)
}

/// Builds the ordered page labels for a pagination control.
///
/// When `total_pages <= max_visible` every page is listed. Otherwise the
/// window holds page 1, an optional ellipsis, a three-wide run around
/// `current_page` (kept three wide at both edges), another optional
/// ellipsis, and `total_pages`.
///
/// Preconditions: `total_pages >= 1`, `1 <= current_page <= total_pages`
/// and `max_visible >= 3`. They are checked in debug builds only.
pub fn page_window_with(
    current_page: usize,
    total_pages: usize,
    max_visible: usize,
) -> Vec<PageEntry> {
    debug_assert!(total_pages >= 1, "total_pages must be at least 1");
    debug_assert!(
        (1..=total_pages).contains(&current_page),
        "current_page {} outside 1..={}",
        current_page,
        total_pages
    );
    debug_assert!(max_visible >= 3, "max_visible must be at least 3");

    if total_pages <= max_visible {
        return (1..=total_pages).map(PageEntry::Number).collect();
    }

    let mut start = current_page.saturating_sub(1).max(2);
    let mut end = (current_page + 1).min(total_pages - 1);

    if current_page <= 2 {
        end = 3;
    } else if current_page >= total_pages - 1 {
        start = total_pages - 2;
    }

    let mut pages = Vec::with_capacity(7);
    pages.push(PageEntry::Number(1));
    if start > 2 {
        pages.push(PageEntry::Ellipsis);
    }
    pages.extend((start..=end).map(PageEntry::Number));
    if end < total_pages - 1 {
        pages.push(PageEntry::Ellipsis);
    }
    pages.push(PageEntry::Number(total_pages));
    pages
}
