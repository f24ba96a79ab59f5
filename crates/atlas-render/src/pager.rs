//! The pagination control line.
//!
//! ```text
//! ‹ Prev  1 … 4 (5) 6 … 10  Next ›   Page 5 of 10
//! ```

use atlas_pager::{page_window_with, PageEntry, PaginationState};
use serde::Serialize;

/// Everything needed to draw a pagination control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PagerControl {
    pub current_page: usize,
    pub total_pages: usize,
    pub has_previous: bool,
    pub has_next: bool,
    pub window: Vec<PageEntry>,
}

impl PagerControl {
    /// Builds the control for `state`.
    ///
    /// A page left past the end by a page-size change is shown as the last
    /// page, so the window precondition always holds.
    pub fn new(state: &PaginationState, max_visible: usize) -> Self {
        let total_pages = state.total_pages().max(1);
        let current_page = state.current_page().clamp(1, total_pages);
        Self {
            current_page,
            total_pages,
            has_previous: current_page > 1,
            has_next: current_page < total_pages,
            window: page_window_with(current_page, total_pages, max_visible),
        }
    }
}

/// Renders `control` as one tagged line.
///
/// ```
/// use atlas_pager::PaginationState;
/// use atlas_render::{render_pager, PagerControl, TextMode, Theme};
///
/// let mut state = PaginationState::new(10);
/// state.recompute_total_pages(100, atlas_pager::RecomputeTrigger::Records);
/// state.change_page(5);
///
/// let line = render_pager(&PagerControl::new(&state, 5));
/// let plain = Theme::atlas().tags(TextMode::Plain).process(&line);
/// assert_eq!(plain, "‹ Prev  1 … 4 (5) 6 … 10  Next ›   Page 5 of 10");
/// ```
pub fn render_pager(control: &PagerControl) -> String {
    let prev_style = if control.has_previous { "nav" } else { "disabled" };
    let next_style = if control.has_next { "nav" } else { "disabled" };

    format!(
        "[{prev_style}]‹ Prev[/{prev_style}]  {}  [{next_style}]Next ›[/{next_style}]   [muted]Page {} of {}[/muted]",
        render_window(&control.window, control.current_page),
        control.current_page,
        control.total_pages
    )
}

/// Renders just the page labels, with `current_page` highlighted as `(n)`.
///
/// ```
/// use atlas_pager::page_window;
/// use atlas_render::pager::render_window;
///
/// let line = render_window(&page_window(1, 10), 1);
/// assert_eq!(
///     line,
///     "[current](1)[/current] [page]2[/page] [page]3[/page] [ellipsis]…[/ellipsis] [page]10[/page]"
/// );
/// ```
pub fn render_window(window: &[PageEntry], current_page: usize) -> String {
    let labels: Vec<String> = window
        .iter()
        .map(|entry| match entry {
            PageEntry::Number(page) if *page == current_page => {
                format!("[current]({page})[/current]")
            }
            PageEntry::Number(page) => format!("[page]{page}[/page]"),
            PageEntry::Ellipsis => "[ellipsis]…[/ellipsis]".to_string(),
        })
        .collect();
    labels.join(" ")
}
