//! Property-based tests for the pager.

use atlas_pager::{
    page_bounds, page_window, page_window_with, slice, PageEntry, PaginationState,
    RecomputeTrigger,
};
use proptest::prelude::*;

fn numbers(window: &[PageEntry]) -> Vec<usize> {
    window.iter().filter_map(PageEntry::page).collect()
}

// (total_pages, current_page) with current in range.
fn page_position() -> impl Strategy<Value = (usize, usize)> {
    (1usize..200).prop_flat_map(|total| (Just(total), 1..=total))
}

proptest! {
    #[test]
    fn total_pages_is_ceiling_floored_at_one(
        filtered_count in 0usize..10_000,
        page_size in 1usize..200,
    ) {
        let mut state = PaginationState::new(page_size);
        state.recompute_total_pages(filtered_count, RecomputeTrigger::Records);
        let expected = std::cmp::max(1, filtered_count.div_ceil(page_size));
        prop_assert_eq!(state.total_pages(), expected);
    }

    #[test]
    fn slice_length_matches_formula(
        len in 0usize..500,
        page_size in 1usize..50,
        page in 1usize..60,
    ) {
        let items: Vec<usize> = (0..len).collect();
        let mut state = PaginationState::new(page_size);
        // Large enough total so that any page can be selected.
        state.recompute_total_pages(page * page_size, RecomputeTrigger::Records);
        prop_assert!(state.change_page(page) || page == 1);

        let start = (page - 1) * page_size;
        let expected = std::cmp::min(page_size, len.saturating_sub(start));
        prop_assert_eq!(slice(&items, &state).len(), expected);

        let bounds = page_bounds(len, &state);
        prop_assert!(bounds.start <= bounds.end && bounds.end <= len);
    }

    #[test]
    fn change_page_outside_range_is_noop(
        count in 0usize..500,
        page_size in 1usize..30,
        target in 0usize..100,
    ) {
        let mut state = PaginationState::new(page_size);
        state.recompute_total_pages(count, RecomputeTrigger::Records);
        prop_assume!(target < 1 || target > state.total_pages());

        let before = state;
        prop_assert!(!state.change_page(target));
        prop_assert_eq!(state, before);
    }

    #[test]
    fn search_recompute_never_leaves_stale_page(
        before in 0usize..500,
        after in 0usize..500,
        page_size in 1usize..30,
        page in 1usize..50,
    ) {
        let mut state = PaginationState::new(page_size);
        state.recompute_total_pages(before, RecomputeTrigger::Records);
        state.change_page(page);
        state.recompute_total_pages(after, RecomputeTrigger::SearchTerm);
        prop_assert!(state.current_page() <= state.total_pages());
    }

    #[test]
    fn page_size_recompute_never_moves_page(
        count in 0usize..500,
        old_size in 1usize..30,
        new_size in 1usize..30,
        page in 1usize..50,
    ) {
        let mut state = PaginationState::new(old_size);
        state.recompute_total_pages(count, RecomputeTrigger::Records);
        state.change_page(page);
        let current = state.current_page();

        state.set_page_size(new_size);
        state.recompute_total_pages(count, RecomputeTrigger::PageSize);
        prop_assert_eq!(state.current_page(), current);
    }

    #[test]
    fn window_contains_first_and_last((total, current) in page_position()) {
        let window = page_window(current, total);
        if total > 5 {
            prop_assert_eq!(window.first(), Some(&PageEntry::Number(1)));
            prop_assert_eq!(window.last(), Some(&PageEntry::Number(total)));
        } else {
            prop_assert_eq!(numbers(&window), (1..=total).collect::<Vec<_>>());
        }
    }

    #[test]
    fn window_is_strictly_increasing_and_contains_current(
        (total, current) in page_position(),
        max_visible in 3usize..12,
    ) {
        let window = page_window_with(current, total, max_visible);
        let pages = numbers(&window);
        prop_assert!(pages.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(pages.contains(&current));
        prop_assert!(pages.iter().all(|p| (1..=total).contains(p)));
    }

    #[test]
    fn ellipses_mark_real_gaps((total, current) in page_position()) {
        let window = page_window(current, total);
        for (i, entry) in window.iter().enumerate() {
            if entry.is_ellipsis() {
                // Never first, last, or adjacent to another ellipsis.
                prop_assert!(i > 0 && i + 1 < window.len());
                let before = window[i - 1].page().unwrap();
                let after = window[i + 1].page().unwrap();
                prop_assert!(after > before + 1);
            }
        }
    }
}
