//! Pager - client-side pagination over an already filtered list.
//!
//! Three small pieces, each pure and synchronous:
//!
//! - [`PaginationState`]: current page, page size and total page count, with
//!   the guarded transitions a pagination control needs.
//! - [`slice`]: the visible records of the current page. Out-of-range pages
//!   yield an empty slice instead of panicking.
//! - [`page_window`]: the page labels to render, with [`PageEntry::Ellipsis`]
//!   markers standing in for elided ranges.
//!
//! # Example
//!
//! ```rust
//! use atlas_pager::{page_window, slice, PageEntry, PaginationState, RecomputeTrigger};
//!
//! let records: Vec<u32> = (1..=23).collect();
//!
//! let mut state = PaginationState::new(10);
//! state.recompute_total_pages(records.len(), RecomputeTrigger::Records);
//! assert_eq!(state.total_pages(), 3);
//!
//! assert!(state.change_page(3));
//! assert_eq!(slice(&records, &state), &[21, 22, 23]);
//!
//! // Out of range: silently ignored.
//! assert!(!state.change_page(4));
//! assert_eq!(state.current_page(), 3);
//!
//! use PageEntry::{Ellipsis, Number};
//! assert_eq!(
//!     page_window(5, 10),
//!     vec![Number(1), Ellipsis, Number(4), Number(5), Number(6), Ellipsis, Number(10)]
//! );
//! ```

mod error;
mod slice;
mod state;
mod window;

pub use error::{PagerError, Result};
pub use slice::{page_bounds, slice};
pub use state::{total_pages_for, PaginationState, RecomputeTrigger, DEFAULT_PAGE_SIZE};
pub use window::{page_window, page_window_with, PageEntry, DEFAULT_MAX_VISIBLE};
