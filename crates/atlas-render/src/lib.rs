//! Terminal rendering for paginated record tables.
//!
//! Output is produced in two passes, the same way for every view:
//!
//! 1. Layout: templates and formatters write plain text marked up with
//!    style tags, `[name]content[/name]`.
//! 2. Styling: a [`StyleTags`] processor built from a [`Theme`] turns the
//!    tags into ANSI codes, strips them, or leaves them visible, depending
//!    on the [`TextMode`].
//!
//! ```rust
//! use atlas_render::{Renderer, TextMode, Theme};
//! use serde_json::json;
//!
//! let mut renderer = Renderer::new(Theme::atlas());
//! renderer
//!     .add_template("greeting", "[title]{{ name }}[/title] has {{ count }} pages")
//!     .unwrap();
//!
//! let data = json!({"name": "Countries", "count": 25});
//! let plain = renderer.render("greeting", &data, TextMode::Plain).unwrap();
//! assert_eq!(plain, "Countries has 25 pages");
//!
//! let debug = renderer.render("greeting", &data, TextMode::Debug).unwrap();
//! assert_eq!(debug, "[title]Countries[/title] has 25 pages");
//! ```
//!
//! # Modules
//!
//! - [`table`]: Unicode-aware column layout.
//! - [`pager`]: the pagination control line.
//! - [`text`]: width measurement, truncation and padding helpers.

mod error;
mod mode;
pub mod pager;
pub mod table;
mod tags;
mod template;
pub mod text;
mod theme;

pub use error::RenderError;
pub use mode::TextMode;
pub use pager::{render_pager, render_window, PagerControl};
pub use table::{Column, Table, Width};
pub use tags::{escape, StyleTags, TagTransform};
pub use template::Renderer;
pub use theme::Theme;

/// Terminal width in columns, or `fallback` when stdout is not a terminal.
pub fn terminal_width(fallback: usize) -> usize {
    terminal_size::terminal_size()
        .map(|(terminal_size::Width(w), _)| w as usize)
        .unwrap_or(fallback)
}
