//! Atlas - search and page through the world's countries.
//!
//! The binary fetches the country list once (from the countries GraphQL API
//! or a JSON snapshot), then answers search and paging events against a
//! [`PageSession`]:
//!
//! ```text
//! fetch ──► FetchState ──► PageSession::load
//!                              │
//!        search / page / size  ▼
//!                          PageView::build ──► table, or json/yaml/xml/csv
//! ```
//!
//! ```rust
//! use atlas::{Country, PageSession};
//!
//! let mut session = PageSession::new(2).unwrap();
//! session.load(vec![
//!     Country::new("AR", "Argentina", "South America", Some("ARS")),
//!     Country::new("AU", "Australia", "Oceania", Some("AUD")),
//!     Country::new("AT", "Austria", "Europe", Some("EUR")),
//! ]);
//! assert_eq!(session.state().total_pages(), 2);
//!
//! session.change_page(2);
//! session.search("austr");
//! assert_eq!(session.filtered_count(), 2);
//! assert_eq!(session.state().current_page(), 1);
//! ```

pub mod app;
pub mod browse;
pub mod cli;
pub mod config;
pub mod country;
pub mod logging;
pub mod output;
pub mod render;
pub mod serialize;
pub mod session;
pub mod source;
pub mod view;

pub use config::{Config, ConfigError};
pub use country::{Continent, Country, CountryRow};
pub use output::OutputMode;
pub use session::PageSession;
pub use source::{CountrySource, FetchState, SourceError};
pub use view::{Message, MessageLevel, PageView};
