//! Seeker - free-text search over in-memory record collections.
//!
//! A record opts in by implementing [`Searchable`]: it names a fixed set of
//! string fields and hands out their values on request. A [`Search`] then
//! keeps the records for which **any** of those fields contains the search
//! term as a substring, ignoring case.
//!
//! # Quick Start
//!
//! ```rust
//! use atlas_seeker::{filter, Searchable, Value};
//!
//! struct Country {
//!     name: String,
//!     code: String,
//!     currency: Option<String>,
//! }
//!
//! impl Searchable for Country {
//!     const SEARCH_FIELDS: &'static [&'static str] = &["name", "code", "currency"];
//!
//!     fn search_field(&self, field: &str) -> Value<'_> {
//!         match field {
//!             "name" => Value::from(self.name.as_str()),
//!             "code" => Value::from(self.code.as_str()),
//!             "currency" => Value::from(self.currency.as_deref()),
//!             _ => Value::None,
//!         }
//!     }
//! }
//!
//! let countries = vec![
//!     Country { name: "Chile".into(), code: "CL".into(), currency: Some("CLP".into()) },
//!     Country { name: "Antarctica".into(), code: "AQ".into(), currency: None },
//!     Country { name: "Colombia".into(), code: "CO".into(), currency: Some("COP".into()) },
//! ];
//!
//! let results = filter(&countries, "cl");
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].name, "Chile");
//!
//! // An empty term keeps everything, in order.
//! assert_eq!(filter(&countries, "   ").len(), 3);
//! ```
//!
//! # Matching Semantics
//!
//! ```text
//! keep(record) = term is blank
//!              ∨ ∃ field ∈ fields : fold(field) contains fold(term)
//! ```
//!
//! - Matching is substring containment. There is no tokenizing and no
//!   fuzziness.
//! - A field reported as [`Value::None`] (missing or empty) never matches,
//!   but the record can still match on its other fields.
//! - Results keep the original relative order.

mod error;
mod search;
mod traits;
mod value;

pub use error::{Result, SearchError};
pub use search::{filter, fold, Search};
pub use traits::Searchable;
pub use value::Value;
