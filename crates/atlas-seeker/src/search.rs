//! Search term and executor.
//!
//! A [`Search`] holds the case-folded term and, optionally, a restricted set
//! of fields. Blank terms match everything.

use crate::error::{Result, SearchError};
use crate::traits::Searchable;

/// Case-folds text for matching.
///
/// Uses Unicode lowercasing, so non-ASCII names fold as expected.
pub fn fold(text: &str) -> String {
    text.to_lowercase()
}

/// Filters `records` by `term`, preserving their original order.
///
/// Shorthand for `Search::new(term).filter(records)`.
pub fn filter<'a, T: Searchable>(records: &'a [T], term: &str) -> Vec<&'a T> {
    Search::new(term).filter(records)
}

/// A free-text search over [`Searchable`] records.
///
/// # Example
///
/// ```
/// use atlas_seeker::{Search, Searchable, Value};
///
/// struct Row(&'static str, &'static str);
///
/// impl Searchable for Row {
///     const SEARCH_FIELDS: &'static [&'static str] = &["name", "region"];
///
///     fn search_field(&self, field: &str) -> Value<'_> {
///         match field {
///             "name" => Value::from(self.0),
///             "region" => Value::from(self.1),
///             _ => Value::None,
///         }
///     }
/// }
///
/// let rows = [Row("Kenya", "Africa"), Row("France", "Europe")];
///
/// assert_eq!(Search::new("EUR").count(&rows), 1);
///
/// let by_name = Search::new("africa").on_fields::<Row, _>(["name"]).unwrap();
/// assert_eq!(by_name.count(&rows), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Search {
    needle: Option<String>,
    fields: Option<Vec<String>>,
}

impl Search {
    /// Creates a search for `term`.
    ///
    /// A term that is empty after trimming yields a search that matches
    /// every record. Otherwise the term is folded but kept untrimmed, so
    /// `"united "` only matches where a space follows.
    pub fn new(term: &str) -> Self {
        let needle = if term.trim().is_empty() {
            None
        } else {
            Some(fold(term))
        };
        Search {
            needle,
            fields: None,
        }
    }

    /// Restricts the search to a subset of `T::SEARCH_FIELDS`.
    ///
    /// Returns an error if a name is not one of the record's searchable
    /// fields, or if the list is empty.
    pub fn on_fields<T, I>(mut self, fields: I) -> Result<Self>
    where
        T: Searchable,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut selected = Vec::new();
        for field in fields {
            let field = field.as_ref();
            if !T::SEARCH_FIELDS.contains(&field) {
                return Err(SearchError::UnknownField {
                    field: field.to_string(),
                    available: T::SEARCH_FIELDS.join(", "),
                });
            }
            selected.push(field.to_string());
        }
        if selected.is_empty() {
            return Err(SearchError::NoFields);
        }
        self.fields = Some(selected);
        Ok(self)
    }

    /// Returns the folded term, or `None` for a blank search.
    pub fn term(&self) -> Option<&str> {
        self.needle.as_deref()
    }

    /// Returns `true` if this search matches everything.
    pub fn is_empty(&self) -> bool {
        self.needle.is_none()
    }

    /// Tests if a single record matches.
    pub fn matches<T: Searchable>(&self, item: &T) -> bool {
        let Some(needle) = self.needle.as_deref() else {
            return true;
        };

        match &self.fields {
            Some(fields) => fields
                .iter()
                .any(|field| item.search_field(field).contains_folded(needle)),
            None => T::SEARCH_FIELDS
                .iter()
                .any(|field| item.search_field(field).contains_folded(needle)),
        }
    }

    /// Filters a slice, returning references to matching records in order.
    pub fn filter<'a, T: Searchable>(&self, items: &'a [T]) -> Vec<&'a T> {
        items.iter().filter(|item| self.matches(*item)).collect()
    }

    /// Filters and clones matching records.
    pub fn filter_cloned<T: Searchable + Clone>(&self, items: &[T]) -> Vec<T> {
        self.filter(items).into_iter().cloned().collect()
    }

    /// Counts the number of matching records.
    pub fn count<T: Searchable>(&self, items: &[T]) -> usize {
        items.iter().filter(|item| self.matches(*item)).count()
    }
}
