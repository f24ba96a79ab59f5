//! The [`Searchable`] trait that records implement to take part in a search.

use crate::value::Value;

/// Trait for records that can be searched by free text.
///
/// `SEARCH_FIELDS` is the fixed set of fields a blank [`Search`](crate::Search)
/// looks at. `search_field` hands out the value of one of them.
///
/// # Example
///
/// ```
/// use atlas_seeker::{Searchable, Value};
///
/// struct Item {
///     title: String,
///     tag: Option<String>,
/// }
///
/// impl Searchable for Item {
///     const SEARCH_FIELDS: &'static [&'static str] = &["title", "tag"];
///
///     fn search_field(&self, field: &str) -> Value<'_> {
///         match field {
///             "title" => Value::from(self.title.as_str()),
///             "tag" => Value::from(self.tag.as_deref()),
///             _ => Value::None,
///         }
///     }
/// }
///
/// let item = Item { title: "Peru".into(), tag: None };
/// assert_eq!(item.search_field("title"), Value::String("Peru"));
/// assert_eq!(item.search_field("tag"), Value::None);
/// ```
pub trait Searchable {
    /// Names of the fields checked by a search, in check order.
    const SEARCH_FIELDS: &'static [&'static str];

    /// Returns the value of a field for matching.
    ///
    /// Unknown field names should return [`Value::None`].
    fn search_field(&self, field: &str) -> Value<'_>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pair {
        left: String,
        right: String,
    }

    impl Searchable for Pair {
        const SEARCH_FIELDS: &'static [&'static str] = &["left", "right"];

        fn search_field(&self, field: &str) -> Value<'_> {
            match field {
                "left" => Value::from(&self.left),
                "right" => Value::from(&self.right),
                _ => Value::None,
            }
        }
    }

    #[test]
    fn unknown_field_is_none() {
        let pair = Pair {
            left: "a".into(),
            right: "b".into(),
        };
        assert_eq!(pair.search_field("left"), Value::String("a"));
        assert_eq!(pair.search_field("middle"), Value::None);
    }
}
