//! Runtime field values handed out by [`Searchable`](crate::Searchable) records.

/// A searchable field value, borrowed from the record.
///
/// Empty strings are normalized to [`Value::None`] by the `From`
/// conversions, so an empty optional field behaves exactly like a missing
/// one.
///
/// # Example
///
/// ```
/// use atlas_seeker::Value;
///
/// assert_eq!(Value::from("CLP"), Value::String("CLP"));
/// assert_eq!(Value::from(""), Value::None);
/// assert_eq!(Value::from(None::<&str>), Value::None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value<'a> {
    /// String value (borrowed).
    String(&'a str),
    /// Field not present, empty, or not searchable.
    None,
}

impl<'a> Value<'a> {
    /// Returns `true` if this is a `None` value.
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Extracts the string value, if present.
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Value::String(s) => Some(s),
            Value::None => None,
        }
    }

    /// Returns `true` if the value contains an already case-folded needle.
    pub(crate) fn contains_folded(&self, needle: &str) -> bool {
        match self {
            Value::String(s) => crate::fold(s).contains(needle),
            Value::None => false,
        }
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        if s.is_empty() {
            Value::None
        } else {
            Value::String(s)
        }
    }
}

impl<'a> From<&'a String> for Value<'a> {
    fn from(s: &'a String) -> Self {
        Value::from(s.as_str())
    }
}

impl<'a> From<Option<&'a str>> for Value<'a> {
    fn from(s: Option<&'a str>) -> Self {
        s.map_or(Value::None, Value::from)
    }
}
