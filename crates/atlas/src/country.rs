//! The country record and its table row.

use atlas_seeker::{Searchable, Value};
use serde::{Deserialize, Serialize};

/// Shown in place of a missing currency.
pub const MISSING_CURRENCY: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Continent {
    pub name: String,
}

/// A country as returned by the countries API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub code: String,
    pub name: String,
    pub continent: Continent,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub emoji: String,
}

impl Country {
    pub fn new(code: &str, name: &str, continent: &str, currency: Option<&str>) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            continent: Continent {
                name: continent.to_string(),
            },
            currency: currency.map(str::to_string),
            emoji: String::new(),
        }
    }

    pub fn with_emoji(mut self, emoji: &str) -> Self {
        self.emoji = emoji.to_string();
        self
    }

    /// Currency for display: the raw value, or `N/A` when missing or empty.
    pub fn currency_label(&self) -> &str {
        match self.currency.as_deref() {
            Some(c) if !c.is_empty() => c,
            _ => MISSING_CURRENCY,
        }
    }
}

impl Searchable for Country {
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "code", "continent", "currency"];

    fn search_field(&self, field: &str) -> Value<'_> {
        match field {
            "name" => Value::from(self.name.as_str()),
            "code" => Value::from(self.code.as_str()),
            "continent" => Value::from(self.continent.name.as_str()),
            "currency" => Value::from(self.currency.as_deref()),
            _ => Value::None,
        }
    }
}

/// One flat, display-ready table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryRow {
    pub code: String,
    pub name: String,
    pub continent: String,
    pub currency: String,
    pub flag: String,
}

impl CountryRow {
    /// The "Country" column: `name (code)`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.code)
    }
}

impl From<&Country> for CountryRow {
    fn from(country: &Country) -> Self {
        Self {
            code: country.code.clone(),
            name: country.name.clone(),
            continent: country.continent.name.clone(),
            currency: country.currency_label().to_string(),
            flag: country.emoji.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atlas_seeker::filter;

    fn sample() -> Vec<Country> {
        vec![
            Country::new("AQ", "Antarctica", "Antarctica", None),
            Country::new("CL", "Chile", "South America", Some("CLP")),
            Country::new("DE", "Germany", "Europe", Some("EUR")),
        ]
    }

    #[test]
    fn deserializes_api_shape_with_null_currency() {
        let json = r#"{"code":"AQ","name":"Antarctica","continent":{"name":"Antarctica"},"currency":null,"emoji":"🇦🇶"}"#;
        let country: Country = serde_json::from_str(json).unwrap();
        assert_eq!(country.currency, None);
        assert_eq!(country.currency_label(), "N/A");
        assert_eq!(country.emoji, "🇦🇶");
    }

    #[test]
    fn empty_currency_is_not_applicable() {
        let country = Country::new("XX", "Nowhere", "Europe", Some(""));
        assert_eq!(country.currency_label(), "N/A");
    }

    #[test]
    fn search_covers_all_four_fields() {
        let countries = sample();
        assert_eq!(filter(&countries, "germ").len(), 1);
        assert_eq!(filter(&countries, "de").len(), 1);
        assert_eq!(filter(&countries, "south").len(), 1);
        assert_eq!(filter(&countries, "eur").len(), 1);
    }

    #[test]
    fn missing_currency_still_matches_on_name() {
        let countries = sample();
        let hits = filter(&countries, "antarc");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].code, "AQ");
    }

    #[test]
    fn row_label_and_currency() {
        let row = CountryRow::from(&sample()[0]);
        assert_eq!(row.label(), "Antarctica (AQ)");
        assert_eq!(row.currency, "N/A");
    }
}
