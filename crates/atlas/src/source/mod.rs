//! Where the country list comes from.
//!
//! A [`CountrySource`] produces the full record list once. [`FetchState`]
//! carries the outcome to the view, which renders a spinner while loading
//! and an error box on failure.

mod file;
mod graphql;

pub use file::{parse_snapshot, FileSource};
pub use graphql::{parse_response, GraphQlSource, COUNTRIES_QUERY, DEFAULT_ENDPOINT};

use std::path::PathBuf;

use thiserror::Error;

use crate::country::Country;

/// Errors from fetching or decoding the country list.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request to {endpoint} failed: {source}")]
    Http {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{0}")]
    GraphQl(String),

    #[error("response contained no data")]
    MissingData,

    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid country data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A one-shot provider of the full country list.
pub trait CountrySource {
    fn fetch(&self) -> Result<Vec<Country>, SourceError>;

    /// Short human-readable description, for logs.
    fn describe(&self) -> String;
}

/// A fixed in-memory list.
#[derive(Debug, Clone, Default)]
pub struct MemorySource(pub Vec<Country>);

impl CountrySource for MemorySource {
    fn fetch(&self) -> Result<Vec<Country>, SourceError> {
        Ok(self.0.clone())
    }

    fn describe(&self) -> String {
        format!("{} in-memory records", self.0.len())
    }
}

/// The lifecycle of the one fetch a session performs.
#[derive(Debug)]
pub enum FetchState {
    Loading,
    Loaded(Vec<Country>),
    Failed(SourceError),
}

impl FetchState {
    /// Runs `source` to completion.
    pub fn resolve(source: &dyn CountrySource) -> Self {
        let described = source.describe();
        tracing::debug!(source = %described, "fetching countries");
        match source.fetch() {
            Ok(countries) => {
                tracing::info!(source = %described, count = countries.len(), "countries loaded");
                FetchState::Loaded(countries)
            }
            Err(err) => {
                tracing::error!(source = %described, error = %err, "fetch failed");
                FetchState::Failed(err)
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn error(&self) -> Option<&SourceError> {
        match self {
            FetchState::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// The loaded records, empty unless loaded.
    pub fn countries(&self) -> &[Country] {
        match self {
            FetchState::Loaded(countries) => countries,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Broken;

    impl CountrySource for Broken {
        fn fetch(&self) -> Result<Vec<Country>, SourceError> {
            Err(SourceError::MissingData)
        }

        fn describe(&self) -> String {
            "broken".to_string()
        }
    }

    #[test]
    fn resolve_success() {
        let source = MemorySource(vec![Country::new("CL", "Chile", "South America", None)]);
        let state = FetchState::resolve(&source);
        assert!(!state.is_loading());
        assert!(state.error().is_none());
        assert_eq!(state.countries().len(), 1);
    }

    #[test]
    fn resolve_failure() {
        let state = FetchState::resolve(&Broken);
        assert!(matches!(state.error(), Some(SourceError::MissingData)));
        assert!(state.countries().is_empty());
    }

    #[test]
    fn loading_has_no_records() {
        let state = FetchState::Loading;
        assert!(state.is_loading());
        assert!(state.error().is_none());
        assert!(state.countries().is_empty());
    }
}
