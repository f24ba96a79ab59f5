use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::graphql::CountriesData;
use super::{CountrySource, SourceError};
use crate::country::Country;

#[derive(Deserialize)]
#[serde(untagged)]
enum Snapshot {
    Envelope { data: CountriesData },
    Wrapped(CountriesData),
    Bare(Vec<Country>),
}

/// Reads countries from a JSON snapshot on disk.
///
/// Accepts a saved GraphQL response, `{"countries": [...]}`, or a bare array.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl CountrySource for FileSource {
    fn fetch(&self) -> Result<Vec<Country>, SourceError> {
        let text = std::fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        parse_snapshot(&text)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

pub fn parse_snapshot(text: &str) -> Result<Vec<Country>, SourceError> {
    let countries = match serde_json::from_str::<Snapshot>(text)? {
        Snapshot::Envelope { data } => data.countries,
        Snapshot::Wrapped(data) => data.countries,
        Snapshot::Bare(countries) => countries,
    };
    Ok(countries)
}
