use std::time::Duration;

use serde::Deserialize;
use serde_json::json;

use super::{CountrySource, SourceError};
use crate::country::Country;

pub const DEFAULT_ENDPOINT: &str = "https://countries.trevorblades.com/";

pub const COUNTRIES_QUERY: &str = "query GetCountries {
  countries {
    code
    name
    continent {
      name
    }
    currency
    emoji
  }
}";

#[derive(Debug, Deserialize)]
pub(super) struct CountriesData {
    pub(super) countries: Vec<Country>,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    data: Option<CountriesData>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

/// Fetches countries from a GraphQL endpoint.
#[derive(Debug, Clone)]
pub struct GraphQlSource {
    endpoint: String,
    timeout: Duration,
}

impl GraphQlSource {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn http_error(&self, source: reqwest::Error) -> SourceError {
        SourceError::Http {
            endpoint: self.endpoint.clone(),
            source,
        }
    }
}

impl CountrySource for GraphQlSource {
    fn fetch(&self) -> Result<Vec<Country>, SourceError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| self.http_error(e))?;

        let body = client
            .post(&self.endpoint)
            .json(&json!({ "query": COUNTRIES_QUERY }))
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.text())
            .map_err(|e| self.http_error(e))?;

        tracing::trace!(bytes = body.len(), "graphql response received");
        parse_response(&body)
    }

    fn describe(&self) -> String {
        format!("graphql {}", self.endpoint)
    }
}

/// Decodes a GraphQL response body.
///
/// Errors reported by the server win over any partial data.
pub fn parse_response(body: &str) -> Result<Vec<Country>, SourceError> {
    let response: GraphQlResponse = serde_json::from_str(body)?;

    if !response.errors.is_empty() {
        let messages: Vec<&str> = response.errors.iter().map(|e| e.message.as_str()).collect();
        return Err(SourceError::GraphQl(messages.join("; ")));
    }

    response
        .data
        .map(|data| data.countries)
        .ok_or(SourceError::MissingData)
}
