use reqwest::Client;
use thiserror::Error;

use crate::config::{SearchConfig, SecureString};

use super::types::{MovieRecord, SearchResult};

/// Errors that can occur while searching the catalog.
#[derive(Debug, Error)]
pub enum SearchError {
    /// No API key available for this session.
    #[error("API key is missing: {reason}")]
    MissingCredential { reason: String },

    /// Transport-level failure (connect, TLS, body read).
    #[error("Search request failed: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status.
    #[error("Search request failed with status {status}")]
    Status { status: u16 },

    /// The response body did not carry the expected results array.
    #[error("Unexpected search response format")]
    MalformedResponse,
}

/// Client for the third-party movie search endpoint.
pub struct SearchClient {
    client: Client,
    config: SearchConfig,
}

impl SearchClient {
    pub fn new(config: SearchConfig) -> Self {
        let client = Client::builder()
            .build()
            .expect("Failed to build search client");
        Self { client, config }
    }

    /// Issue one search request and normalize the response.
    ///
    /// The query is sent trimmed with the fixed parameters the service
    /// expects: adult filter off, en-US locale, first page only.
    pub async fn search(
        &self,
        query: &str,
        key: &SecureString,
    ) -> Result<Vec<SearchResult>, SearchError> {
        let url = format!("{}/search/movie", self.config.api_base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("api_key", key.expose()),
                ("query", query.trim()),
                ("include_adult", "false"),
                ("language", "en-US"),
                ("page", "1"),
            ])
            .send()
            .await
            .map_err(|source| SearchError::Transport { source })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(status = status.as_u16(), "search request rejected");
            return Err(SearchError::Status {
                status: status.as_u16(),
            });
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|source| SearchError::Transport { source })?;

        normalize_response(&body, &self.config.image_base_url)
    }
}

/// Validate the response shape and map records into normalized results.
///
/// A body without a `results` array is malformed; individual records that
/// fail to deserialize are skipped rather than failing the whole response.
pub fn normalize_response(
    body: &serde_json::Value,
    image_base_url: &str,
) -> Result<Vec<SearchResult>, SearchError> {
    let records = body
        .get("results")
        .and_then(|v| v.as_array())
        .ok_or(SearchError::MalformedResponse)?;

    Ok(records
        .iter()
        .filter_map(|v| serde_json::from_value::<MovieRecord>(v.clone()).ok())
        .map(|r| SearchResult::from_record(r, image_base_url))
        .collect())
}
