//! Library of Congress HTTP client
//!
//! Searches loc.gov for folk sound recordings. No API key required.

use super::{adapter, dto};
use crate::catalog::domain::{Entry, SourceError};
use crate::catalog::http;

/// Library of Congress API client
pub struct LocClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl LocClient {
    pub fn new(user_agent: &str) -> Self {
        Self {
            http_client: http::build_client(user_agent),
            base_url: "https://www.loc.gov".to_string(),
        }
    }

    /// Create a client for testing with custom base URL
    #[cfg(test)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http_client: http::build_client(http::DEFAULT_USER_AGENT),
            base_url: base_url.into(),
        }
    }

    /// Fetch entries; any failure is logged and yields an empty list
    pub async fn fetch(&self) -> Vec<Entry> {
        self.try_fetch().await.unwrap_or_else(|e| {
            tracing::warn!("Failed to fetch from Library of Congress: {}", e);
            Vec::new()
        })
    }

    pub async fn try_fetch(&self) -> Result<Vec<Entry>, SourceError> {
        let url = format!(
            "{}/search/?q=folk+music+audio&fo=json&c=50&fa=original-format:sound+recording",
            self.base_url
        );
        let response: dto::SearchResponse = http::get_json(&self.http_client, &url).await?;
        Ok(adapter::to_entries(response))
    }
}

impl Default for LocClient {
    fn default() -> Self {
        Self::new(http::DEFAULT_USER_AGENT)
    }
}
