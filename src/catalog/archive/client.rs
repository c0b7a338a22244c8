//! Internet Archive HTTP client
//!
//! Queries the advanced-search endpoint for folk/traditional audio in the
//! George Blood 78rpm collection. No API key required.

use super::{adapter, dto};
use crate::catalog::domain::{Entry, SourceError};
use crate::catalog::http;

const SEARCH_QUERY: &str =
    "collection:(georgeblood) AND mediatype:audio AND (folk OR traditional)";
const FIELDS: &str = "identifier,title,creator,date,description,subject,coverage,collection";
const ROWS: u32 = 50;

/// Internet Archive API client
pub struct ArchiveClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl ArchiveClient {
    pub fn new(user_agent: &str) -> Self {
        Self {
            http_client: http::build_client(user_agent),
            base_url: "https://archive.org".to_string(),
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
            tracing::warn!("Failed to fetch from Internet Archive: {}", e);
            Vec::new()
        })
    }

    pub async fn try_fetch(&self) -> Result<Vec<Entry>, SourceError> {
        let url = format!(
            "{}/advancedsearch.php?q={}&fl[]={}&rows={}&output=json",
            self.base_url,
            urlencoding::encode(SEARCH_QUERY),
            FIELDS,
            ROWS
        );
        let response: dto::SearchResponse = http::get_json(&self.http_client, &url).await?;
        Ok(adapter::to_entries(response))
    }
}

impl Default for ArchiveClient {
    fn default() -> Self {
        Self::new(http::DEFAULT_USER_AGENT)
    }
}
