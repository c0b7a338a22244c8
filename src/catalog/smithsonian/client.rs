//! Smithsonian Open Access HTTP client
//!
//! Requires an api.data.gov key. Without one the source is disabled:
//! no request is made and the source contributes nothing.

use super::{adapter, dto};
use crate::catalog::domain::{Entry, SourceError};
use crate::catalog::http;

/// Environment variable holding the api.data.gov key
pub const API_KEY_VAR: &str = "SMITHSONIAN_API_KEY";

/// Smithsonian Open Access API client
pub struct SmithsonianClient {
    api_key: Option<String>,
    http_client: reqwest::Client,
    base_url: String,
}

impl SmithsonianClient {
    /// Create a new client. A missing or blank key disables the source.
    pub fn new(api_key: Option<String>, user_agent: &str) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            http_client: http::build_client(user_agent),
            base_url: "https://api.si.edu/openaccess/api/v1.0".to_string(),
        }
    }

    /// Create a client for testing with custom base URL
    #[cfg(test)]
    pub fn with_base_url(api_key: Option<&str>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.map(String::from),
            http_client: http::build_client(http::DEFAULT_USER_AGENT),
            base_url: base_url.into(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Fetch entries; a missing key or any failure is logged and yields an empty list
    pub async fn fetch(&self) -> Vec<Entry> {
        match self.try_fetch().await {
            Ok(entries) => entries,
            Err(SourceError::MissingCredential(_)) => {
                tracing::warn!("Smithsonian API key not configured. Skipping Smithsonian data.");
                Vec::new()
            }
            Err(e) => {
                tracing::warn!("Failed to fetch from Smithsonian: {}", e);
                Vec::new()
            }
        }
    }

    pub async fn try_fetch(&self) -> Result<Vec<Entry>, SourceError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(SourceError::MissingCredential(API_KEY_VAR))?;

        let url = format!(
            "{}/search?q=folk+music+audio&api_key={}&rows=50",
            self.base_url,
            urlencoding::encode(api_key)
        );
        let response: dto::SearchResponse = http::get_json(&self.http_client, &url).await?;
        Ok(adapter::to_entries(response))
    }
}
