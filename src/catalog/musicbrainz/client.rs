//! MusicBrainz HTTP client
//!
//! Searches folk-tagged artists on the MusicBrainz web service.
//! See: https://musicbrainz.org/doc/MusicBrainz_API
//!
//! IMPORTANT: MusicBrainz requires a descriptive User-Agent header.

use super::{adapter, dto, sample};
use crate::catalog::domain::{Entry, SourceError};
use crate::catalog::http;

/// Folk artists that are also tagged traditional or world. Kept pre-encoded.
const ARTIST_QUERY: &str = "tag:folk%20AND%20(tag:traditional%20OR%20tag:world)";

/// MusicBrainz API client
pub struct MusicBrainzClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl MusicBrainzClient {
    /// Create a new client
    pub fn new(user_agent: &str) -> Self {
        Self {
            http_client: http::build_client(user_agent),
            base_url: "https://musicbrainz.org/ws/2".to_string(),
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

    /// Fetch folk artists as entries.
    ///
    /// Never fails: on any error the bundled sample catalog is returned instead.
    pub async fn fetch(&self) -> Vec<Entry> {
        match self.try_fetch().await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("MusicBrainz fetch failed, using sample data: {}", e);
                sample::sample_entries()
            }
        }
    }

    /// Fetch folk artists, reporting failures
    pub async fn try_fetch(&self) -> Result<Vec<Entry>, SourceError> {
        let url = format!(
            "{}/artist/?query={}&fmt=json&limit=100",
            self.base_url, ARTIST_QUERY
        );
        let response: dto::ArtistSearchResponse = http::get_json(&self.http_client, &url).await?;
        Ok(adapter::to_entries(response))
    }
}

impl Default for MusicBrainzClient {
    fn default() -> Self {
        Self::new(http::DEFAULT_USER_AGENT)
    }
}
