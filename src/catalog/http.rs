//! Shared HTTP plumbing for the archive clients.

use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;

use super::domain::SourceError;

/// Descriptive client identifier sent with every request
pub const DEFAULT_USER_AGENT: &str = concat!(
    "FolkCatalog/",
    env!("CARGO_PKG_VERSION"),
    " (https://github.com/folk-catalog/folk-catalog)"
);

/// Upper bound for one archive request
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// `user_agent` if it is a legal header value, otherwise the default identifier
pub fn checked_user_agent(user_agent: &str) -> &str {
    match HeaderValue::from_str(user_agent) {
        Ok(_) if !user_agent.trim().is_empty() => user_agent,
        _ => {
            tracing::warn!(
                "Configured user agent {:?} is not a valid header value, using {}",
                user_agent,
                DEFAULT_USER_AGENT
            );
            DEFAULT_USER_AGENT
        }
    }
}

/// Build a client that identifies itself and asks for JSON
pub fn build_client(user_agent: &str) -> reqwest::Client {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    reqwest::Client::builder()
        .gzip(true)
        .timeout(REQUEST_TIMEOUT)
        .user_agent(checked_user_agent(user_agent))
        .default_headers(headers)
        .build()
        .expect("Failed to build HTTP client")
}

/// GET `url` and decode a JSON body, mapping each failure class onto [`SourceError`]
pub async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
) -> Result<T, SourceError> {
    tracing::debug!(url = %redact(url), "GET");

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| SourceError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::Http {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| SourceError::Parse(e.to_string()))
}

/// Hide credential values before a URL is logged
fn redact(url: &str) -> String {
    let Some((base, query)) = url.split_once('?') else {
        return url.to_string();
    };
    let query: Vec<String> = query
        .split('&')
        .map(|pair| match pair.split_once('=') {
            Some((key, _)) if key == "api_key" => format!("{}=***", key),
            _ => pair.to_string(),
        })
        .collect();
    format!("{}?{}", base, query.join("&"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent_format() {
        assert!(DEFAULT_USER_AGENT.starts_with("FolkCatalog/"));
    }

    #[test]
    fn test_checked_user_agent() {
        assert_eq!(checked_user_agent("Tester/1.0"), "Tester/1.0");
        assert_eq!(checked_user_agent("Folk\u{7}Catalog"), DEFAULT_USER_AGENT);
        assert_eq!(checked_user_agent("FolkCatalog/1.0\n(x)"), DEFAULT_USER_AGENT);
        assert_eq!(checked_user_agent("  "), DEFAULT_USER_AGENT);
    }

    #[test]
    fn test_build_client_survives_bad_user_agent() {
        let _client = build_client("FolkCatalog/1.0\n(x)");
    }

    #[test]
    fn test_redact_api_key() {
        assert_eq!(
            redact("https://api.si.edu/search?q=folk&api_key=secret&rows=50"),
            "https://api.si.edu/search?q=folk&api_key=***&rows=50"
        );
        assert_eq!(redact("https://loc.gov/search"), "https://loc.gov/search");
    }
}
