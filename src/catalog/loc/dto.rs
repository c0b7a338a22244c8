//! Library of Congress JSON API DTOs
//!
//! API Reference: https://www.loc.gov/apis/json-and-yaml/

use serde::{Deserialize, Serialize};

/// Search response (`fo=json`)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
}

/// One search hit
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SearchResult {
    /// Item URL, used as the native identifier
    #[serde(default)]
    pub id: String,
    pub title: Option<String>,
    #[serde(default)]
    pub description: Vec<String>,
    #[serde(default)]
    pub subject: Vec<String>,
    #[serde(default)]
    pub contributor: Vec<String>,
    pub date: Option<String>,
    #[serde(default)]
    pub original_format: Vec<String>,
    /// Hierarchical, "--" separated ("united states -- kentucky")
    #[serde(default)]
    pub location: Vec<String>,
    #[serde(default)]
    pub image_url: Vec<String>,
    pub url: Option<String>,
}

// ============================================================================
// CONTRACT TESTS
// ============================================================================
