//! Smithsonian Open Access API DTOs
//!
//! Only the fields we read are modelled; everything is optional because
//! records vary widely between Smithsonian units.
//!
//! API Reference: https://edan.si.edu/openaccess/apidocs/

use serde::{Deserialize, Serialize};

/// Search envelope
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SearchResponse {
    pub response: Option<SearchResults>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    pub row_count: Option<u64>,
    pub rows: Option<Vec<Row>>,
}

/// One catalog record
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Row {
    #[serde(default)]
    pub id: String,
    pub title: Option<String>,
    pub content: Option<Content>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    pub descriptive_non_repeating: Option<DescriptiveNonRepeating>,
    pub indexed_structured: Option<IndexedStructured>,
    pub freetext: Option<Freetext>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DescriptiveNonRepeating {
    pub title: Option<TextContent>,
    pub record_link: Option<String>,
}

/// Faceted, indexed fields
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct IndexedStructured {
    #[serde(default)]
    pub date: Vec<String>,
    #[serde(default)]
    pub place: Vec<String>,
    #[serde(default)]
    pub topic: Vec<String>,
    #[serde(default)]
    pub culture: Vec<String>,
    #[serde(default)]
    pub object_type: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Freetext {
    #[serde(default)]
    pub notes: Vec<TextContent>,
    #[serde(default)]
    pub physical_description: Vec<TextContent>,
}

/// `{"label": ..., "content": ...}` pair used throughout the record
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TextContent {
    pub label: Option<String>,
    pub content: Option<String>,
}

// ============================================================================
// CONTRACT TESTS
// ============================================================================
