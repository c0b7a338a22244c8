//! Internet Archive advanced-search DTOs
//!
//! The archive is loose about field shapes: `creator`, `subject`, `description`
//! and `coverage` arrive as a bare string when there is one value and as an
//! array when there are several. [`OneOrMany`] accepts both.
//!
//! API Reference: https://archive.org/advancedsearch.php

use serde::{Deserialize, Serialize};

/// Top-level search envelope
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SearchResponse {
    pub response: Option<SearchResults>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    pub num_found: Option<u64>,
    pub docs: Option<Vec<Doc>>,
}

/// One archive item
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Doc {
    pub identifier: Option<String>,
    pub title: Option<String>,
    pub creator: Option<OneOrMany>,
    /// Usually ISO-8601 ("1928-01-01T00:00:00Z")
    pub date: Option<String>,
    pub description: Option<OneOrMany>,
    pub subject: Option<OneOrMany>,
    pub coverage: Option<OneOrMany>,
    pub collection: Option<OneOrMany>,
}

/// A field that may be a single string or a list of strings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    pub fn values(&self) -> Vec<&str> {
        match self {
            OneOrMany::One(value) => vec![value.as_str()],
            OneOrMany::Many(values) => values.iter().map(String::as_str).collect(),
        }
    }

    pub fn first(&self) -> Option<&str> {
        self.values().into_iter().next()
    }

    pub fn joined(&self, separator: &str) -> String {
        self.values().join(separator)
    }
}

// ============================================================================
// CONTRACT TESTS
// ============================================================================

#[cfg(test)]
mod contract_tests {
    use super::*;

    #[test]
    fn test_parse_search_response() {
        let json = r#"{
            "responseHeader": {"status": 0, "QTime": 12},
            "response": {
                "numFound": 2,
                "start": 0,
                "docs": [
                    {
                        "identifier": "78_the-cuckoo_clarence-ashley",
                        "title": "The Cuckoo",
                        "creator": "Clarence Ashley",
                        "date": "1929-01-01T00:00:00Z",
                        "subject": ["folk", "banjo"],
                        "coverage": "United States, North Carolina",
                        "collection": ["georgeblood", "78rpm"]
                    },
                    {
                        "identifier": "78_lament",
                        "title": "Lament",
                        "creator": ["Seamus Ennis", "Unknown"],
                        "description": ["Uilleann pipes.", "Side A."],
                        "subject": "traditional"
                    }
                ]
            }
        }"#;

        let parsed: SearchResponse = serde_json::from_str(json).expect("Should parse search");
        let results = parsed.response.expect("response present");
        assert_eq!(results.num_found, Some(2));

        let docs = results.docs.expect("docs present");
        assert_eq!(docs[0].creator.as_ref().and_then(|c| c.first()), Some("Clarence Ashley"));
        assert_eq!(docs[0].subject.as_ref().map(|s| s.values()), Some(vec!["folk", "banjo"]));
        assert_eq!(docs[1].creator.as_ref().and_then(|c| c.first()), Some("Seamus Ennis"));
        assert_eq!(
            docs[1].description.as_ref().map(|d| d.joined(" ")),
            Some("Uilleann pipes. Side A.".to_string())
        );
        assert_eq!(docs[1].subject, Some(OneOrMany::One("traditional".to_string())));
    }

    #[test]
    fn test_parse_without_response() {
        let parsed: SearchResponse =
            serde_json::from_str(r#"{"responseHeader": {"status": 0}}"#).expect("Should parse");
        assert!(parsed.response.is_none());
    }
}
