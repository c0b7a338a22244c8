//! MusicBrainz API Data Transfer Objects
//!
//! These types match EXACTLY what the MusicBrainz artist search returns.
//! DO NOT use these types outside the musicbrainz module - convert to domain types.
//!
//! API Reference: https://musicbrainz.org/doc/MusicBrainz_API/Search#Artist

use serde::{Deserialize, Serialize};

/// Artist search response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArtistSearchResponse {
    pub artists: Vec<Artist>,
}

/// Artist search hit
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Artist {
    /// MusicBrainz artist ID
    pub id: String,
    pub name: String,
    /// Person, Group, Orchestra, Choir, Character, Other
    #[serde(rename = "type")]
    pub artist_type: Option<String>,
    /// ISO 3166-1 country code
    pub country: Option<String>,
    pub life_span: Option<LifeSpan>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    pub disambiguation: Option<String>,
}

/// Active period; dates are YYYY, YYYY-MM or YYYY-MM-DD
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LifeSpan {
    pub begin: Option<String>,
    pub end: Option<String>,
}

/// Folksonomy tag
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Tag {
    pub name: String,
    #[serde(default)]
    pub count: i32,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// ============================================================================

#[cfg(test)]
mod contract_tests {
    use super::*;

    #[test]
    fn test_parse_artist_search() {
        let json = r#"{
            "created": "2025-01-01T00:00:00.000Z",
            "count": 2,
            "offset": 0,
            "artists": [
                {
                    "id": "0383dadf-2a4e-4d10-a46a-e9e041da8eb3",
                    "type": "Group",
                    "score": 100,
                    "name": "The Chieftains",
                    "country": "IE",
                    "life-span": {"begin": "1962", "ended": null},
                    "tags": [
                        {"count": 5, "name": "irish"},
                        {"count": 3, "name": "folk"}
                    ],
                    "disambiguation": "Irish traditional band"
                },
                {
                    "id": "abc",
                    "name": "Nameless"
                }
            ]
        }"#;

        let response: ArtistSearchResponse =
            serde_json::from_str(json).expect("Should parse artist search");

        assert_eq!(response.artists.len(), 2);
        let first = &response.artists[0];
        assert_eq!(first.name, "The Chieftains");
        assert_eq!(first.artist_type.as_deref(), Some("Group"));
        assert_eq!(first.country.as_deref(), Some("IE"));
        assert_eq!(
            first.life_span.as_ref().and_then(|l| l.begin.as_deref()),
            Some("1962")
        );
        assert_eq!(first.tags[1].name, "folk");

        let second = &response.artists[1];
        assert!(second.tags.is_empty());
        assert!(second.life_span.is_none());
    }

    #[test]
    fn test_missing_artists_array_is_an_error() {
        let result = serde_json::from_str::<ArtistSearchResponse>(r#"{"error": "busy"}"#);
        assert!(result.is_err());
    }
}
