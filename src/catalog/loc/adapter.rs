//! Adapter layer: Convert Library of Congress results to catalog entries

use super::dto;
use crate::catalog::classify::{self, LOC_REGION_RULES};
use crate::catalog::domain::Entry;

const DEFAULT_ARTIST: &str = "Unknown Artist";
const DEFAULT_DESCRIPTION: &str =
    "Traditional folk recording from the Library of Congress collection.";

/// Convert search results, skipping untitled or id-less hits and whole-collection records
pub fn to_entries(response: dto::SearchResponse) -> Vec<Entry> {
    response
        .results
        .into_iter()
        .filter(is_single_item)
        .map(to_entry)
        .collect()
}

fn is_single_item(result: &dto::SearchResult) -> bool {
    if result.id.trim().is_empty() {
        return false;
    }
    match result.title.as_deref() {
        Some(title) if !title.trim().is_empty() => {
            !title.to_lowercase().contains("collection")
        }
        _ => false,
    }
}

fn to_entry(result: dto::SearchResult) -> Entry {
    let year = result.date.as_deref().and_then(classify::parse_year);
    let location = result.location.first().map(String::as_str).unwrap_or("");

    let artist = classify::first_non_blank([result.contributor.first().map(String::as_str)])
        .unwrap_or(DEFAULT_ARTIST)
        .to_string();

    let description = Some(result.description.join(" "))
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());

    let url = result.url.clone().filter(|u| !u.is_empty());

    Entry {
        id: format!("loc-{}", result.id),
        title: result.title.clone().unwrap_or_default(),
        artist,
        region: classify::classify_region(location, LOC_REGION_RULES),
        country: classify::last_segment(location, "--"),
        era: classify::classify_era(year),
        year,
        tags: classify::tags_or_default(&result.subject),
        description,
        media: url.iter().cloned().collect(),
        audio: url,
        image_url: result.image_url.first().cloned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::domain::{Era, Region};

    fn make_result(id: &str, title: &str) -> dto::SearchResult {
        dto::SearchResult {
            id: id.to_string(),
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_convert_full_result() {
        let result = dto::SearchResult {
            description: vec!["Sung by Aunt Molly Jackson.".into(), "Field recording.".into()],
            subject: vec!["ballads".into()],
            contributor: vec!["jackson, aunt molly".into()],
            date: Some("1937-05".to_string()),
            location: vec!["united states -- kentucky -- clay county".into()],
            image_url: vec!["https://tile.loc.gov/a.gif".into(), "https://tile.loc.gov/b.gif".into()],
            url: Some("https://www.loc.gov/item/afc1937002_a001/".to_string()),
            ..make_result("http://www.loc.gov/item/afc1937002_a001/", "Barbara Allen")
        };

        let entries = to_entries(dto::SearchResponse { results: vec![result] });
        let entry = &entries[0];

        assert_eq!(entry.id, "loc-http://www.loc.gov/item/afc1937002_a001/");
        assert_eq!(entry.artist, "jackson, aunt molly");
        assert_eq!(entry.year, Some(1937));
        assert_eq!(entry.era, Era::Century20);
        assert_eq!(entry.region, Region::NorthAmerica);
        assert_eq!(entry.country, "clay county");
        assert_eq!(entry.description, "Sung by Aunt Molly Jackson. Field recording.");
        assert_eq!(entry.audio.as_deref(), Some("https://www.loc.gov/item/afc1937002_a001/"));
        assert_eq!(entry.media, vec!["https://www.loc.gov/item/afc1937002_a001/"]);
        assert_eq!(entry.image_url.as_deref(), Some("https://tile.loc.gov/a.gif"));
    }

    #[test]
    fn test_defaults() {
        let entries = to_entries(dto::SearchResponse {
            results: vec![make_result("x", "Cotton-Eyed Joe")],
        });
        let entry = &entries[0];

        assert_eq!(entry.artist, "Unknown Artist");
        assert_eq!(entry.country, "Unknown");
        assert_eq!(entry.region, Region::Global);
        assert_eq!(entry.era, Era::Traditional);
        assert_eq!(entry.tags, vec!["folk", "traditional"]);
        assert_eq!(entry.description, DEFAULT_DESCRIPTION);
        assert!(entry.audio.is_none());
        assert!(entry.media.is_empty());
        assert!(entry.image_url.is_none());
    }

    #[test]
    fn test_skips_collections_and_untitled() {
        let untitled = dto::SearchResult {
            title: None,
            ..make_result("u", "")
        };
        let results = vec![
            make_result("c", "Alan Lomax Collection"),
            untitled,
            make_result("k", "John Henry"),
        ];

        let entries = to_entries(dto::SearchResponse { results });

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "loc-k");
    }
}
