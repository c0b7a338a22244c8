//! Adapter layer: Convert Smithsonian Open Access rows to catalog entries

use super::dto;
use crate::catalog::classify::{self, SMITHSONIAN_REGION_RULES};
use crate::catalog::domain::Entry;

const DEFAULT_ARTIST: &str = "Traditional Artists";
const DEFAULT_DESCRIPTION: &str = "Traditional music from the Smithsonian Folkways collection.";

/// Convert a search response, keeping only sound/audio records
pub fn to_entries(response: dto::SearchResponse) -> Vec<Entry> {
    response
        .response
        .and_then(|r| r.rows)
        .unwrap_or_default()
        .into_iter()
        .filter(is_audio_record)
        .filter_map(to_entry)
        .collect()
}

/// Any `object_type` mentioning "sound" or "audio", case-insensitively
fn is_audio_record(row: &dto::Row) -> bool {
    row.content
        .as_ref()
        .and_then(|c| c.indexed_structured.as_ref())
        .is_some_and(|indexed| {
            indexed.object_type.iter().any(|t| {
                let t = t.to_lowercase();
                t.contains("sound") || t.contains("audio")
            })
        })
}

fn to_entry(row: dto::Row) -> Option<Entry> {
    if row.id.trim().is_empty() {
        return None;
    }

    let content = row.content.unwrap_or_default();
    let indexed = content.indexed_structured.unwrap_or_default();
    let freetext = content.freetext.unwrap_or_default();

    let structured_title = content
        .descriptive_non_repeating
        .as_ref()
        .and_then(|d| d.title.as_ref())
        .and_then(|t| t.content.as_deref());
    let title = classify::first_non_blank([structured_title, row.title.as_deref()])?.to_string();

    let place = indexed.place.first().map(String::as_str).unwrap_or("");
    let culture = indexed.culture.first().map(String::as_str).unwrap_or("");
    let year = indexed.date.first().and_then(|d| classify::parse_year(d));

    let description = classify::first_non_blank([
        freetext.notes.first().and_then(|n| n.content.as_deref()),
        freetext
            .physical_description
            .first()
            .and_then(|p| p.content.as_deref()),
    ])
    .unwrap_or(DEFAULT_DESCRIPTION)
    .to_string();

    Some(Entry {
        id: format!("smithsonian-{}", row.id),
        title,
        artist: classify::first_non_blank([Some(culture)])
            .unwrap_or(DEFAULT_ARTIST)
            .to_string(),
        region: classify::classify_region(
            &format!("{} {}", place, culture),
            SMITHSONIAN_REGION_RULES,
        ),
        country: classify::first_non_blank([Some(place)])
            .unwrap_or(classify::UNKNOWN_COUNTRY)
            .to_string(),
        era: classify::classify_era(year),
        year,
        tags: classify::tags_or_default(&indexed.topic),
        description,
        audio: None,
        media: vec![],
        image_url: None,
    })
}
