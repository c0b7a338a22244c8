//! Adapter layer: Convert Internet Archive docs to catalog entries

use super::dto;
use crate::catalog::classify::{self, ARCHIVE_REGION_RULES};
use crate::catalog::domain::Entry;

const DEFAULT_ARTIST: &str = "Traditional Artists";
const DEFAULT_DESCRIPTION: &str =
    "Traditional folk recording from the Internet Archive collection.";

/// Convert a search response; a missing `response.docs` is an empty result
pub fn to_entries(response: dto::SearchResponse) -> Vec<Entry> {
    response
        .response
        .and_then(|r| r.docs)
        .unwrap_or_default()
        .into_iter()
        .filter_map(to_entry)
        .collect()
}

/// Docs without a title or identifier are skipped
fn to_entry(doc: dto::Doc) -> Option<Entry> {
    let identifier = doc.identifier.filter(|s| !s.trim().is_empty())?;
    let title = doc.title.filter(|s| !s.trim().is_empty())?;

    let year = doc.date.as_deref().and_then(classify::parse_year);
    let coverage = doc.coverage.as_ref().and_then(|c| c.first()).unwrap_or("");

    let artist = classify::first_non_blank([doc.creator.as_ref().and_then(|c| c.first())])
        .unwrap_or(DEFAULT_ARTIST)
        .to_string();

    let description = doc
        .description
        .as_ref()
        .map(|d| d.joined(" "))
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());

    let tags = match &doc.subject {
        Some(subject) => classify::tags_or_default(subject.values()),
        None => classify::tags_or_default(Vec::<&str>::new()),
    };

    let audio = download_url(&identifier);

    Some(Entry {
        id: format!("archive-{}", identifier),
        title,
        artist,
        region: classify::classify_region(coverage, ARCHIVE_REGION_RULES),
        country: classify::first_segment(coverage, &[',', ';']),
        era: classify::classify_era(year),
        year,
        tags,
        description,
        media: vec![audio.clone()],
        audio: Some(audio),
        image_url: Some(format!("https://archive.org/services/img/{}", identifier)),
    })
}

/// Conventional MP3 derivative location for an item
fn download_url(identifier: &str) -> String {
    format!(
        "https://archive.org/download/{}/{}.mp3",
        identifier, identifier
    )
}
