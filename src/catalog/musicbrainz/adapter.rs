//! Adapter layer: Convert MusicBrainz DTOs to catalog entries
//!
//! This is the ONLY place where MusicBrainz DTO types are converted to domain types.

use super::dto;
use crate::catalog::classify;
use crate::catalog::domain::Entry;

/// MBID of the "Various Artists" pseudo-artist
pub const VARIOUS_ARTISTS_ID: &str = "89ad4ac3-39f7-470e-963a-56509c546377";

/// Maximum entries kept from one search
pub const MAX_ENTRIES: usize = 50;

/// Filter a search response and convert the survivors, in API order
pub fn to_entries(response: dto::ArtistSearchResponse) -> Vec<Entry> {
    response
        .artists
        .into_iter()
        .filter(is_individual_artist)
        .filter(|artist| !artist.name.trim().is_empty())
        .take(MAX_ENTRIES)
        .map(to_entry)
        .collect()
}

/// Reject aggregate identities ("Various Artists", compilations) and type "Other"
fn is_individual_artist(artist: &dto::Artist) -> bool {
    let name = artist.name.to_lowercase();
    artist.id != VARIOUS_ARTISTS_ID
        && !name.contains("various")
        && !name.contains("compilation")
        && artist.artist_type.as_deref() != Some("Other")
}

fn to_entry(artist: dto::Artist) -> Entry {
    let year = artist
        .life_span
        .as_ref()
        .and_then(|span| span.begin.as_deref())
        .and_then(|begin| begin.split('-').next())
        .and_then(classify::parse_year);

    let country = artist
        .country
        .as_deref()
        .filter(|c| !c.is_empty());

    let description = match classify::first_non_blank([artist.disambiguation.as_deref()]) {
        Some(text) => text.to_string(),
        None => format!(
            "{} - Folk and traditional music artist from {}.",
            artist.name,
            country.unwrap_or("various regions")
        ),
    };

    Entry {
        region: classify::region_from_country_code(country),
        country: country.unwrap_or(classify::UNKNOWN_COUNTRY).to_string(),
        era: classify::classify_era(year),
        year,
        tags: classify::tags_or_default(artist.tags.iter().map(|t| t.name.as_str())),
        description,
        audio: None,
        media: vec![],
        image_url: Some(commons_image_url(&artist.name)),
        artist: artist.name.clone(),
        title: artist.name,
        id: artist.id,
    }
}

/// Wikimedia Commons redirect to a file named after the artist
fn commons_image_url(name: &str) -> String {
    format!(
        "https://commons.wikimedia.org/wiki/Special:FilePath/{}.jpg?width=300",
        urlencoding::encode(name)
    )
}
