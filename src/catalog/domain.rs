//! Internal domain models for the folk-music catalog.
//!
//! These types are OUR types - they don't change when an archive changes its API.
//! Every archive response gets converted into an [`Entry`] by that archive's adapter.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A normalized catalog entry: one folk-music artist, work or recording.
///
/// Entries are built once by an adapter and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Globally unique id (source tag prefix + native id; MusicBrainz ids are bare)
    pub id: String,
    pub title: String,
    /// Attribution, or a sentinel when the archive has none
    pub artist: String,
    pub region: Region,
    /// Best-effort country extraction, "Unknown" when nothing usable was found
    pub country: String,
    pub era: Era,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// At most five tags, never empty
    pub tags: Vec<String>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
    #[serde(default)]
    pub media: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Coarse geographic bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "Western Europe")]
    WesternEurope,
    #[serde(rename = "Sub-Saharan Africa")]
    SubSaharanAfrica,
    #[serde(rename = "North Africa")]
    NorthAfrica,
    #[serde(rename = "South Asia")]
    SouthAsia,
    #[serde(rename = "East Asia")]
    EastAsia,
    #[serde(rename = "North America")]
    NorthAmerica,
    #[serde(rename = "Central America")]
    CentralAmerica,
    #[serde(rename = "South America")]
    SouthAmerica,
    Oceania,
    Global,
}

impl Region {
    pub const ALL: [Region; 10] = [
        Region::WesternEurope,
        Region::SubSaharanAfrica,
        Region::NorthAfrica,
        Region::SouthAsia,
        Region::EastAsia,
        Region::NorthAmerica,
        Region::CentralAmerica,
        Region::SouthAmerica,
        Region::Oceania,
        Region::Global,
    ];

    /// Display label, identical to the serialized form
    pub fn label(self) -> &'static str {
        match self {
            Region::WesternEurope => "Western Europe",
            Region::SubSaharanAfrica => "Sub-Saharan Africa",
            Region::NorthAfrica => "North Africa",
            Region::SouthAsia => "South Asia",
            Region::EastAsia => "East Asia",
            Region::NorthAmerica => "North America",
            Region::CentralAmerica => "Central America",
            Region::SouthAmerica => "South America",
            Region::Oceania => "Oceania",
            Region::Global => "Global",
        }
    }

    /// Parse a label case-insensitively (used by the CLI filters)
    pub fn from_label(label: &str) -> Option<Region> {
        let wanted = label.trim();
        Self::ALL
            .into_iter()
            .find(|r| r.label().eq_ignore_ascii_case(wanted))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Historical period derived from a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Era {
    Ancient,
    Medieval,
    #[serde(rename = "16th Century")]
    Century16,
    #[serde(rename = "17th Century")]
    Century17,
    #[serde(rename = "18th Century")]
    Century18,
    #[serde(rename = "19th Century")]
    Century19,
    #[serde(rename = "20th Century")]
    Century20,
    #[serde(rename = "21st Century")]
    Century21,
    Traditional,
}

impl Era {
    pub const ALL: [Era; 9] = [
        Era::Ancient,
        Era::Medieval,
        Era::Century16,
        Era::Century17,
        Era::Century18,
        Era::Century19,
        Era::Century20,
        Era::Century21,
        Era::Traditional,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Era::Ancient => "Ancient",
            Era::Medieval => "Medieval",
            Era::Century16 => "16th Century",
            Era::Century17 => "17th Century",
            Era::Century18 => "18th Century",
            Era::Century19 => "19th Century",
            Era::Century20 => "20th Century",
            Era::Century21 => "21st Century",
            Era::Traditional => "Traditional",
        }
    }

    pub fn from_label(label: &str) -> Option<Era> {
        let wanted = label.trim();
        Self::ALL
            .into_iter()
            .find(|e| e.label().eq_ignore_ascii_case(wanted))
    }
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The archives we aggregate, in catalog priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    MusicBrainz,
    InternetArchive,
    LibraryOfCongress,
    Smithsonian,
}

impl SourceKind {
    /// Concatenation order used by the aggregator
    pub const PRIORITY: [SourceKind; 4] = [
        SourceKind::MusicBrainz,
        SourceKind::InternetArchive,
        SourceKind::LibraryOfCongress,
        SourceKind::Smithsonian,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SourceKind::MusicBrainz => "MusicBrainz",
            SourceKind::InternetArchive => "Internet Archive",
            SourceKind::LibraryOfCongress => "Library of Congress",
            SourceKind::Smithsonian => "Smithsonian Folkways",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors that can occur while fetching one archive
#[derive(Debug, Clone, thiserror::Error)]
pub enum SourceError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {reason}")]
    Http { status: u16, reason: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Missing API credential: {0}")]
    MissingCredential(&'static str),
}

/// Result of asking one archive for entries.
///
/// The aggregator only ever pulls lists out of this; failures never cross it.
#[derive(Debug, Clone)]
pub enum SourceOutcome {
    /// The archive answered; the list may still be empty
    Fetched(Vec<Entry>),
    /// The archive could not be used this run
    Unavailable {
        error: SourceError,
        /// Entries served instead (only MusicBrainz bundles any)
        fallback: Vec<Entry>,
    },
}

impl SourceOutcome {
    pub fn into_entries(self) -> Vec<Entry> {
        match self {
            SourceOutcome::Fetched(entries) => entries,
            SourceOutcome::Unavailable { fallback, .. } => fallback,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, SourceOutcome::Fetched(_))
    }
}
