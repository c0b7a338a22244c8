//! Descriptions of the archives behind the catalog, with attribution notes.

use super::domain::SourceKind;

/// Static description of one data source
#[derive(Debug, Clone, Copy)]
pub struct DataSource {
    /// Archive queried by the aggregator, if any
    pub kind: Option<SourceKind>,
    pub name: &'static str,
    pub source_type: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub usage_notes: &'static str,
}

pub const DATA_SOURCES: &[DataSource] = &[
    DataSource {
        kind: Some(SourceKind::MusicBrainz),
        name: "MusicBrainz",
        source_type: "API",
        description: "Folk-tagged metadata, comprehensive artist information",
        url: "https://musicbrainz.org/doc/MusicBrainz_API",
        usage_notes: "Attribute sources; rate limits apply. Open data community project.",
    },
    DataSource {
        kind: Some(SourceKind::InternetArchive),
        name: "Internet Archive",
        source_type: "Archive",
        description: "Digitized 78rpm folk and traditional recordings",
        url: "https://archive.org/details/georgeblood",
        usage_notes: "Check per-item rights statements; many recordings are public domain.",
    },
    DataSource {
        kind: Some(SourceKind::LibraryOfCongress),
        name: "Library of Congress",
        source_type: "Archive",
        description: "Public domain folk audio recordings from around the world",
        url: "https://www.loc.gov/audio/",
        usage_notes: "Free for non-commercial use; respect cultural origins and provide attribution.",
    },
    DataSource {
        kind: Some(SourceKind::Smithsonian),
        name: "Smithsonian Folkways",
        source_type: "Archive",
        description: "UNESCO traditional music recordings and cultural documentation",
        url: "https://folkways.si.edu/unesco",
        usage_notes: "Educational use; attribution required. Preserves cultural heritage.",
    },
    DataSource {
        kind: None,
        name: "Wikimedia Commons",
        source_type: "Media",
        description: "Artist portraits linked from MusicBrainz entries",
        url: "https://commons.wikimedia.org",
        usage_notes: "Images carry individual licenses; credit the uploader.",
    },
];

/// Description for an aggregated archive
pub fn describe(kind: SourceKind) -> Option<&'static DataSource> {
    DATA_SOURCES.iter().find(|s| s.kind == Some(kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_archive_is_described() {
        for kind in SourceKind::PRIORITY {
            let source = describe(kind).expect("archive should be described");
            assert_eq!(source.name, kind.name());
        }
    }
}
