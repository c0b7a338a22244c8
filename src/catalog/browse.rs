//! Searching, filtering and sorting an aggregated catalog.

use std::str::FromStr;

use super::domain::{Entry, Era, Region};

/// Result ordering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortBy {
    /// Catalog order (source priority, then API order)
    #[default]
    Relevance,
    /// Year descending; undated entries last
    Newest,
    /// Era label, alphabetical
    Era,
    /// Region label, alphabetical
    Region,
}

impl FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "relevance" => Ok(SortBy::Relevance),
            "newest" => Ok(SortBy::Newest),
            "era" => Ok(SortBy::Era),
            "region" => Ok(SortBy::Region),
            other => Err(format!(
                "unknown sort order '{}' (expected relevance, newest, era or region)",
                other
            )),
        }
    }
}

/// Active browse filters. The default matches everything.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    /// Case-insensitive substring over title, artist, country, region and tags
    pub query: String,
    pub region: Option<Region>,
    pub era: Option<Era>,
    /// Entry must carry at least one of these tags (exact match)
    pub tags: Vec<String>,
    pub sort_by: SortBy,
}

impl FilterState {
    pub fn matches(&self, entry: &Entry) -> bool {
        self.matches_query(entry)
            && self.region.is_none_or(|r| entry.region == r)
            && self.era.is_none_or(|e| entry.era == e)
            && (self.tags.is_empty() || self.tags.iter().any(|t| entry.tags.contains(t)))
    }

    fn matches_query(&self, entry: &Entry) -> bool {
        let query = self.query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        let hit = |text: &str| text.to_lowercase().contains(&query);

        hit(&entry.title)
            || hit(&entry.artist)
            || hit(&entry.country)
            || hit(entry.region.label())
            || entry.tags.iter().any(|t| hit(t))
    }

    /// Filter then sort. Sorting is stable, so ties keep catalog order.
    pub fn apply<'a>(&self, entries: &'a [Entry]) -> Vec<&'a Entry> {
        let mut result: Vec<&Entry> = entries.iter().filter(|e| self.matches(e)).collect();

        match self.sort_by {
            SortBy::Relevance => {}
            SortBy::Newest => result.sort_by_key(|e| std::cmp::Reverse(e.year.unwrap_or(0))),
            SortBy::Era => result.sort_by(|a, b| a.era.label().cmp(b.era.label())),
            SortBy::Region => result.sort_by(|a, b| a.region.label().cmp(b.region.label())),
        }

        result
    }
}
