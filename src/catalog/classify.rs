//! Shared, table-driven classification helpers.
//!
//! Every adapter maps raw date and location text onto the same coarse buckets.
//! The logic lives here once; adapters only choose which rule table to apply.

use super::domain::{Era, Region};

/// Maximum number of tags kept per entry
pub const MAX_TAGS: usize = 5;

/// Tags used when an archive provides none
pub const DEFAULT_TAGS: [&str; 2] = ["folk", "traditional"];

/// Fallback for country extraction
pub const UNKNOWN_COUNTRY: &str = "Unknown";

/// Ascending era breakpoints: a year strictly below the bound falls in that era.
const ERA_BREAKPOINTS: [(i32, Era); 7] = [
    (1000, Era::Ancient),
    (1500, Era::Medieval),
    (1600, Era::Century16),
    (1700, Era::Century17),
    (1800, Era::Century18),
    (1900, Era::Century19),
    (2000, Era::Century20),
];

/// Map an optional year onto an era. Total for every `i32`.
pub fn classify_era(year: Option<i32>) -> Era {
    let Some(year) = year else {
        return Era::Traditional;
    };

    ERA_BREAKPOINTS
        .iter()
        .find(|(bound, _)| year < *bound)
        .map(|(_, era)| *era)
        .unwrap_or(Era::Century21)
}

/// One substring rule: matches when the text contains any of `any_of`
/// and none of `none_of`. Needles must be lowercase.
#[derive(Debug, Clone, Copy)]
pub struct RegionRule {
    pub region: Region,
    pub any_of: &'static [&'static str],
    pub none_of: &'static [&'static str],
}

impl RegionRule {
    const fn new(region: Region, any_of: &'static [&'static str]) -> Self {
        Self {
            region,
            any_of,
            none_of: &[],
        }
    }

    const fn excluding(mut self, none_of: &'static [&'static str]) -> Self {
        self.none_of = none_of;
        self
    }

    fn matches(&self, lowered: &str) -> bool {
        self.any_of.iter().any(|needle| lowered.contains(needle))
            && !self.none_of.iter().any(|needle| lowered.contains(needle))
    }
}

/// Classify free text against an ordered rule table. First match wins; no match is `Global`.
pub fn classify_region(text: &str, rules: &[RegionRule]) -> Region {
    let lowered = text.to_lowercase();
    rules
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map(|rule| rule.region)
        .unwrap_or(Region::Global)
}

// Egypt and Morocco are checked first in every table so that they never land
// in Sub-Saharan Africa (or anywhere else), whatever the string also mentions.
const EGYPT_MOROCCO: RegionRule = RegionRule::new(Region::NorthAfrica, &["egypt", "morocco"]);

/// Internet Archive `coverage` field
pub const ARCHIVE_REGION_RULES: &[RegionRule] = &[
    EGYPT_MOROCCO,
    RegionRule::new(
        Region::WesternEurope,
        &["europe", "british", "ireland", "france"],
    ),
    RegionRule::new(Region::SubSaharanAfrica, &["africa"]).excluding(&["north"]),
    RegionRule::new(Region::NorthAfrica, &["algeria"]),
    RegionRule::new(Region::SouthAsia, &["india", "pakistan", "bangladesh"]),
    RegionRule::new(Region::EastAsia, &["china", "japan", "korea"]),
    RegionRule::new(
        Region::NorthAmerica,
        &["united states", "canada", "america"],
    ),
    RegionRule::new(Region::CentralAmerica, &["mexico", "guatemala", "central"]),
    RegionRule::new(
        Region::SouthAmerica,
        &["brazil", "argentina", "south america"],
    ),
    RegionRule::new(Region::Oceania, &["australia", "new zealand", "pacific"]),
];

/// Library of Congress `location` field (coarse, continent-level)
pub const LOC_REGION_RULES: &[RegionRule] = &[
    EGYPT_MOROCCO,
    RegionRule::new(Region::WesternEurope, &["europe"]),
    RegionRule::new(Region::SubSaharanAfrica, &["africa"]),
    RegionRule::new(Region::SouthAsia, &["asia"]),
    RegionRule::new(Region::NorthAmerica, &["america", "united states"]),
];

/// Smithsonian `place` + `culture` text
pub const SMITHSONIAN_REGION_RULES: &[RegionRule] = &[
    EGYPT_MOROCCO,
    RegionRule::new(
        Region::WesternEurope,
        &["europe", "british", "irish", "french"],
    ),
    RegionRule::new(Region::SubSaharanAfrica, &["africa"]).excluding(&["north"]),
    RegionRule::new(Region::NorthAfrica, &["north africa"]),
    RegionRule::new(Region::SouthAsia, &["india", "pakistan", "nepal"]),
    RegionRule::new(Region::EastAsia, &["china", "japan", "korea"]),
    RegionRule::new(
        Region::NorthAmerica,
        &["america", "united states", "canada"],
    ),
    RegionRule::new(Region::CentralAmerica, &["mexico", "central america"]),
    RegionRule::new(
        Region::SouthAmerica,
        &["brazil", "argentina", "south america"],
    ),
    RegionRule::new(Region::Oceania, &["australia", "oceania", "pacific"]),
];

/// ISO 3166 country code to region, for sources that give codes instead of text
const COUNTRY_CODE_REGIONS: &[(&str, Region)] = &[
    ("IE", Region::WesternEurope),
    ("GB", Region::WesternEurope),
    ("FR", Region::WesternEurope),
    ("DE", Region::WesternEurope),
    ("ES", Region::WesternEurope),
    ("IT", Region::WesternEurope),
    ("US", Region::NorthAmerica),
    ("CA", Region::NorthAmerica),
    ("MX", Region::CentralAmerica),
    ("BR", Region::SouthAmerica),
    ("AR", Region::SouthAmerica),
    ("IN", Region::SouthAsia),
    ("PK", Region::SouthAsia),
    ("NP", Region::SouthAsia),
    ("CN", Region::EastAsia),
    ("JP", Region::EastAsia),
    ("KR", Region::EastAsia),
    ("ZA", Region::SubSaharanAfrica),
    ("NG", Region::SubSaharanAfrica),
    ("EG", Region::NorthAfrica),
    ("MA", Region::NorthAfrica),
    ("AU", Region::Oceania),
    ("NZ", Region::Oceania),
];

pub fn region_from_country_code(code: Option<&str>) -> Region {
    let Some(code) = code else {
        return Region::Global;
    };
    COUNTRY_CODE_REGIONS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, region)| *region)
        .unwrap_or(Region::Global)
}

/// Parse the leading integer of a date string ("1975-10-31" -> 1975).
///
/// Leading whitespace and a sign are allowed; anything non-numeric up front
/// yields `None`. Zero counts as "no year".
pub fn parse_year(date: &str) -> Option<i32> {
    let trimmed = date.trim_start();
    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let year: i32 = rest[..digits_len].parse().ok()?;
    let year = sign * year;
    (year != 0).then_some(year)
}

/// First segment of `text` split on any of `delimiters`, trimmed, or "Unknown".
pub fn first_segment(text: &str, delimiters: &[char]) -> String {
    text.split(delimiters)
        .next()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(UNKNOWN_COUNTRY)
        .to_string()
}

/// Last segment of `text` split on `separator`, trimmed, or "Unknown".
pub fn last_segment(text: &str, separator: &str) -> String {
    text.rsplit(separator)
        .next()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(UNKNOWN_COUNTRY)
        .to_string()
}

/// Keep the first five non-blank tags, or the default pair when there are none.
pub fn tags_or_default<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let tags: Vec<String> = tags
        .into_iter()
        .map(|t| t.as_ref().trim().to_string())
        .filter(|t| !t.is_empty())
        .take(MAX_TAGS)
        .collect();

    if tags.is_empty() {
        DEFAULT_TAGS.iter().map(|t| t.to_string()).collect()
    } else {
        tags
    }
}

/// First candidate that is present and not blank.
pub fn first_non_blank<'a, I>(candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    candidates
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|s| !s.is_empty())
}
