//! Bundled sample catalog served when MusicBrainz cannot be reached.

use crate::catalog::domain::Entry;

const SAMPLE_JSON: &str = include_str!("../../../assets/sample_entries.json");

/// Parse the bundled dataset. A broken asset is logged and yields nothing.
pub fn sample_entries() -> Vec<Entry> {
    match serde_json::from_str(SAMPLE_JSON) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::error!("Bundled sample catalog is invalid: {}", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sample_parses_and_is_valid() {
        let entries = sample_entries();
        assert!(!entries.is_empty());

        let ids: HashSet<_> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), entries.len(), "sample ids must be unique");

        for entry in &entries {
            assert!(!entry.id.is_empty());
            assert!(!entry.title.is_empty());
            assert!(!entry.tags.is_empty() && entry.tags.len() <= 5);
        }
    }
}
