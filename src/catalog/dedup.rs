//! Cross-source duplicate removal.
//!
//! Two entries are duplicates when their canonical title + artist keys match.
//! There is no fuzzy matching: "Barbara Allen" and "Barbry Allen" stay separate.

use std::collections::HashSet;

use super::domain::Entry;

/// Lowercase and strip everything that is not an ASCII letter or digit.
fn canonicalize(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Canonical key for an entry: `<title>-<artist>` after canonicalization.
pub fn canonical_key(entry: &Entry) -> String {
    format!("{}-{}", canonicalize(&entry.title), canonicalize(&entry.artist))
}

/// Drop every entry whose key was already seen, keeping first occurrences in order.
pub fn deduplicate(entries: Vec<Entry>) -> Vec<Entry> {
    let mut seen = HashSet::with_capacity(entries.len());
    entries
        .into_iter()
        .filter(|entry| seen.insert(canonical_key(entry)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::mock_entry;

    #[test]
    fn test_canonical_key_strips_case_and_punctuation() {
        let entry = mock_entry("a", "SONG!", "x");
        assert_eq!(canonical_key(&entry), "song-x");

        let entry = mock_entry("b", "The Water Is Wide (Take 2)", "Pete Seeger");
        assert_eq!(canonical_key(&entry), "thewateriswidetake2-peteseeger");
    }

    #[test]
    fn test_dedup_preserves_first_occurrence() {
        let entries = vec![
            mock_entry("A", "Song", "X"),
            mock_entry("B", "SONG!", "x"),
            mock_entry("C", "Other", "Y"),
        ];

        let result = deduplicate(entries);

        let ids: Vec<_> = result.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "C"]);
    }

    #[test]
    fn test_dedup_does_not_fuzzy_match() {
        let entries = vec![
            mock_entry("a", "Barbara Allen", "Traditional Artists"),
            mock_entry("b", "Barbry Allen", "Traditional Artists"),
        ];
        assert_eq!(deduplicate(entries).len(), 2);
    }

    #[test]
    fn test_dedup_empty() {
        assert!(deduplicate(Vec::new()).is_empty());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::test_utils::mock_entry;
    use proptest::prelude::*;

    fn arbitrary_entries() -> impl Strategy<Value = Vec<Entry>> {
        prop::collection::vec(("[a-cA-C !]{0,4}", "[xyXY.]{0,3}"), 0..20).prop_map(|pairs| {
            pairs
                .into_iter()
                .enumerate()
                .map(|(i, (title, artist))| mock_entry(&i.to_string(), &title, &artist))
                .collect()
        })
    }

    proptest! {
        /// Running the deduplicator on its own output changes nothing
        #[test]
        fn dedup_is_idempotent(entries in arbitrary_entries()) {
            let once = deduplicate(entries);
            let twice = deduplicate(once.clone());
            prop_assert_eq!(once, twice);
        }

        /// Output is an order-preserving subsequence of the input with unique keys
        #[test]
        fn dedup_is_ordered_subsequence(entries in arbitrary_entries()) {
            let result = deduplicate(entries.clone());

            let input_ids: Vec<_> = entries.iter().map(|e| e.id.clone()).collect();
            let positions: Vec<_> = result
                .iter()
                .map(|e| input_ids.iter().position(|id| *id == e.id).unwrap())
                .collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));

            let keys: HashSet<_> = result.iter().map(canonical_key).collect();
            prop_assert_eq!(keys.len(), result.len());
        }
    }
}
