//! Catalog fetching and searching commands.

use tokio::runtime::Runtime;

use crate::catalog::{CatalogRun, CatalogService, Entry, Era, FilterState, Region, SortBy};
use crate::config;
use crate::error::{Error, Result, ResultExt};

/// Fetch the catalog and print it
pub fn cmd_fetch(rt: &Runtime, json: bool, limit: Option<usize>) -> anyhow::Result<()> {
    let run = fetch_catalog(rt)?;
    let entries: Vec<&Entry> = run.entries.iter().collect();
    print_entries(&entries, json, limit)?;
    if !json {
        print_source_summary(&run);
    }
    Ok(())
}

/// Fetch the catalog, apply filters and print the matches
#[allow(clippy::too_many_arguments)]
pub fn cmd_search(
    rt: &Runtime,
    query: Option<&str>,
    region: Option<&str>,
    era: Option<&str>,
    tags: &[String],
    sort: &str,
    json: bool,
    limit: Option<usize>,
) -> anyhow::Result<()> {
    // Validate arguments before touching the network
    let filter =
        build_filter(query, region, era, tags, sort).with_context("Invalid search filters")?;
    let run = fetch_catalog(rt)?;

    let matches = filter.apply(&run.entries);
    if matches.is_empty() && !json {
        println!("No entries match your filters. Try adjusting your search criteria.");
        return Ok(());
    }
    print_entries(&matches, json, limit)?;
    Ok(())
}

/// Run one aggregation. A wholly empty catalog is the "unable to load" state.
fn fetch_catalog(rt: &Runtime) -> anyhow::Result<CatalogRun> {
    let config = config::load();
    let service = CatalogService::new(config.catalog_config());
    let run = rt.block_on(service.fetch_run());

    if run.entries.is_empty() {
        anyhow::bail!(
            "Unable to load folk music: every source failed or returned nothing. Check your connection and try again."
        );
    }
    Ok(run)
}

fn build_filter(
    query: Option<&str>,
    region: Option<&str>,
    era: Option<&str>,
    tags: &[String],
    sort: &str,
) -> Result<FilterState> {
    let region = region
        .map(|r| {
            Region::from_label(r).ok_or_else(|| {
                Error::invalid_argument(format!("unknown region '{}' (expected one of: {})", r, region_labels()))
            })
        })
        .transpose()?;

    let era = era
        .map(|e| {
            Era::from_label(e).ok_or_else(|| {
                Error::invalid_argument(format!("unknown era '{}' (expected one of: {})", e, era_labels()))
            })
        })
        .transpose()?;

    let sort_by: SortBy = sort.parse().map_err(Error::InvalidArgument)?;

    Ok(FilterState {
        query: query.unwrap_or_default().to_string(),
        region,
        era,
        tags: tags.to_vec(),
        sort_by,
    })
}

fn region_labels() -> String {
    Region::ALL.map(Region::label).join(", ")
}

fn era_labels() -> String {
    Era::ALL.map(Era::label).join(", ")
}

fn print_entries(entries: &[&Entry], json: bool, limit: Option<usize>) -> Result<()> {
    let shown = &entries[..limit.unwrap_or(entries.len()).min(entries.len())];

    if json {
        println!("{}", render_json(shown)?);
        return Ok(());
    }

    for entry in shown {
        println!("{}", render_line(entry));
    }
    println!();
    println!(
        "{} {} found",
        entries.len(),
        if entries.len() == 1 { "entry" } else { "entries" }
    );
    if shown.len() < entries.len() {
        println!("(showing first {})", shown.len());
    }
    Ok(())
}

fn render_json(entries: &[&Entry]) -> Result<String> {
    serde_json::to_string_pretty(entries).with_context("Failed to encode entries as JSON")
}

fn render_line(entry: &Entry) -> String {
    let year = entry
        .year
        .map(|y| format!(" ({})", y))
        .unwrap_or_default();
    format!(
        "{} - {}{}  [{}, {}; {}]",
        entry.title, entry.artist, year, entry.region, entry.era, entry.country
    )
}

fn print_source_summary(run: &CatalogRun) {
    println!();
    println!("Sources:");
    for source in &run.sources {
        let marker = if source.available { "✓" } else { "✗" };
        let note = if source.available {
            String::new()
        } else if source.count > 0 {
            " (unavailable, showing bundled sample data)".to_string()
        } else {
            " (unavailable)".to_string()
        };
        println!("  {} {}: {}{}", marker, source.kind, source.count, note);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::mock_entry;

    #[test]
    fn test_build_filter() {
        let tags = vec!["ballad".to_string()];
        let filter =
            build_filter(Some("lomax"), Some("north america"), Some("20th century"), &tags, "Newest")
                .unwrap();

        assert_eq!(filter.query, "lomax");
        assert_eq!(filter.region, Some(Region::NorthAmerica));
        assert_eq!(filter.era, Some(Era::Century20));
        assert_eq!(filter.tags, tags);
        assert_eq!(filter.sort_by, SortBy::Newest);
    }

    #[test]
    fn test_build_filter_rejects_unknown_values() {
        assert!(matches!(
            build_filter(None, Some("Atlantis"), None, &[], "relevance"),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            build_filter(None, None, Some("Jurassic"), &[], "relevance"),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            build_filter(None, None, None, &[], "shuffle"),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_render_line() {
        let entry = Entry {
            year: Some(1937),
            ..mock_entry("loc-1", "Barbara Allen", "Aunt Molly Jackson")
        };
        assert_eq!(
            render_line(&entry),
            "Barbara Allen - Aunt Molly Jackson (1937)  [Global, Traditional; Unknown]"
        );
    }

    #[test]
    fn test_render_json() {
        let entry = mock_entry("archive-1", "Reel", "Fiddler");
        let json = render_json(&[&entry]).unwrap();
        assert!(json.contains("\"id\": \"archive-1\""));
        assert!(json.contains("\"region\": \"Global\""));
    }
}
