//! CLI command definitions and handlers.
//!
//! Each subcommand is implemented as a function that takes the parsed arguments
//! and returns an `anyhow::Result<()>`.

mod catalog;
mod sources;

use clap::{Parser, Subcommand};
use tokio::runtime::Runtime;

pub use catalog::{cmd_fetch, cmd_search};
pub use sources::{cmd_set_smithsonian_key, cmd_sources};

/// Folk Catalog CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the catalog from every archive and print it
    Fetch {
        /// Print entries as JSON
        #[arg(long)]
        json: bool,
        /// Print at most this many entries
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Fetch the catalog and filter it
    Search {
        /// Text to look for in title, artist, country, region and tags
        query: Option<String>,
        /// Only this region (e.g. "Western Europe")
        #[arg(long)]
        region: Option<String>,
        /// Only this era (e.g. "19th Century", "Traditional")
        #[arg(long)]
        era: Option<String>,
        /// Only entries carrying any of these tags (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
        /// Sort order: relevance, newest, era, region
        #[arg(long, default_value = "relevance")]
        sort: String,
        /// Print entries as JSON
        #[arg(long)]
        json: bool,
        /// Print at most this many entries
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// List the data sources and their configuration status
    Sources,
    /// Store the Smithsonian API key in the config file
    SetSmithsonianKey {
        /// api.data.gov key (get one at https://api.data.gov/signup/)
        key: String,
    },
}

/// Run the specified CLI command. With no subcommand the catalog is fetched.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let rt = Runtime::new()?;

    match &cli.command {
        None => cmd_fetch(&rt, false, None),
        Some(Commands::Fetch { json, limit }) => cmd_fetch(&rt, *json, *limit),
        Some(Commands::Search {
            query,
            region,
            era,
            tags,
            sort,
            json,
            limit,
        }) => cmd_search(
            &rt,
            query.as_deref(),
            region.as_deref(),
            era.as_deref(),
            tags,
            sort,
            *json,
            *limit,
        ),
        Some(Commands::Sources) => cmd_sources(),
        Some(Commands::SetSmithsonianKey { key }) => cmd_set_smithsonian_key(key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_args() {
        let cli = Cli::try_parse_from([
            "folk-catalog",
            "search",
            "ballad",
            "--region",
            "North America",
            "--tag",
            "ballads",
            "--tag",
            "appalachian",
            "--sort",
            "newest",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Search {
                query,
                region,
                tags,
                sort,
                json,
                ..
            }) => {
                assert_eq!(query.as_deref(), Some("ballad"));
                assert_eq!(region.as_deref(), Some("North America"));
                assert_eq!(tags, vec!["ballads", "appalachian"]);
                assert_eq!(sort, "newest");
                assert!(!json);
            }
            _ => panic!("expected search command"),
        }
    }

    #[test]
    fn test_no_subcommand_is_allowed() {
        let cli = Cli::try_parse_from(["folk-catalog"]).unwrap();
        assert!(cli.command.is_none());
    }
}
