//! Catalog service - fans out to every archive and merges the results
//!
//! 1. Ask all sources concurrently (each isolates its own failures)
//! 2. Concatenate in fixed priority order
//! 3. Remove cross-source duplicates

use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use futures::future::join_all;

use crate::catalog::{
    archive::ArchiveClient,
    dedup,
    domain::{Entry, SourceKind, SourceOutcome},
    http,
    loc::LocClient,
    musicbrainz::MusicBrainzClient,
    smithsonian::{self, SmithsonianClient},
    traits::FolkSource,
};

/// Configuration for the catalog service
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// api.data.gov key for the Smithsonian; `None` disables that source
    pub smithsonian_api_key: Option<String>,
    /// Client identifier sent with every request
    pub user_agent: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            smithsonian_api_key: None,
            user_agent: http::DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl CatalogConfig {
    /// Defaults plus the Smithsonian key from the environment, if set
    pub fn from_env() -> Self {
        Self {
            smithsonian_api_key: std::env::var(smithsonian::API_KEY_VAR)
                .ok()
                .filter(|k| !k.trim().is_empty()),
            ..Default::default()
        }
    }
}

/// Per-source result of one aggregation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSummary {
    pub kind: SourceKind,
    /// Whether the archive answered
    pub available: bool,
    /// Entries contributed before deduplication (fallback entries included)
    pub count: usize,
}

/// Everything one aggregation run produced
#[derive(Debug, Clone, Default)]
pub struct CatalogRun {
    /// Deduplicated catalog
    pub entries: Vec<Entry>,
    pub sources: Vec<SourceSummary>,
}

/// Service aggregating entries from every archive
pub struct CatalogService {
    sources: Vec<Box<dyn FolkSource>>,
}

impl CatalogService {
    /// Create a service over the four public archives
    pub fn new(config: CatalogConfig) -> Self {
        let ua = config.user_agent.as_str();
        Self::with_sources(vec![
            Box::new(MusicBrainzClient::new(ua)),
            Box::new(ArchiveClient::new(ua)),
            Box::new(LocClient::new(ua)),
            Box::new(SmithsonianClient::new(config.smithsonian_api_key.clone(), ua)),
        ])
    }

    /// Create a service over arbitrary sources. They are ordered by catalog priority.
    pub fn with_sources(mut sources: Vec<Box<dyn FolkSource>>) -> Self {
        sources.sort_by_key(|s| priority(s.kind()));
        Self { sources }
    }

    /// Fetch, merge and deduplicate. Never fails; a wholly empty list means nothing loaded.
    pub async fn fetch_all(&self) -> Vec<Entry> {
        self.fetch_run().await.entries
    }

    /// Like [`fetch_all`](Self::fetch_all), also reporting what each source did
    pub async fn fetch_run(&self) -> CatalogRun {
        match AssertUnwindSafe(self.aggregate()).catch_unwind().await {
            Ok(run) => run,
            Err(_) => {
                tracing::error!("Failed to fetch folk music from all sources");
                CatalogRun::default()
            }
        }
    }

    async fn aggregate(&self) -> CatalogRun {
        let outcomes = join_all(self.sources.iter().map(|s| s.fetch_outcome())).await;

        let mut sources = Vec::with_capacity(outcomes.len());
        let mut combined = Vec::new();
        for (source, outcome) in self.sources.iter().zip(outcomes) {
            let available = outcome.is_available();
            let entries = outcome.into_entries();
            sources.push(SourceSummary {
                kind: source.kind(),
                available,
                count: entries.len(),
            });
            combined.extend(entries);
        }

        let entries = dedup::deduplicate(combined);

        let contributors: Vec<&str> = sources
            .iter()
            .filter(|s| s.count > 0)
            .map(|s| s.kind.name())
            .collect();
        tracing::info!(
            "Fetched {} unique folk music entries from {}",
            entries.len(),
            if contributors.is_empty() {
                "no sources".to_string()
            } else {
                contributors.join(", ")
            }
        );

        CatalogRun { entries, sources }
    }

    /// Number of configured sources
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }
}

fn priority(kind: SourceKind) -> usize {
    SourceKind::PRIORITY
        .iter()
        .position(|k| *k == kind)
        .unwrap_or(SourceKind::PRIORITY.len())
}

/// Fetch the whole catalog with default settings and the environment-supplied key
pub async fn fetch_all() -> Vec<Entry> {
    CatalogService::new(CatalogConfig::from_env()).fetch_all().await
}
