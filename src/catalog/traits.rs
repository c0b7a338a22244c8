//! Trait definitions for archive sources.
//!
//! The aggregator only talks to `dyn FolkSource`, so tests can substitute
//! mock sources for the real HTTP clients.
//!
//! # Example
//!
//! ```ignore
//! use folk_catalog::catalog::traits::FolkSource;
//!
//! async fn count<S: FolkSource>(source: &S) -> usize {
//!     source.fetch_outcome().await.into_entries().len()
//! }
//! ```

use async_trait::async_trait;

use super::domain::{Entry, SourceError, SourceKind, SourceOutcome};

/// One archive that can produce catalog entries.
#[async_trait]
pub trait FolkSource: Send + Sync {
    /// Which archive this is
    fn kind(&self) -> SourceKind;

    /// Fetch and convert entries, reporting failures to the caller.
    async fn fetch_entries(&self) -> Result<Vec<Entry>, SourceError>;

    /// Entries to serve when `fetch_entries` fails. Empty for most archives.
    fn fallback(&self) -> Vec<Entry> {
        Vec::new()
    }

    /// Fetch with failure isolation: errors are logged and turned into the fallback.
    async fn fetch_outcome(&self) -> SourceOutcome {
        match self.fetch_entries().await {
            Ok(entries) => {
                tracing::debug!(source = %self.kind(), count = entries.len(), "Source fetched");
                SourceOutcome::Fetched(entries)
            }
            Err(SourceError::MissingCredential(name)) => {
                tracing::warn!(source = %self.kind(), "{} not configured, skipping source", name);
                SourceOutcome::Unavailable {
                    error: SourceError::MissingCredential(name),
                    fallback: self.fallback(),
                }
            }
            Err(error) => {
                tracing::warn!(source = %self.kind(), error = %error, "Source unavailable");
                SourceOutcome::Unavailable {
                    error,
                    fallback: self.fallback(),
                }
            }
        }
    }
}

#[async_trait]
impl FolkSource for super::musicbrainz::MusicBrainzClient {
    fn kind(&self) -> SourceKind {
        SourceKind::MusicBrainz
    }

    async fn fetch_entries(&self) -> Result<Vec<Entry>, SourceError> {
        self.try_fetch().await
    }

    fn fallback(&self) -> Vec<Entry> {
        super::musicbrainz::sample_entries()
    }
}

#[async_trait]
impl FolkSource for super::archive::ArchiveClient {
    fn kind(&self) -> SourceKind {
        SourceKind::InternetArchive
    }

    async fn fetch_entries(&self) -> Result<Vec<Entry>, SourceError> {
        self.try_fetch().await
    }
}

#[async_trait]
impl FolkSource for super::loc::LocClient {
    fn kind(&self) -> SourceKind {
        SourceKind::LibraryOfCongress
    }

    async fn fetch_entries(&self) -> Result<Vec<Entry>, SourceError> {
        self.try_fetch().await
    }
}

#[async_trait]
impl FolkSource for super::smithsonian::SmithsonianClient {
    fn kind(&self) -> SourceKind {
        SourceKind::Smithsonian
    }

    async fn fetch_entries(&self) -> Result<Vec<Entry>, SourceError> {
        self.try_fetch().await
    }
}
