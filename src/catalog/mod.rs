//! Folk-music catalog - aggregates metadata from public archives.
//!
//! # Architecture
//!
//! This module follows a clean separation between:
//! - **Domain models** (`domain.rs`) - the normalized [`Entry`] every archive maps into
//! - **API DTOs** (`*/dto.rs`) - exact response shapes of each archive
//! - **Adapters** (`*/adapter.rs`) - convert DTOs to entries
//! - **Clients** (`*/client.rs`) - HTTP clients for the archives
//! - **Classify** - shared era/region rule tables used by every adapter
//! - **Service** - concurrent fan-out, merge and deduplication
//!
//! A failing archive never fails the catalog: each source isolates its own
//! errors and the service only ever sees lists.
//!
//! # Usage
//!
//! ```ignore
//! use folk_catalog::catalog::{CatalogService, CatalogConfig};
//!
//! let service = CatalogService::new(CatalogConfig::from_env());
//! let entries = service.fetch_all().await;
//! println!("{} entries", entries.len());
//! ```

pub mod domain;
pub mod classify;
pub mod dedup;
pub mod browse;
pub mod sources;
pub mod traits;
pub mod http;
pub mod musicbrainz;
pub mod archive;
pub mod loc;
pub mod smithsonian;
pub mod service;

pub use browse::{FilterState, SortBy};
pub use domain::{Entry, Era, Region, SourceError, SourceKind, SourceOutcome};
pub use service::{CatalogConfig, CatalogRun, CatalogService, SourceSummary, fetch_all};
pub use traits::FolkSource;
