//! MusicBrainz integration
//!
//! Searches artists tagged folk + traditional/world. This is the primary
//! source: when it fails, a bundled sample catalog is served in its place.
//!
//! API docs: https://musicbrainz.org/doc/MusicBrainz_API

pub mod dto;
mod adapter;
mod client;
mod sample;

pub use adapter::{VARIOUS_ARTISTS_ID, to_entries};
pub use client::MusicBrainzClient;
pub use sample::sample_entries;
