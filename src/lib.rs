//! Folk Catalog - aggregates folk and traditional music metadata from public archives.
//!
//! MusicBrainz, the Internet Archive, the Library of Congress and the
//! Smithsonian are queried concurrently, normalized into one [`catalog::Entry`]
//! shape, merged and deduplicated. The `cli` module exposes this as a
//! command-line tool.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
#[cfg(test)]
pub mod test_utils;
