//! Internet Archive integration
//!
//! Items carry enough metadata to derive audio and thumbnail URLs directly
//! from their identifier.

pub mod dto;
mod adapter;
mod client;

pub use adapter::to_entries;
pub use client::ArchiveClient;
