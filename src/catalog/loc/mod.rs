//! Library of Congress integration (loc.gov JSON API)

pub mod dto;
mod adapter;
mod client;

pub use adapter::to_entries;
pub use client::LocClient;
