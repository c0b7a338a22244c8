//! Smithsonian Folkways integration via the Smithsonian Open Access API

pub mod dto;
mod adapter;
mod client;

pub use adapter::to_entries;
pub use client::{API_KEY_VAR, SmithsonianClient};
