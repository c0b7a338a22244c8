//! Command-line interface for folk-catalog.
//!
//! This module provides CLI commands for fetching, searching and configuring
//! the aggregated folk-music catalog.

mod commands;

pub use commands::{Cli, Commands, run_command};
