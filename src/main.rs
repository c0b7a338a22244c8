//! Folk Catalog - browse folk music aggregated from public archives.

use clap::Parser;
use folk_catalog::cli;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("folk_catalog=info".parse()?))
        .init();

    cli::run_command(&args)
}
