//! Data source listing and credential commands.

use crate::catalog::smithsonian;
use crate::catalog::sources::DATA_SOURCES;
use crate::catalog::SourceKind;
use crate::config;
use crate::error::ResultExt;

/// List data sources with attribution notes and credential status
pub fn cmd_sources() -> anyhow::Result<()> {
    let config = config::load();

    println!("Data sources:\n");
    for source in DATA_SOURCES {
        let status = match source.kind {
            Some(SourceKind::Smithsonian) if config.smithsonian_api_key().is_none() => {
                "✗ disabled (no API key)"
            }
            Some(_) => "✓ enabled",
            None => "- linked media",
        };
        println!("{} [{}] {}", source.name, source.source_type, status);
        println!("  {}", source.description);
        println!("  {}", source.url);
        println!("  {}", source.usage_notes);
        println!();
    }

    if config.smithsonian_api_key().is_none() {
        println!("To enable the Smithsonian:");
        println!("  Get a key at: https://api.data.gov/signup/");
        println!(
            "  Then use: folk-catalog set-smithsonian-key YOUR_KEY or set {}",
            smithsonian::API_KEY_VAR
        );
    }

    if let Some(path) = config::config_path() {
        println!("Config file: {}", path.display());
    }

    Ok(())
}

/// Persist the Smithsonian key to the config file
pub fn cmd_set_smithsonian_key(key: &str) -> anyhow::Result<()> {
    let key = key.trim();
    if key.is_empty() {
        anyhow::bail!("The API key must not be empty");
    }

    // A config file that fails to parse is reported, never replaced with defaults
    let path =
        config::store_smithsonian_key(key).with_context("Failed to store Smithsonian API key")?;

    println!("✓ Smithsonian API key saved to {}", path.display());
    Ok(())
}
