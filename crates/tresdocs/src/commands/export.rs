//! Export the host configuration.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Run the export command.
pub fn run(config: Option<&Path>, output: Option<PathBuf>, compact: bool) -> Result<()> {
    let config = super::load_config(config)?;
    let host = config.to_host_json();

    let json = if compact {
        serde_json::to_string(&host)?
    } else {
        serde_json::to_string_pretty(&host)?
    };

    match output {
        Some(path) => {
            fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}
