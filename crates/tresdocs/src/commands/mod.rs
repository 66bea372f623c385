//! CLI commands.

pub mod check;
pub mod classify;
pub mod export;
pub mod init;
pub mod nav;
pub mod scan;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tresdocs_config::Config;
use tresdocs_elements::CustomElementRule;

const DEFAULT_CONFIG_PATH: &str = "docs.toml";

/// The explicit config path, else the nearest config above the current
/// directory, else `docs.toml`.
pub fn config_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    std::env::current_dir()
        .ok()
        .and_then(|cwd| Config::discover(&cwd))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Load and validate the config.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let path = config_path(explicit);
    Config::load(&path).with_context(|| format!("Failed to load {}", path.display()))
}

/// The custom element rule from the config, or the built-in TresJS rule
/// when there is no config file.
pub fn element_rule(explicit: Option<&Path>) -> Result<CustomElementRule> {
    let path = config_path(explicit);
    if explicit.is_none() && !path.exists() {
        tracing::debug!("No config found, using the default custom element rule");
        return Ok(CustomElementRule::default());
    }

    Ok(load_config(Some(path.as_path()))?.compiler.custom_elements)
}
