//! Write the default configuration.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tresdocs_config::DEFAULT_CONFIG;

/// Run the init command.
pub fn run(config: Option<&Path>, yes: bool) -> Result<()> {
    let config_path = config.unwrap_or(Path::new("docs.toml"));

    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(());
    }

    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    tracing::info!("Created {}", config_path.display());
    tracing::info!("Run 'tresdocs check' to validate it.");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use tresdocs_config::Config;

    #[test]
    fn writes_loadable_config() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("docs").join("docs.toml");

        run(Some(&path), false).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.site.title, "TresJS");
    }

    #[test]
    fn keeps_existing_config_without_yes() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("docs.toml");
        fs::write(&path, "[site]\ntitle = \"Mine\"\n").unwrap();

        run(Some(&path), false).unwrap();
        assert!(fs::read_to_string(&path).unwrap().contains("Mine"));

        run(Some(&path), true).unwrap();
        assert!(fs::read_to_string(&path).unwrap().contains("TresJS"));
    }
}
