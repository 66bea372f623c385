//! Validate the configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tresdocs_config::{reachable_packages, walk, LinkKind, ThemeConfig};

/// Run the check command.
pub fn run(config: Option<&Path>, package_json: Option<PathBuf>) -> Result<()> {
    let config = super::load_config(config)?;
    let summary = Summary::of(&config.theme);

    tracing::info!(
        "{} nav entries, {} sidebar groups, {} internal and {} external links",
        summary.nav_entries,
        summary.sidebar_groups,
        summary.internal,
        summary.external
    );

    if let Some(manifest) = package_json {
        let reachable = reachable_packages(&manifest)
            .with_context(|| format!("Failed to read {}", manifest.display()))?;
        let missing = config.bundler.resolve.check_dedupe(&reachable)?;

        if missing.is_empty() {
            tracing::info!(
                "All {} dedupe entries are reachable",
                config.bundler.resolve.dedupe.len()
            );
        }
    }

    tracing::info!("Config OK");

    Ok(())
}

/// Entry and link counts over the nav bar and every sidebar.
#[derive(Debug, Default, PartialEq, Eq)]
struct Summary {
    nav_entries: usize,
    sidebar_groups: usize,
    internal: usize,
    external: usize,
}

impl Summary {
    fn of(theme: &ThemeConfig) -> Self {
        let sidebars = || std::iter::once(&theme.sidebar).chain(theme.sidebars.values());

        let mut summary = Summary {
            nav_entries: theme.nav.len(),
            sidebar_groups: sidebars().map(Vec::len).sum(),
            ..Default::default()
        };

        for (_, item) in walk(&theme.nav).chain(sidebars().flat_map(|s| walk(s))) {
            match item.link_kind() {
                Some(LinkKind::Internal) => summary.internal += 1,
                Some(LinkKind::External) => summary.external += 1,
                None => {}
            }
        }

        summary
    }
}
