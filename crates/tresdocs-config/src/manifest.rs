//! `package.json` reading, used to check dedupe entries against the
//! packages a docs project can actually reach.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// The dependency tables of a `package.json`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PackageManifest {
    pub name: Option<String>,
    pub dependencies: BTreeMap<String, String>,
    pub dev_dependencies: BTreeMap<String, String>,
    pub peer_dependencies: BTreeMap<String, String>,
    pub optional_dependencies: BTreeMap<String, String>,
}

impl PackageManifest {
    /// Read and parse a manifest.
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Package names declared by the manifest, including its own name.
    pub fn declared(&self) -> BTreeSet<String> {
        self.name
            .iter()
            .chain(self.dependencies.keys())
            .chain(self.dev_dependencies.keys())
            .chain(self.peer_dependencies.keys())
            .chain(self.optional_dependencies.keys())
            .cloned()
            .collect()
    }
}

/// Every package reachable from the manifest at `path`: declared
/// dependencies plus whatever is installed in the sibling `node_modules`.
pub fn reachable_packages(path: &Path) -> Result<BTreeSet<String>, ConfigError> {
    let manifest = PackageManifest::read(path)?;
    let mut reachable = manifest.declared();

    if let Some(dir) = path.parent() {
        reachable.extend(installed_packages(&dir.join("node_modules")));
    }

    tracing::debug!("{} packages reachable from {}", reachable.len(), path.display());

    Ok(reachable)
}

/// Package names installed at the top level of a `node_modules` directory,
/// with scoped packages as `@scope/name`.
pub fn installed_packages(node_modules: &Path) -> BTreeSet<String> {
    let mut installed = BTreeSet::new();

    for name in dir_names(node_modules) {
        if name.starts_with('.') {
            continue;
        }

        if name.starts_with('@') {
            for inner in dir_names(&node_modules.join(&name)) {
                installed.insert(format!("{}/{}", name, inner));
            }
        } else {
            installed.insert(name);
        }
    }

    installed
}

fn dir_names(dir: &Path) -> Vec<String> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };

    entries
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_dir())
        .filter_map(|e| e.file_name().to_str().map(str::to_string))
        .collect()
}
