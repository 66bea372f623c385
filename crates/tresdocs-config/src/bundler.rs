//! Bundler settings: dependency pre-bundling, dev server and module
//! resolution (aliases and deduplicated packages).

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Bundler configuration passed through to the host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BundlerConfig {
    pub optimize_deps: OptimizeDeps,
    pub server: DevServerConfig,
    pub resolve: ResolveConfig,
}

impl BundlerConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let both: Vec<&str> = self
            .optimize_deps
            .include
            .iter()
            .filter(|dep| self.optimize_deps.exclude.contains(dep))
            .map(String::as_str)
            .collect();

        if !both.is_empty() {
            return Err(ConfigError::Invalid(format!(
                "bundler.optimize_deps lists packages as both included and excluded: {}",
                both.join(", ")
            )));
        }

        Ok(())
    }
}

/// Dependencies forced into or kept out of pre-bundling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizeDeps {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

/// Dev server settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DevServerConfig {
    pub hmr: HmrConfig,
}

/// Hot module replacement settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HmrConfig {
    /// Show the error overlay in the browser
    pub overlay: bool,
}

impl Default for HmrConfig {
    fn default() -> Self {
        Self { overlay: true }
    }
}

/// What to do when a dedupe entry is not in the dependency graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DedupePolicy {
    /// Accept silently, as the bundler itself does
    Ignore,
    /// Log a warning for each entry
    #[default]
    Warn,
    /// Fail the check
    Deny,
}

/// Where an aliased import specifier points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AliasTarget {
    /// File or directory on disk
    Path(PathBuf),
    /// Another package specifier
    Package(String),
}

impl AliasTarget {
    /// Append an import sub-path to the target.
    pub fn join(&self, subpath: &str) -> AliasTarget {
        if subpath.is_empty() {
            return self.clone();
        }

        match self {
            Self::Path(p) => Self::Path(p.join(subpath)),
            Self::Package(name) => Self::Package(format!("{}/{}", name, subpath)),
        }
    }
}

impl From<String> for AliasTarget {
    fn from(raw: String) -> Self {
        if raw.starts_with('.') || raw.starts_with('/') {
            Self::Path(PathBuf::from(raw))
        } else {
            Self::Package(raw)
        }
    }
}

impl From<AliasTarget> for String {
    fn from(target: AliasTarget) -> Self {
        match target {
            AliasTarget::Path(p) => p.display().to_string(),
            AliasTarget::Package(name) => name,
        }
    }
}

/// Module resolution rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolveConfig {
    /// Import specifier to target
    pub alias: BTreeMap<String, AliasTarget>,

    /// Packages that must resolve to a single shared copy
    pub dedupe: BTreeSet<String>,

    /// Handling of dedupe entries missing from the dependency graph
    pub unreachable_dedupe: DedupePolicy,
}

impl ResolveConfig {
    /// Rewrite an import specifier through the alias map.
    ///
    /// A key matches the specifier itself or any `key/sub/path` below it;
    /// the longest matching key wins. Returns `None` for unaliased imports.
    pub fn resolve(&self, specifier: &str) -> Option<AliasTarget> {
        self.alias
            .iter()
            .filter_map(|(key, target)| {
                let rest = if specifier == key.as_str() {
                    ""
                } else {
                    specifier.strip_prefix(key.as_str())?.strip_prefix('/')?
                };
                Some((key.len(), target, rest))
            })
            .max_by_key(|(len, _, _)| *len)
            .map(|(_, target, rest)| target.join(rest))
    }

    /// Resolve relative path targets against `base`.
    pub fn resolve_paths(&mut self, base: &Path) {
        for target in self.alias.values_mut() {
            if let AliasTarget::Path(p) = target {
                if p.is_relative() {
                    *p = normalize(&base.join(&*p));
                }
            }
        }
    }

    /// Dedupe entries that are not in `reachable`, handled per
    /// [`DedupePolicy`].
    pub fn check_dedupe(&self, reachable: &BTreeSet<String>) -> Result<Vec<String>, ConfigError> {
        let missing: Vec<String> = self
            .dedupe
            .iter()
            .filter(|name| !reachable.contains(*name))
            .cloned()
            .collect();

        match self.unreachable_dedupe {
            DedupePolicy::Ignore => {}
            DedupePolicy::Warn => {
                for name in &missing {
                    tracing::warn!("Dedupe entry {} is not in the dependency graph", name);
                }
            }
            DedupePolicy::Deny if !missing.is_empty() => {
                return Err(ConfigError::UnreachableDedupe(missing));
            }
            DedupePolicy::Deny => {}
        }

        Ok(missing)
    }
}

/// Lexically collapse `.` and `..` components.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }

    out
}
