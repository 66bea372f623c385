//! The root configuration document and its loader.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tresdocs_elements::CustomElementRule;

use crate::bundler::BundlerConfig;
use crate::error::ConfigError;
use crate::site::SiteConfig;
use crate::theme::ThemeConfig;

/// Config filenames looked for in each directory, in order.
pub const CONFIG_FILENAMES: &[&str] = &["docs.toml", "docs.yaml", "docs.yml"];

/// Complete documentation site configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
    pub theme: ThemeConfig,
    pub bundler: BundlerConfig,
    pub compiler: CompilerConfig,
}

/// Template compiler options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilerConfig {
    /// Which tags skip component resolution
    pub custom_elements: CustomElementRule,
}

impl Config {
    /// Load a config file, choosing the format by extension.
    ///
    /// Relative alias paths are resolved against the file's directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let origin = path.display().to_string();

        let parse: fn(&str, &str) -> Result<Self, ConfigError> = match ext {
            "toml" => Self::parse_toml,
            "yaml" | "yml" => Self::parse_yaml,
            _ => return Err(ConfigError::UnsupportedFormat(origin)),
        };

        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: origin.clone(),
            message: e.to_string(),
        })?;

        let mut config = parse(&content, &origin)?;

        if let Some(dir) = path.parent() {
            config.bundler.resolve.resolve_paths(dir);
        }

        config.validate()?;

        tracing::info!("Loaded config from {}", path.display());

        Ok(config)
    }

    /// Parse and validate TOML. Alias paths stay as written.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config = Self::parse_toml(content, "<inline>")?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate YAML. Alias paths stay as written.
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let config = Self::parse_yaml(content, "<inline>")?;
        config.validate()?;
        Ok(config)
    }

    /// Find the nearest config file in `start` or any of its ancestors.
    pub fn discover(start: &Path) -> Option<PathBuf> {
        start.ancestors().find_map(|dir| {
            CONFIG_FILENAMES
                .iter()
                .map(|name| dir.join(name))
                .find(|candidate| candidate.is_file())
        })
    }

    /// Check cross-field rules that the types alone cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.site.validate()?;
        self.theme.validate()?;
        self.bundler.validate()?;
        Ok(())
    }

    fn parse_toml(content: &str, origin: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: origin.to_string(),
            message: e.to_string(),
        })
    }

    fn parse_yaml(content: &str, origin: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content).map_err(|e| ConfigError::Parse {
            path: origin.to_string(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::{AliasTarget, DedupePolicy};
    use crate::defaults::DEFAULT_CONFIG;
    use crate::nav::{walk, LinkKind};
    use crate::theme::SearchConfig;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;
    use tresdocs_elements::ElementClassifier;

    #[test]
    fn parses_default_config() {
        let config = Config::from_toml_str(DEFAULT_CONFIG).unwrap();

        assert_eq!(config.site.title, "TresJS");
        assert_eq!(config.site.theme_color(), Some("#82DBC5"));
        assert_eq!(config.site.head.len(), 10);
        assert_eq!(config.theme.logo.as_deref(), Some("/logo.svg"));
        assert_eq!(config.theme.search, SearchConfig::Local);
        assert_eq!(config.theme.social_links.len(), 3);
        assert!(!config.bundler.server.hmr.overlay);
        assert_eq!(config.bundler.optimize_deps.include, vec!["three"]);
        assert_eq!(config.bundler.resolve.unreachable_dedupe, DedupePolicy::Warn);
        assert!(config.bundler.resolve.dedupe.contains("three"));
    }

    #[test]
    fn default_nav_keeps_declared_order() {
        let config = Config::from_toml_str(DEFAULT_CONFIG).unwrap();

        let nav: Vec<(usize, &str)> = walk(&config.theme.nav)
            .map(|(depth, item)| (depth, item.text()))
            .collect();

        assert_eq!(
            nav,
            vec![
                (0, "Guide"),
                (0, "API"),
                (0, "Resources"),
                (1, "Team"),
                (1, "Releases"),
                (1, "Playground"),
                (1, "Ecosystem"),
                (2, "Cientos 💛"),
            ]
        );

        let groups: Vec<&str> = config.theme.sidebar.iter().map(|g| g.text()).collect();
        assert_eq!(groups, vec!["Guide", "API", "Examples", "Advanced", "Ecosystem"]);
        assert_eq!(config.theme.sidebar[0].items().len(), 6);
        assert_eq!(
            config.theme.sidebar[4].items()[0].link_kind(),
            Some(LinkKind::External)
        );
    }

    #[test]
    fn default_compiler_rule() {
        let config = Config::from_toml_str(DEFAULT_CONFIG).unwrap();
        let rule = &config.compiler.custom_elements;

        assert!(!rule.is_foreign("TresCanvas"));
        assert!(rule.is_foreign("TresMesh"));
        assert_eq!(rule, &CustomElementRule::default());
    }

    #[test]
    fn empty_document_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.site.title, "Documentation");
    }

    #[test]
    fn rejects_dead_nav_entry() {
        let err = Config::from_toml_str(
            r#"
[[theme.nav]]
text = "Nowhere"
"#,
        )
        .unwrap_err();

        assert!(err.to_string().contains("neither a link nor child items"));
    }

    #[test]
    fn rejects_empty_custom_element_prefix() {
        let result = Config::from_toml_str(
            r#"
[compiler.custom_elements]
prefix = ""
"#,
        );

        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn parses_yaml() {
        let config = Config::from_yaml_str(
            r#"
site:
  title: TresJS
theme:
  sidebar:
    - text: Guide
      items:
        - text: Introduction
          link: /guide/
compiler:
  custom_elements:
    prefix: Tres
    exempt: [TresCanvas, TresLeches]
"#,
        )
        .unwrap();

        assert_eq!(config.theme.sidebar[0].items()[0].text(), "Introduction");
        assert!(!config.compiler.custom_elements.is_foreign("TresLeches"));
    }

    #[test]
    fn load_resolves_alias_paths() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join("docs").join(".vitepress");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("docs.toml");
        fs::write(&path, DEFAULT_CONFIG).unwrap();

        let config = Config::load(&path).unwrap();

        assert_eq!(
            config.bundler.resolve.resolve("@tresjs/core"),
            Some(AliasTarget::Path(temp.path().join("dist").join("tres.js")))
        );
    }

    #[test]
    fn load_rejects_unknown_extension() {
        let result = Config::load(Path::new("docs.json"));

        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn load_reports_missing_file() {
        let temp = tempdir().unwrap();

        let result = Config::load(&temp.path().join("docs.toml"));

        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn discovers_config_in_ancestors() {
        let temp = tempdir().unwrap();
        let nested = temp.path().join("docs").join("guide");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp.path().join("docs.yaml"), "").unwrap();
        fs::write(temp.path().join("docs.toml"), "").unwrap();

        assert_eq!(Config::discover(&nested), Some(temp.path().join("docs.toml")));
    }
}
