//! Default theme settings: logo, search, navigation and social links.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::nav::{LinkKind, NavItem};

/// Theme configuration consumed by the rendering host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Logo shown in the navigation bar
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,

    /// Search provider
    pub search: SearchConfig,

    /// Top navigation bar, in display order
    pub nav: Vec<NavItem>,

    /// Default sidebar
    pub sidebar: Vec<NavItem>,

    /// Sidebars keyed by path prefix, e.g. `/guide/`
    pub sidebars: BTreeMap<String, Vec<NavItem>>,

    /// Icon links in the navigation bar
    pub social_links: Vec<SocialLink>,
}

impl ThemeConfig {
    /// Sidebar for a page. The longest matching path prefix wins; pages no
    /// prefix matches get the default sidebar.
    pub fn sidebar_for(&self, path: &str) -> &[NavItem] {
        self.sidebars
            .iter()
            .filter(|(prefix, _)| path.starts_with(prefix.as_str()))
            .max_by_key(|(prefix, _)| prefix.len())
            .map(|(_, items)| items.as_slice())
            .unwrap_or(self.sidebar.as_slice())
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        for prefix in self.sidebars.keys() {
            if !prefix.starts_with('/') {
                return Err(ConfigError::Invalid(format!(
                    "theme.sidebars key must start with '/': {}",
                    prefix
                )));
            }
        }

        for social in &self.social_links {
            if LinkKind::of(&social.link) != LinkKind::External {
                return Err(ConfigError::Invalid(format!(
                    "social link '{}' must be an absolute URL: {}",
                    social.icon, social.link
                )));
            }
        }

        Ok(())
    }
}

/// Search provider selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "provider", rename_all = "lowercase")]
pub enum SearchConfig {
    /// In-browser index built by the host
    #[default]
    Local,
    /// Hosted DocSearch index
    Algolia {
        app_id: String,
        api_key: String,
        index_name: String,
    },
}

impl SearchConfig {
    /// Provider name as written in the config.
    pub fn provider(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Algolia { .. } => "algolia",
        }
    }
}

/// An icon link to an external profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Icon name, e.g. "github"
    pub icon: String,
    pub link: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one(text: &str, link: &str) -> Vec<NavItem> {
        vec![NavItem::link(text, link).unwrap()]
    }

    #[test]
    fn resolves_longest_sidebar_prefix() {
        let theme = ThemeConfig {
            sidebar: one("Home", "/"),
            sidebars: BTreeMap::from([
                ("/api/".to_string(), one("API", "/api/")),
                ("/api/advanced/".to_string(), one("Advanced", "/api/advanced/")),
            ]),
            ..Default::default()
        };

        assert_eq!(theme.sidebar_for("/api/events")[0].text(), "API");
        assert_eq!(theme.sidebar_for("/api/advanced/x")[0].text(), "Advanced");
        assert_eq!(theme.sidebar_for("/guide/")[0].text(), "Home");
    }

    #[test]
    fn rejects_internal_social_link() {
        let theme = ThemeConfig {
            social_links: vec![SocialLink {
                icon: "github".to_string(),
                link: "/github".to_string(),
            }],
            ..Default::default()
        };

        assert!(theme.validate().is_err());
    }

    #[test]
    fn rejects_relative_sidebar_key() {
        let theme = ThemeConfig {
            sidebars: BTreeMap::from([("guide/".to_string(), one("Guide", "/guide/"))]),
            ..Default::default()
        };

        assert!(theme.validate().is_err());
    }

    #[test]
    fn parses_search_provider() {
        let local: SearchConfig = serde_json::from_str(r#"{"provider": "local"}"#).unwrap();
        assert_eq!(local, SearchConfig::Local);

        let algolia: SearchConfig = serde_json::from_str(
            r#"{"provider": "algolia", "app_id": "A", "api_key": "K", "index_name": "tres"}"#,
        )
        .unwrap();
        assert_eq!(algolia.provider(), "algolia");
    }
}
