//! Site metadata and `<head>` tags.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Site-wide metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title
    pub title: String,

    /// Description for SEO
    pub description: String,

    /// Document language
    pub lang: String,

    /// Base URL the site is deployed under
    pub base: String,

    /// Extra tags injected into every page's `<head>`
    pub head: Vec<HeadTag>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Documentation".to_string(),
            description: String::new(),
            lang: "en-US".to_string(),
            base: "/".to_string(),
            head: Vec::new(),
        }
    }
}

impl SiteConfig {
    /// Value of `<meta name="theme-color">`, if declared.
    pub fn theme_color(&self) -> Option<&str> {
        self.meta("theme-color")
    }

    /// Content of the first `<meta>` whose `name` or `property` is `key`.
    pub fn meta(&self, key: &str) -> Option<&str> {
        self.head
            .iter()
            .filter(|t| t.tag == HeadTagName::Meta)
            .find(|t| {
                t.attrs.get("name").map(String::as_str) == Some(key)
                    || t.attrs.get("property").map(String::as_str) == Some(key)
            })
            .and_then(|t| t.attrs.get("content"))
            .map(String::as_str)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::Invalid("site.title must not be empty".to_string()));
        }
        if !self.base.starts_with('/') || !self.base.ends_with('/') {
            return Err(ConfigError::Invalid(format!(
                "site.base must start and end with '/': {}",
                self.base
            )));
        }
        Ok(())
    }
}

/// Element name of a head tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadTagName {
    Link,
    Meta,
    Script,
    Style,
    Base,
    Noscript,
}

impl HeadTagName {
    /// Element name as it appears in HTML.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Link => "link",
            Self::Meta => "meta",
            Self::Script => "script",
            Self::Style => "style",
            Self::Base => "base",
            Self::Noscript => "noscript",
        }
    }
}

/// A tag injected into `<head>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadTag {
    pub tag: HeadTagName,

    #[serde(default)]
    pub attrs: BTreeMap<String, String>,

    /// Inner content, for inline scripts and styles
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}
