//! Site, navigation and bundler configuration for the TresJS docs.
//!
//! Parses `docs.toml` (or `docs.yaml`) into typed sections, validates the
//! navigation tree eagerly and exports the document the site generator
//! host consumes.
//!
//! # Example
//!
//! ```
//! use tresdocs_config::{Config, DEFAULT_CONFIG};
//!
//! let config = Config::from_toml_str(DEFAULT_CONFIG).unwrap();
//! assert_eq!(config.theme.sidebar_for("/guide/nuxt")[0].text(), "Guide");
//! ```

pub mod bundler;
pub mod config;
pub mod defaults;
pub mod error;
pub mod export;
pub mod manifest;
pub mod nav;
pub mod site;
pub mod theme;

pub use bundler::{AliasTarget, BundlerConfig, DedupePolicy, ResolveConfig};
pub use config::{CompilerConfig, Config, CONFIG_FILENAMES};
pub use defaults::DEFAULT_CONFIG;
pub use error::ConfigError;
pub use manifest::{reachable_packages, PackageManifest};
pub use nav::{pager, trail, walk, LinkKind, NavError, NavItem, Pager};
pub use site::{HeadTag, HeadTagName, SiteConfig};
pub use theme::{SearchConfig, SocialLink, ThemeConfig};
