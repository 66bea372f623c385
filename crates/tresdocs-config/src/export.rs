//! Export in the shape the site generator host reads.

use serde_json::{json, Map, Value};

use crate::config::Config;
use crate::site::HeadTag;
use crate::theme::SearchConfig;

impl Config {
    /// Build the host configuration document.
    ///
    /// Keys follow the host's camelCase naming. The custom element
    /// predicate is emitted as its rule data.
    pub fn to_host_json(&self) -> Value {
        let site = &self.site;
        let theme = &self.theme;
        let bundler = &self.bundler;
        let rule = &self.compiler.custom_elements;

        let mut theme_config = Map::new();
        if let Some(logo) = &theme.logo {
            theme_config.insert("logo".to_string(), json!(logo));
        }
        theme_config.insert("search".to_string(), search_json(&theme.search));
        theme_config.insert("nav".to_string(), json!(theme.nav));
        theme_config.insert("sidebar".to_string(), self.sidebar_json());
        theme_config.insert("socialLinks".to_string(), json!(theme.social_links));

        let alias: Map<String, Value> = bundler
            .resolve
            .alias
            .iter()
            .map(|(key, target)| (key.clone(), json!(String::from(target.clone()))))
            .collect();

        json!({
            "title": site.title,
            "description": site.description,
            "lang": site.lang,
            "base": site.base,
            "head": site.head.iter().map(head_json).collect::<Vec<_>>(),
            "themeConfig": theme_config,
            "vite": {
                "optimizeDeps": {
                    "include": bundler.optimize_deps.include,
                    "exclude": bundler.optimize_deps.exclude,
                },
                "server": {
                    "hmr": { "overlay": bundler.server.hmr.overlay },
                },
                "resolve": {
                    "alias": alias,
                    "dedupe": bundler.resolve.dedupe,
                },
            },
            "vue": {
                "template": {
                    "compilerOptions": {
                        "customElement": {
                            "prefix": rule.prefix(),
                            "exempt": rule.exempt(),
                        },
                    },
                },
            },
        })
    }

    /// A flat array, or an object keyed by path prefix when per-path
    /// sidebars exist. The default sidebar is filed under `/` unless a
    /// `/` sidebar is already declared.
    fn sidebar_json(&self) -> Value {
        let theme = &self.theme;

        if theme.sidebars.is_empty() {
            return json!(theme.sidebar);
        }

        let mut by_path: Map<String, Value> = theme
            .sidebars
            .iter()
            .map(|(prefix, items)| (prefix.clone(), json!(items)))
            .collect();

        if !theme.sidebar.is_empty() && !by_path.contains_key("/") {
            by_path.insert("/".to_string(), json!(theme.sidebar));
        }

        Value::Object(by_path)
    }
}

fn head_json(tag: &HeadTag) -> Value {
    match &tag.content {
        Some(content) => json!([tag.tag.as_str(), tag.attrs, content]),
        None => json!([tag.tag.as_str(), tag.attrs]),
    }
}

fn search_json(search: &SearchConfig) -> Value {
    match search {
        SearchConfig::Local => json!({ "provider": search.provider() }),
        SearchConfig::Algolia {
            app_id,
            api_key,
            index_name,
        } => json!({
            "provider": search.provider(),
            "options": {
                "appId": app_id,
                "apiKey": api_key,
                "indexName": index_name,
            },
        }),
    }
}
