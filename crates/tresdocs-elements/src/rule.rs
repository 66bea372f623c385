//! Prefix rule with an exception set.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Tag prefix shared by every TresJS element.
pub const DEFAULT_PREFIX: &str = "Tres";

/// Tags that carry the prefix but are real Vue components.
pub const DEFAULT_EXEMPT: &[&str] = &["TresCanvas"];

static DEFAULT_RULE: LazyLock<CustomElementRule> = LazyLock::new(CustomElementRule::default);

/// Decides whether a tag should skip component resolution.
pub trait ElementClassifier: Send + Sync {
    /// Returns `true` when the template compiler should emit `tag` verbatim.
    fn is_foreign(&self, tag: &str) -> bool;
}

/// Classify `tag` against the default TresJS rule.
///
/// `tag.starts_with("Tres") && tag != "TresCanvas"`. Matching is
/// case-sensitive and total over all strings.
pub fn is_foreign_tag(tag: &str) -> bool {
    DEFAULT_RULE.is_foreign(tag)
}

/// A prefix match with an explicit set of exempted tag names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRule")]
pub struct CustomElementRule {
    prefix: String,
    exempt: BTreeSet<String>,
}

impl CustomElementRule {
    /// Create a rule. The prefix must not be empty, otherwise every tag
    /// (including `""`) would be foreign.
    pub fn new<I, S>(prefix: impl Into<String>, exempt: I) -> Result<Self, RuleError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let prefix = prefix.into();
        if prefix.is_empty() {
            return Err(RuleError::EmptyPrefix);
        }

        let exempt: BTreeSet<String> = exempt.into_iter().map(Into::into).collect();
        if let Some(tag) = exempt.iter().find(|t| !t.starts_with(&prefix)) {
            tracing::debug!("Exempt tag {} does not carry prefix {}", tag, prefix);
        }

        Ok(Self { prefix, exempt })
    }

    /// The prefix every foreign tag starts with.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Tag names that are never foreign.
    pub fn exempt(&self) -> &BTreeSet<String> {
        &self.exempt
    }

    /// Classify a batch of tags, preserving order.
    pub fn classify_all<'a, I>(&self, tags: I) -> Vec<bool>
    where
        I: IntoIterator<Item = &'a str>,
    {
        tags.into_iter().map(|t| self.is_foreign(t)).collect()
    }
}

impl Default for CustomElementRule {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            exempt: DEFAULT_EXEMPT.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl ElementClassifier for CustomElementRule {
    fn is_foreign(&self, tag: &str) -> bool {
        tag.starts_with(&self.prefix) && !self.exempt.contains(tag)
    }
}

#[derive(Deserialize)]
struct RawRule {
    #[serde(default = "default_prefix")]
    prefix: String,
    #[serde(default = "default_exempt")]
    exempt: Vec<String>,
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

fn default_exempt() -> Vec<String> {
    DEFAULT_EXEMPT.iter().map(|t| t.to_string()).collect()
}

impl TryFrom<RawRule> for CustomElementRule {
    type Error = RuleError;

    fn try_from(raw: RawRule) -> Result<Self, Self::Error> {
        Self::new(raw.prefix, raw.exempt)
    }
}

/// Errors that can occur when building a rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    #[error("Custom element prefix must not be empty")]
    EmptyPrefix,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn canvas_is_a_component() {
        assert!(!is_foreign_tag("TresCanvas"));
    }

    #[test]
    fn prefixed_tags_are_foreign() {
        assert!(is_foreign_tag("TresMesh"));
        assert!(is_foreign_tag("TresGroup"));
        assert!(is_foreign_tag("TresPerspectiveCamera"));
        assert!(is_foreign_tag("TresCanvasTexture"));
    }

    #[test]
    fn bare_prefix_is_foreign() {
        assert!(is_foreign_tag("Tres"));
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert!(!is_foreign_tag("tresmesh"));
        assert!(!is_foreign_tag("tresCanvas"));
        assert!(!is_foreign_tag("TRESMesh"));
    }

    #[test]
    fn unprefixed_and_partial_tags_are_not_foreign() {
        assert!(!is_foreign_tag("Canvas"));
        assert!(!is_foreign_tag(""));
        assert!(!is_foreign_tag("Tre"));
        assert!(!is_foreign_tag("div"));
    }

    #[test]
    fn classifies_sequence_in_order() {
        let rule = CustomElementRule::default();
        let result = rule.classify_all([
            "TresCanvas",
            "TresMesh",
            "Div",
            "TresPerspectiveCamera",
            "tresCanvas",
        ]);

        assert_eq!(result, vec![false, true, false, true, false]);
    }

    #[test]
    fn custom_exempt_set() {
        let rule = CustomElementRule::new("Tres", ["TresCanvas", "TresLeches"]).unwrap();

        assert!(!rule.is_foreign("TresLeches"));
        assert!(!rule.is_foreign("TresCanvas"));
        assert!(rule.is_foreign("TresMesh"));
    }

    #[test]
    fn rejects_empty_prefix() {
        let result = CustomElementRule::new("", Vec::<String>::new());

        assert_eq!(result, Err(RuleError::EmptyPrefix));
    }

    #[test]
    fn deserializes_with_defaults() {
        let rule: CustomElementRule = serde_json::from_str("{}").unwrap();

        assert_eq!(rule, CustomElementRule::default());
    }

    #[test]
    fn deserialization_rejects_empty_prefix() {
        let result: Result<CustomElementRule, _> = serde_json::from_str(r#"{"prefix": ""}"#);

        assert!(result.is_err());
    }
}
