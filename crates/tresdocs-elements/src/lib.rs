//! Custom element classification for TresJS component templates.
//!
//! The Vue template compiler asks, for every tag it meets, whether the tag
//! is a foreign (custom) element that must be passed through untouched.
//! TresJS registers a single real Vue component, `TresCanvas`; every other
//! `Tres*` element is resolved later by the custom renderer.

pub mod rule;
pub mod scanner;
pub mod template;

pub use rule::{
    is_foreign_tag, CustomElementRule, ElementClassifier, RuleError, DEFAULT_EXEMPT, DEFAULT_PREFIX,
};
pub use scanner::{ScanError, ScanReport, TemplateScanner};
pub use template::{extract_tags, template_block};
