//! Classify tag names.

use std::path::Path;

use anyhow::Result;
use tresdocs_elements::ElementClassifier;

/// Run the classify command.
pub fn run(config: Option<&Path>, tags: &[String]) -> Result<()> {
    let rule = super::element_rule(config)?;

    for tag in tags {
        println!("{}\t{}", tag, label(rule.is_foreign(tag)));
    }

    Ok(())
}

fn label(foreign: bool) -> &'static str {
    if foreign {
        "foreign"
    } else {
        "component"
    }
}
