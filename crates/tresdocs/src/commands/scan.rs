//! Report tag usage across Vue templates.

use std::path::Path;

use anyhow::Result;
use tresdocs_elements::TemplateScanner;

/// Run the scan command.
pub fn run(config: Option<&Path>, dir: &Path) -> Result<()> {
    let rule = super::element_rule(config)?;
    let report = TemplateScanner::new().scan(dir, &rule)?;

    tracing::info!(
        "Scanned {} templates, {} tags ({} foreign)",
        report.files,
        report.total(),
        report.foreign.values().sum::<usize>()
    );

    println!("foreign");
    for (tag, count) in &report.foreign {
        println!("  {}\t{}", tag, count);
    }
    println!("component");
    for (tag, count) in &report.resolvable {
        println!("  {}\t{}", tag, count);
    }

    Ok(())
}
