//! Template scanner for single-file components.
//!
//! Walks a source tree, pulls the tag names out of every `.vue` template
//! and runs them through an [`ElementClassifier`], the same way the
//! template compiler does once per encountered tag.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use walkdir::{DirEntry, WalkDir};

use crate::rule::ElementClassifier;
use crate::template::{extract_tags, template_block};

/// Tag usage collected from a scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Number of templates scanned
    pub files: usize,

    /// Foreign tags and how often each was seen
    pub foreign: BTreeMap<String, usize>,

    /// Tags left to component resolution, with counts
    pub resolvable: BTreeMap<String, usize>,
}

impl ScanReport {
    /// Record one occurrence of `tag`.
    pub fn record(&mut self, tag: &str, foreign: bool) {
        let bucket = if foreign {
            &mut self.foreign
        } else {
            &mut self.resolvable
        };
        *bucket.entry(tag.to_string()).or_insert(0) += 1;
    }

    /// Total number of tag occurrences seen.
    pub fn total(&self) -> usize {
        self.foreign.values().sum::<usize>() + self.resolvable.values().sum::<usize>()
    }
}

/// Scans directories of Vue single-file components.
#[derive(Debug, Default)]
pub struct TemplateScanner;

impl TemplateScanner {
    /// Create a new scanner.
    pub fn new() -> Self {
        Self
    }

    /// Scan every `.vue` file under `dir`.
    pub fn scan<C>(&self, dir: &Path, classifier: &C) -> Result<ScanReport, ScanError>
    where
        C: ElementClassifier + ?Sized,
    {
        if !dir.is_dir() {
            return Err(ScanError::DirectoryNotFound(dir.display().to_string()));
        }

        let mut report = ScanReport::default();

        for entry in WalkDir::new(dir)
            .follow_links(true)
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_skipped_dir(e))
            .filter_map(|e| e.ok())
        {
            let path = entry.path();

            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("vue") {
                continue;
            }

            let source = match fs::read_to_string(path) {
                Ok(s) => s,
                Err(e) => {
                    tracing::warn!("Failed to read {}: {}", path.display(), e);
                    continue;
                }
            };

            let Some(block) = template_block(&source) else {
                tracing::debug!("No template in {}", path.display());
                continue;
            };

            let tags = extract_tags(block);
            tracing::debug!("Scanned {} ({} tags)", path.display(), tags.len());

            for tag in &tags {
                report.record(tag, classifier.is_foreign(tag));
            }
            report.files += 1;
        }

        Ok(report)
    }
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }

    let name = entry.file_name().to_str().unwrap_or("");
    name.starts_with('.') || name == "node_modules" || name == "dist"
}

/// Errors that can occur when scanning templates.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Template directory not found: {0}")]
    DirectoryNotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::CustomElementRule;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    const SCENE: &str = r#"<script setup>
import { TresCanvas } from '@tresjs/core'
</script>

<template>
  <TresCanvas>
    <TresPerspectiveCamera />
    <TresMesh><TresBoxGeometry /></TresMesh>
    <TresMesh><TresSphereGeometry /></TresMesh>
  </TresCanvas>
</template>
"#;

    #[test]
    fn scans_vue_templates() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("Scene.vue"), SCENE).unwrap();

        let report = TemplateScanner::new()
            .scan(temp.path(), &CustomElementRule::default())
            .unwrap();

        assert_eq!(report.files, 1);
        assert_eq!(report.foreign.get("TresMesh"), Some(&2));
        assert_eq!(report.resolvable.get("TresCanvas"), Some(&1));
        assert_eq!(report.total(), 6);
    }

    #[test]
    fn skips_node_modules_and_other_files() {
        let temp = tempdir().unwrap();
        let vendored = temp.path().join("node_modules").join("pkg");
        fs::create_dir_all(&vendored).unwrap();
        fs::write(vendored.join("Vendored.vue"), SCENE).unwrap();
        fs::write(temp.path().join("notes.md"), "<TresMesh />").unwrap();

        let report = TemplateScanner::new()
            .scan(temp.path(), &CustomElementRule::default())
            .unwrap();

        assert_eq!(report, ScanReport::default());
    }

    #[test]
    fn errors_on_missing_directory() {
        let temp = tempdir().unwrap();

        let result = TemplateScanner::new().scan(
            &temp.path().join("missing"),
            &CustomElementRule::default(),
        );

        assert!(matches!(result, Err(ScanError::DirectoryNotFound(_))));
    }
}
