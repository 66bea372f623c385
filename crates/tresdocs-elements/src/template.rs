//! Tag extraction from Vue templates.

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

static COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("Invalid comment regex"));

/// Comments and script/style blocks, none of which can hold the template.
static NON_TEMPLATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<!--.*?-->|<script\b[^>]*>.*?</script\s*>|<style\b[^>]*>.*?</style\s*>")
        .expect("Invalid block regex")
});

static TEMPLATE_OPEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<template[\s>]").expect("Invalid template regex"));

static INTERPOLATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{\{.*?\}\}").expect("Invalid interpolation regex"));

/// An opening tag through the end of its attributes. Quoted values are
/// consumed whole so a `<` inside them never starts a tag.
static OPEN_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<([A-Za-z][A-Za-z0-9_.:\-]*)(?:"[^"]*"|'[^']*'|[^>"'])*"#)
        .expect("Invalid open tag regex")
});

/// Return the body of the outermost `<template>` block of a single-file
/// component, or `None` when the file has no template.
///
/// `<template>` text inside comments, `<script>` or `<style>` is ignored.
pub fn template_block(sfc: &str) -> Option<&str> {
    let skipped: Vec<Range<usize>> = NON_TEMPLATE_RE.find_iter(sfc).map(|m| m.range()).collect();
    let outside = |pos: usize| !skipped.iter().any(|r| r.contains(&pos));

    let start = TEMPLATE_OPEN_RE
        .find_iter(sfc)
        .map(|m| m.start())
        .find(|&pos| outside(pos))?;
    let open_end = start + sfc[start..].find('>')? + 1;
    let close = sfc
        .match_indices("</template>")
        .map(|(pos, _)| pos)
        .filter(|&pos| outside(pos))
        .last()?;

    if close < open_end {
        return None;
    }

    Some(&sfc[open_end..close])
}

/// Extract opening tag names in document order.
///
/// Closing tags, HTML comments, `{{ }}` interpolations and quoted
/// attribute values are ignored. Every occurrence is returned, so a tag
/// used twice appears twice.
pub fn extract_tags(source: &str) -> Vec<String> {
    let without_comments = COMMENT_RE.replace_all(source, "");
    let markup = INTERPOLATION_RE.replace_all(&without_comments, "");

    OPEN_TAG_RE
        .captures_iter(&markup)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn extracts_tags_in_order() {
        let source = r##"
<TresCanvas clear-color="#82DBC5">
  <TresPerspectiveCamera :position="[3, 3, 3]" />
  <TresMesh>
    <TresTorusGeometry :args="[1, 0.5, 16, 32]" />
    <TresMeshBasicMaterial color="orange" />
  </TresMesh>
  <OrbitControls />
</TresCanvas>
"##;

        assert_eq!(
            extract_tags(source),
            vec![
                "TresCanvas",
                "TresPerspectiveCamera",
                "TresMesh",
                "TresTorusGeometry",
                "TresMeshBasicMaterial",
                "OrbitControls",
            ]
        );
    }

    #[test]
    fn skips_comments() {
        let source = "<div><!-- <TresMesh /> --><span /></div>";

        assert_eq!(extract_tags(source), vec!["div", "span"]);
    }

    #[test]
    fn finds_template_block() {
        let sfc = r#"<script setup lang="ts">
const x = 1 < 2
</script>

<template>
  <TresCanvas>
    <template v-if="ready"><TresMesh /></template>
  </TresCanvas>
</template>

<style>.a { color: red }</style>
"#;

        let block = template_block(sfc).unwrap();
        let tags = extract_tags(block);

        assert_eq!(tags, vec!["TresCanvas", "template", "TresMesh"]);
    }

    #[test]
    fn ignores_less_than_in_attributes_and_interpolations() {
        let source = r#"<TresMesh v-if="a<b" :scale="x < y ? 1 : 2">{{ n<m }}<span title='1<2' /></TresMesh>"#;

        assert_eq!(extract_tags(source), vec!["TresMesh", "span"]);
    }

    #[test]
    fn ignores_template_text_outside_the_block() {
        let sfc = r#"<!-- <template><p /></template> -->
<script setup>
const html = '<template><div /></template>'
</script>

<template>
  <TresMesh />
</template>

<style>
/* </template> */
</style>
"#;

        let block = template_block(sfc).unwrap();

        assert_eq!(extract_tags(block), vec!["TresMesh"]);
    }

    #[test]
    fn no_template_block() {
        assert!(template_block("<script>export default {}</script>").is_none());
    }
}
