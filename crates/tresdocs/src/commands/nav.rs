//! Print navigation trees.

use std::path::Path;

use anyhow::Result;
use tresdocs_config::{pager, trail, walk, LinkKind, NavItem};

/// Run the nav command.
pub fn run(config: Option<&Path>, path: Option<String>) -> Result<()> {
    let config = super::load_config(config)?;
    let theme = &config.theme;

    let Some(path) = path else {
        println!("nav");
        print!("{}", render_tree(&theme.nav));
        println!("sidebar");
        print!("{}", render_tree(&theme.sidebar));
        for (prefix, items) in &theme.sidebars {
            println!("sidebar {}", prefix);
            print!("{}", render_tree(items));
        }
        return Ok(());
    };

    let sidebar = theme.sidebar_for(&path);

    match trail(sidebar, &path).or_else(|| trail(&theme.nav, &path)) {
        Some(crumbs) => {
            let names: Vec<&str> = crumbs.iter().map(|i| i.text()).collect();
            println!("trail: {}", names.join(" > "));
        }
        None => tracing::warn!("{} is not linked from the navigation", path),
    }

    let pages = pager(sidebar, &path);
    if let Some(prev) = pages.prev {
        println!("prev: {}", describe(prev));
    }
    if let Some(next) = pages.next {
        println!("next: {}", describe(next));
    }

    Ok(())
}

/// Indented outline, two spaces per level.
fn render_tree(items: &[NavItem]) -> String {
    walk(items)
        .map(|(depth, item)| format!("{}{}\n", "  ".repeat(depth + 1), describe(item)))
        .collect()
}

fn describe(item: &NavItem) -> String {
    match (item.link_target(), item.link_kind()) {
        (Some(link), Some(LinkKind::External)) => format!("{} -> {} (external)", item.text(), link),
        (Some(link), _) => format!("{} -> {}", item.text(), link),
        (None, _) => item.text().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_indented_tree() {
        let items = vec![NavItem::group(
            "Resources",
            vec![
                NavItem::link("Team", "/team").unwrap(),
                NavItem::link("Releases", "https://github.com/Tresjs/tres/releases").unwrap(),
            ],
        )
        .unwrap()];

        assert_eq!(
            render_tree(&items),
            "  Resources\n    Team -> /team\n    Releases -> https://github.com/Tresjs/tres/releases (external)\n"
        );
    }
}
