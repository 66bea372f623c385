//! The TresJS documentation config, written by `tresdocs init`.

/// Default `docs.toml`.
pub const DEFAULT_CONFIG: &str = r##"# TresJS documentation site

[site]
title = "TresJS"
description = "Declarative ThreeJS using Vue Components"

[[site.head]]
tag = "link"
attrs = { rel = "icon", type = "image/svg", href = "/favicon.svg" }

[[site.head]]
tag = "meta"
attrs = { name = "theme-color", content = "#82DBC5" }

[[site.head]]
tag = "meta"
attrs = { name = "twitter:card", content = "summary_large_image" }

[[site.head]]
tag = "meta"
attrs = { name = "twitter:site", content = "@tresjs_dev" }

[[site.head]]
tag = "meta"
attrs = { name = "twitter:creator", content = "@tresjs_dev" }

[[site.head]]
tag = "meta"
attrs = { property = "og:type", content = "website" }

[[site.head]]
tag = "meta"
attrs = { property = "og:site_name", content = "TresJS" }

[[site.head]]
tag = "meta"
attrs = { property = "og:image", content = "https://repository-images.githubusercontent.com/571314349/10996566-7f70-473b-a8e5-4e56fc0ca850" }

[[site.head]]
tag = "meta"
attrs = { property = "twitter:image", content = "https://repository-images.githubusercontent.com/571314349/10996566-7f70-473b-a8e5-4e56fc0ca850" }

[[site.head]]
tag = "script"
attrs = { defer = "true", "data-domain" = "tresjs.org", src = "https://plausible.io/js/script.js" }

[theme]
logo = "/logo.svg"

[theme.search]
provider = "local"

# Navigation bar

[[theme.nav]]
text = "Guide"
link = "/guide/"

[[theme.nav]]
text = "API"
link = "/api/tres-canvas"

[[theme.nav]]
text = "Resources"

[[theme.nav.items]]
text = "Team"
link = "/team"

[[theme.nav.items]]
text = "Releases"
link = "https://github.com/Tresjs/tres/releases"

[[theme.nav.items]]
text = "Playground"
link = "https://playground.tresjs.org/"

[[theme.nav.items]]
text = "Ecosystem"

[[theme.nav.items.items]]
text = "Cientos 💛"
link = "https://cientos.tresjs.org/"

# Sidebar

[[theme.sidebar]]
text = "Guide"
items = [
  { text = "Introduction", link = "/guide/" },
  { text = "Getting Started", link = "/guide/getting-started" },
  { text = "Your first Scene", link = "/guide/your-first-scene" },
  { text = "Nuxt", link = "/guide/nuxt" },
  { text = "Troubleshooting", link = "/guide/troubleshooting" },
  { text = "Migrate from v1", link = "/guide/migration-guide" },
]

[[theme.sidebar]]
text = "API"
items = [
  { text = "TresCanvas", link = "/api/tres-canvas" },
  { text = "Instances, arguments and props", link = "/api/instances-arguments-and-props" },
  { text = "Composables", link = "/api/composables" },
  { text = "Events", link = "/api/events" },
]

[[theme.sidebar]]
text = "Examples"
items = [
  { text = "Orbit Controls", link = "/examples/orbit-controls" },
  { text = "Basic Animations", link = "/examples/basic-animations" },
  { text = "Groups", link = "/examples/groups" },
  { text = "Load Textures", link = "/examples/load-textures" },
  { text = "Load Models", link = "/examples/load-models" },
  { text = "Load Text", link = "/examples/text-3d" },
]

[[theme.sidebar]]
text = "Advanced"
items = [
  { text = "Extending", link = "/advanced/extending" },
  { text = "primitive", link = "/advanced/primitive" },
  { text = "Caveats", link = "/advanced/caveats" },
]

[[theme.sidebar]]
text = "Ecosystem"
items = [
  { text = "Cientos 💛", link = "https://cientos.tresjs.org/" },
]

[[theme.social_links]]
icon = "github"
link = "https://github.com/tresjs/tres"

[[theme.social_links]]
icon = "twitter"
link = "https://twitter.com/tresjs_dev"

[[theme.social_links]]
icon = "discord"
link = "https://discord.gg/UCr96AQmWn"

# Bundler

[bundler.optimize_deps]
include = ["three"]
exclude = ["vitepress"]

[bundler.server.hmr]
overlay = false

[bundler.resolve]
dedupe = ["@tresjs/cientos", "three"]
# ignore | warn | deny
unreachable_dedupe = "warn"

[bundler.resolve.alias]
"@tresjs/core" = "../../dist/tres.js"

# Template compiler

[compiler.custom_elements]
prefix = "Tres"
exempt = ["TresCanvas"]
"##;
