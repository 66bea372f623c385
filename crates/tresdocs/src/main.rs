//! tresdocs CLI - configuration tooling for the TresJS documentation site.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "tresdocs")]
#[command(about = "Configuration tooling for the TresJS documentation site")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the config file (defaults to the nearest docs.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the default docs.toml
    Init {
        /// Overwrite an existing config
        #[arg(short, long)]
        yes: bool,
    },

    /// Validate the config and check dedupe entries
    Check {
        /// package.json whose dependencies dedupe entries must appear in
        #[arg(long)]
        package_json: Option<PathBuf>,
    },

    /// Write the host configuration as JSON
    Export {
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Print the navigation bar and sidebar
    Nav {
        /// Page path to resolve breadcrumbs and prev/next links for
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Classify tag names as foreign elements or components
    Classify {
        /// Tag names to classify
        #[arg(required = true)]
        tags: Vec<String>,
    },

    /// Report tag usage across Vue templates
    Scan {
        /// Directory to scan
        #[arg(default_value = ".")]
        dir: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = cli.config.as_deref();

    match cli.command {
        Commands::Init { yes } => commands::init::run(config, yes)?,
        Commands::Check { package_json } => commands::check::run(config, package_json)?,
        Commands::Export { output, compact } => commands::export::run(config, output, compact)?,
        Commands::Nav { path } => commands::nav::run(config, path)?,
        Commands::Classify { tags } => commands::classify::run(config, &tags)?,
        Commands::Scan { dir } => commands::scan::run(config, &dir)?,
    }

    Ok(())
}
