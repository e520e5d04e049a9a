//! a11y-lint CLI tool.
//!
//! Usage:
//! ```bash
//! a11y-lint check [OPTIONS] <FILES>...
//! a11y-lint list-rules
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

/// Accessibility linter for markup, component, and stylesheet files
#[derive(Parser)]
#[command(name = "a11y-lint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan files for accessibility issues
    Check {
        /// Files to scan (unsupported extensions are skipped)
        files: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// List available rules
    ListRules,
}

/// Output format for scan results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable grouped report.
    #[default]
    Text,
    /// JSON record list.
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // Diagnostics go to stderr; stdout carries only the report.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Check { files, format } => commands::check::run(&files, format),
        Commands::ListRules => {
            commands::list_rules::run();
            Ok(())
        }
    }
}
