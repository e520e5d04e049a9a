//! Check command implementation.

use a11y_lint_core::Scanner;
use a11y_lint_rules::all_evaluators;
use anyhow::{bail, Result};
use std::path::PathBuf;

use super::output;
use crate::OutputFormat;

/// Runs the check command.
///
/// Scans the given files in order and prints the result in the chosen
/// format. The process exits 1 when any error-severity issue was found;
/// warnings alone exit 0.
pub fn run(files: &[PathBuf], format: OutputFormat) -> Result<()> {
    if files.is_empty() {
        bail!("no input files (usage: a11y-lint check <FILES>...)");
    }

    let mut builder = Scanner::builder();
    for evaluator in all_evaluators() {
        builder = builder.evaluator_box(evaluator);
    }
    let scanner = builder.build();

    tracing::debug!(
        "Scanning {} file(s) with {} evaluator(s)",
        files.len(),
        scanner.evaluator_count()
    );

    let result = scanner.scan_files(files);

    output::print(&result, format)?;

    if result.has_errors() {
        std::process::exit(1);
    }

    Ok(())
}
