//! Shared output formatting for scan results.

use a11y_lint_core::{ScanResult, Severity};
use anyhow::Result;
use std::path::Path;

use crate::OutputFormat;

/// Print scan results in the specified format.
pub fn print(result: &ScanResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(result),
        OutputFormat::Json => println!("{}", result.format_records()?),
    }
    Ok(())
}

/// Terminal rendering of the report, with ANSI severity coloring.
///
/// Same grouping and wording as [`ScanResult::format_report`], which stays
/// plain for library use.
fn print_text(result: &ScanResult) {
    if result.issues.is_empty() {
        println!("\x1b[32mNo accessibility issues found.\x1b[0m");
        return;
    }

    println!("Found {} accessibility issue(s):", result.issues.len());

    let mut file_order: Vec<&Path> = Vec::new();
    for issue in &result.issues {
        if !file_order.contains(&issue.file.as_path()) {
            file_order.push(issue.file.as_path());
        }
    }

    for file in file_order {
        println!("\n{}", file.display());
        println!("{}", "-".repeat(80));
        for issue in result.issues.iter().filter(|i| i.file == file) {
            let severity_indicator = match issue.severity {
                Severity::Error => "\x1b[31merror\x1b[0m",
                Severity::Warning => "\x1b[33mwarning\x1b[0m",
            };
            println!(
                "{severity_indicator} line {}: {}",
                issue.line, issue.message
            );
            println!("  rule: {}", issue.rule);
            println!("  code: {}", issue.code_snippet);
            println!();
        }
    }

    let (errors, warnings) = result.count_by_severity();
    let summary_color = if errors > 0 { "\x1b[31m" } else { "\x1b[33m" };
    println!("{}", "-".repeat(80));
    println!("{summary_color}Summary: {errors} error(s), {warnings} warning(s)\x1b[0m");
}
