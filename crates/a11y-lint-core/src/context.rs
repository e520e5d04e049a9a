//! Context types for evaluator execution.

use std::path::Path;

/// Context provided to evaluators for a single file.
///
/// Holds the file path and its content pre-split into lines. Splitting
/// preserves original numbering: `lines[i]` is line `i + 1`.
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// Path of the file being scanned.
    pub path: &'a Path,
    /// Full file contents.
    pub content: &'a str,
    /// Content split on `\n`, in order.
    pub lines: Vec<&'a str>,
}

impl<'a> FileContext<'a> {
    /// Creates a new file context.
    #[must_use]
    pub fn new(path: &'a Path, content: &'a str) -> Self {
        Self {
            path,
            content,
            lines: content.split('\n').collect(),
        }
    }

    /// Returns the line immediately preceding the given 1-indexed line.
    ///
    /// Used by context-sensitive rules with a 1-line lookback window.
    /// Returns `None` for the first line.
    #[must_use]
    pub fn line_before(&self, line_no: usize) -> Option<&'a str> {
        if line_no >= 2 {
            self.lines.get(line_no - 2).copied()
        } else {
            None
        }
    }
}
