//! Scanner for orchestrating per-file rule dispatch.

use crate::context::FileContext;
use crate::evaluator::{Evaluator, EvaluatorBox};
use crate::types::{Issue, ScanResult};

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur while scanning a file.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The path did not resolve to a readable file.
    #[error("cannot read {path}: {source}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

/// Builder for configuring a [`Scanner`].
#[derive(Default)]
pub struct ScannerBuilder {
    evaluators: Vec<EvaluatorBox>,
}

impl ScannerBuilder {
    /// Creates a new builder with no evaluators registered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an evaluator to the scanner.
    #[must_use]
    pub fn evaluator<E: Evaluator + 'static>(mut self, evaluator: E) -> Self {
        self.evaluators.push(Box::new(evaluator));
        self
    }

    /// Adds a boxed evaluator to the scanner.
    #[must_use]
    pub fn evaluator_box(mut self, evaluator: EvaluatorBox) -> Self {
        self.evaluators.push(evaluator);
        self
    }

    /// Builds the scanner.
    #[must_use]
    pub fn build(self) -> Scanner {
        Scanner {
            evaluators: self.evaluators,
        }
    }
}

/// Dispatches files to evaluators and accumulates issues.
///
/// Use [`Scanner::builder()`] to construct an instance. Each file is scanned
/// independently; no state is shared across files, so scanning the same file
/// twice yields identical results.
pub struct Scanner {
    evaluators: Vec<EvaluatorBox>,
}

impl Scanner {
    /// Creates a new builder for configuring a scanner.
    #[must_use]
    pub fn builder() -> ScannerBuilder {
        ScannerBuilder::new()
    }

    /// Returns the number of registered evaluators.
    #[must_use]
    pub fn evaluator_count(&self) -> usize {
        self.evaluators.len()
    }

    /// Scans a single file and returns the issues found.
    ///
    /// Reads the whole file into memory, then dispatches to exactly one
    /// evaluator chosen by file extension. Files with an extension no
    /// evaluator claims are silently skipped with an empty issue list, so
    /// mixed file lists need no pre-filtering.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Read`] when the path does not resolve to a
    /// readable file.
    pub fn scan_file(&self, path: &Path) -> Result<Vec<Issue>, ScanError> {
        debug!("Scanning: {}", path.display());

        let content = std::fs::read_to_string(path).map_err(|source| ScanError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let Some(evaluator) = self
            .evaluators
            .iter()
            .find(|e| e.extensions().contains(&ext))
        else {
            debug!("No evaluator for extension {ext:?}, skipping {}", path.display());
            return Ok(Vec::new());
        };

        let ctx = FileContext::new(path, &content);
        Ok(evaluator.check(&ctx))
    }

    /// Scans a list of files independently, in argument order.
    ///
    /// A file that cannot be read is reported on the error stream and
    /// contributes zero issues; scanning continues with the remaining
    /// files.
    #[must_use]
    pub fn scan_files(&self, paths: &[PathBuf]) -> ScanResult {
        let mut result = ScanResult::new();

        for path in paths {
            match self.scan_file(path) {
                Ok(issues) => {
                    result.issues.extend(issues);
                    result.files_scanned += 1;
                }
                Err(e) => warn!("{e}"),
            }
        }

        debug!(
            "Scan complete: {} issue(s) in {} file(s)",
            result.issues.len(),
            result.files_scanned
        );

        result
    }
}
