//! # a11y-lint-core
//!
//! Core framework for line-scoped accessibility linting.
//!
//! This crate provides the foundational traits and types for building
//! accessibility scanners. It includes:
//!
//! - [`Evaluator`] trait for per-dialect rule sets
//! - [`Scanner`] for extension-based dispatch and issue accumulation
//! - [`Issue`] for representing findings, with a closed [`RuleId`] taxonomy
//! - [`ScanResult`] with human-report and JSON-record renderings
//!
//! ## Example
//!
//! ```ignore
//! use a11y_lint_core::Scanner;
//!
//! let scanner = Scanner::builder()
//!     .evaluator(MyEvaluator::new())
//!     .build();
//!
//! let result = scanner.scan_files(&paths);
//! print!("{}", result.format_report());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod context;
mod evaluator;
mod scanner;
mod types;

pub use context::FileContext;
pub use evaluator::{Evaluator, EvaluatorBox};
pub use scanner::{ScanError, Scanner, ScannerBuilder};
pub use types::{Issue, RuleId, ScanResult, Severity};
