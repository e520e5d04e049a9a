//! # a11y-lint-rules
//!
//! Built-in evaluators for a11y-lint.
//!
//! One evaluator per source dialect, each a set of independent line-scoped
//! pattern checks:
//!
//! | Evaluator | Extensions | Rules |
//! |-----------|------------|-------|
//! | `markup` | `.html`, `.htm` | `img-alt`, `button-name`, `html-lang`, `click-events-have-key-events`, `no-positive-tabindex` |
//! | `component` | `.tsx`, `.jsx`, `.ts`, `.js` | `img-alt`, `click-events-have-key-events`, `interactive-supports-focus`, `aria-expanded-invalid`, `label-has-associated-control`, `no-autofocus`, `no-positive-tabindex` |
//! | `stylesheet` | `.css` | `focus-visible`, `color-contrast` |
//!
//! ## Usage
//!
//! ```ignore
//! use a11y_lint_core::Scanner;
//! use a11y_lint_rules::all_evaluators;
//!
//! let mut builder = Scanner::builder();
//! for evaluator in all_evaluators() {
//!     builder = builder.evaluator_box(evaluator);
//! }
//! let scanner = builder.build();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod component;
mod markup;
mod stylesheet;

pub use component::ComponentEvaluator;
pub use markup::MarkupEvaluator;
pub use stylesheet::StylesheetEvaluator;

/// Re-export core types for convenience.
pub use a11y_lint_core::{Evaluator, EvaluatorBox, Issue, RuleId, Severity};

/// Returns every built-in evaluator.
#[must_use]
pub fn all_evaluators() -> Vec<EvaluatorBox> {
    vec![
        Box::new(MarkupEvaluator::new()),
        Box::new(ComponentEvaluator::new()),
        Box::new(StylesheetEvaluator::new()),
    ]
}
