//! Evaluator trait for defining per-dialect rule sets.

use crate::context::FileContext;
use crate::types::Issue;

/// A set of line-scoped accessibility checks for one source dialect.
///
/// Implement this trait to add checks for a family of file extensions.
/// Evaluators receive the file split into lines and run each of their
/// pattern checks independently; a single line may raise several issues.
///
/// # Example
///
/// ```ignore
/// use a11y_lint_core::{Evaluator, FileContext, Issue, RuleId};
///
/// pub struct SvgEvaluator;
///
/// impl Evaluator for SvgEvaluator {
///     fn name(&self) -> &'static str { "svg" }
///     fn extensions(&self) -> &'static [&'static str] { &["svg"] }
///
///     fn check(&self, ctx: &FileContext) -> Vec<Issue> {
///         ctx.lines
///             .iter()
///             .enumerate()
///             .filter(|(_, line)| line.contains("<svg") && !line.contains("aria-"))
///             .map(|(i, line)| {
///                 Issue::new(ctx.path, i + 1, RuleId::ImgAlt, "Untitled svg", line)
///             })
///             .collect()
///     }
/// }
/// ```
pub trait Evaluator: Send + Sync {
    /// Returns the short name of this evaluator (e.g., "markup").
    fn name(&self) -> &'static str;

    /// Returns a brief description of what this evaluator checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// File extensions (without the leading dot) this evaluator handles.
    fn extensions(&self) -> &'static [&'static str];

    /// Checks a single file and returns any issues found.
    ///
    /// Issues must be appended in ascending line order, and within a line
    /// in the order the rules are evaluated, so that scan output is
    /// deterministic for identical input.
    fn check(&self, ctx: &FileContext) -> Vec<Issue>;
}

/// Type alias for boxed Evaluator trait objects.
pub type EvaluatorBox = Box<dyn Evaluator>;
