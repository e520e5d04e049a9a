//! Evaluator for HTML markup files.
//!
//! All checks are line-scoped with no forward lookahead: a tag split across
//! lines is not detected, which is an accepted false negative of this
//! heuristic style, not a bug. Tag and attribute names match
//! case-insensitively; attribute presence is substring-based, so occurrences
//! inside strings or comments are not distinguished.

use a11y_lint_core::{Evaluator, FileContext, Issue, RuleId};
use regex::Regex;

/// WCAG checks for HTML markup (`.html`, `.htm`).
pub struct MarkupEvaluator {
    button_text: Regex,
    tabindex_value: Regex,
}

impl Default for MarkupEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkupEvaluator {
    /// Creates the evaluator, compiling its patterns once.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new() -> Self {
        Self {
            button_text: Regex::new(r"(?i)<button[^>]*>(.*?)</button>").expect("valid regex"),
            tabindex_value: Regex::new(r#"tabindex=["']?([0-9]+)"#).expect("valid regex"),
        }
    }
}

impl Evaluator for MarkupEvaluator {
    fn name(&self) -> &'static str {
        "markup"
    }

    fn description(&self) -> &'static str {
        "WCAG checks for HTML markup"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["html", "htm"]
    }

    fn check(&self, ctx: &FileContext) -> Vec<Issue> {
        let mut issues = Vec::new();

        for (idx, line) in ctx.lines.iter().enumerate() {
            let line_no = idx + 1;
            let lower = line.to_lowercase();

            if lower.contains("<img") && !lower.contains("alt=") {
                issues.push(Issue::new(
                    ctx.path,
                    line_no,
                    RuleId::ImgAlt,
                    "Image missing alt attribute (WCAG 1.1.1)",
                    line,
                ));
            }

            if let Some(caps) = self.button_text.captures(line) {
                if caps[1].trim().is_empty() && !lower.contains("aria-label=") {
                    issues.push(Issue::new(
                        ctx.path,
                        line_no,
                        RuleId::ButtonName,
                        "Button has no accessible name (WCAG 4.1.2)",
                        line,
                    ));
                }
            }

            if lower.contains("<html") && !lower.contains("lang=") {
                issues.push(Issue::new(
                    ctx.path,
                    line_no,
                    RuleId::HtmlLang,
                    "HTML element missing lang attribute (WCAG 3.1.1)",
                    line,
                ));
            }

            if lower.contains("onclick=")
                && (lower.contains("<div") || lower.contains("<span"))
                && !lower.contains("role=")
                && !lower.contains("tabindex=")
            {
                issues.push(Issue::new(
                    ctx.path,
                    line_no,
                    RuleId::ClickEventsHaveKeyEvents,
                    "Click handler on non-interactive element without role/tabindex (WCAG 2.1.1)",
                    line,
                ));
            }

            if let Some(caps) = self.tabindex_value.captures(&lower) {
                // The capture is all digits; any nonzero digit marks a
                // positive value, whatever its width.
                if caps[1].bytes().any(|b| b != b'0') {
                    issues.push(Issue::new(
                        ctx.path,
                        line_no,
                        RuleId::NoPositiveTabindex,
                        "Positive tabindex values can cause focus order issues",
                        line,
                    ));
                }
            }
        }

        issues
    }
}
