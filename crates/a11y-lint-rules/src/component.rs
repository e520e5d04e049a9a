//! Evaluator for component (JSX/TSX) files.
//!
//! Same line-scoped philosophy as the markup evaluator. Attribute checks are
//! case-sensitive on the idiomatic component spellings (`onClick`,
//! `tabIndex`, `htmlFor`) with a case-insensitive fallback for the lowercase
//! DOM forms, so both conventions are tolerated.

use a11y_lint_core::{Evaluator, FileContext, Issue, RuleId};
use regex::Regex;

/// WCAG checks for component markup (`.tsx`, `.jsx`, `.ts`, `.js`).
pub struct ComponentEvaluator {
    aria_expanded_value: Regex,
    tabindex_value: Regex,
}

impl Default for ComponentEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentEvaluator {
    /// Creates the evaluator, compiling its patterns once.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new() -> Self {
        Self {
            aria_expanded_value: Regex::new(r#"aria-expanded=["']?(?:true|false|\{)"#)
                .expect("valid regex"),
            tabindex_value: Regex::new(r"tabIndex=\{?([0-9]+)\}?").expect("valid regex"),
        }
    }
}

impl Evaluator for ComponentEvaluator {
    fn name(&self) -> &'static str {
        "component"
    }

    fn description(&self) -> &'static str {
        "WCAG checks for JSX/TSX component markup"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["tsx", "jsx", "ts", "js"]
    }

    #[allow(clippy::too_many_lines)]
    fn check(&self, ctx: &FileContext) -> Vec<Issue> {
        let mut issues = Vec::new();

        for (idx, line) in ctx.lines.iter().enumerate() {
            let line_no = idx + 1;
            let lower = line.to_lowercase();

            // Covers both alt="..." and the expression form alt={...}.
            if line.contains("<img") && !line.contains("alt=") {
                issues.push(Issue::new(
                    ctx.path,
                    line_no,
                    RuleId::ImgAlt,
                    "Image missing alt attribute (WCAG 1.1.1)",
                    line,
                ));
            }

            if lower.contains("onclick=")
                && (line.contains("<div") || line.contains("<span"))
                && !line.contains("role=")
                && !lower.contains("tabindex=")
            {
                issues.push(Issue::new(
                    ctx.path,
                    line_no,
                    RuleId::ClickEventsHaveKeyEvents,
                    "onClick on non-interactive element needs role=\"button\" and onKeyDown (WCAG 2.1.1)",
                    line,
                ));
            }

            if (line.contains(r#"role="button""#) || line.contains("role='button'"))
                && !lower.contains("onkeydown=")
            {
                issues.push(Issue::new(
                    ctx.path,
                    line_no,
                    RuleId::InteractiveSupportsFocus,
                    "Element with role=\"button\" should have onKeyDown handler",
                    line,
                ));
            }

            if line.contains("aria-expanded=") && !self.aria_expanded_value.is_match(line) {
                issues.push(Issue::new(
                    ctx.path,
                    line_no,
                    RuleId::AriaExpandedInvalid,
                    "aria-expanded must be \"true\" or \"false\" or boolean expression",
                    line,
                ));
            }

            if line.contains("<label")
                && !line.contains("htmlFor=")
                && line.contains('>')
                && !line.contains("<input")
            {
                issues.push(Issue::new(
                    ctx.path,
                    line_no,
                    RuleId::LabelHasAssociatedControl,
                    "Label should have htmlFor attribute or wrap an input",
                    line,
                ));
            }

            if lower.contains("autofocus") {
                issues.push(Issue::new(
                    ctx.path,
                    line_no,
                    RuleId::NoAutofocus,
                    "autoFocus can be disruptive for keyboard and screen reader users",
                    line,
                ));
            }

            if let Some(caps) = self.tabindex_value.captures(line) {
                // The capture is all digits; any nonzero digit marks a
                // positive value, whatever its width.
                if caps[1].bytes().any(|b| b != b'0') {
                    issues.push(Issue::new(
                        ctx.path,
                        line_no,
                        RuleId::NoPositiveTabindex,
                        "Positive tabIndex values can cause focus order issues",
                        line,
                    ));
                }
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use a11y_lint_core::Severity;
    use std::path::Path;

    fn check(content: &str) -> Vec<Issue> {
        let ctx = FileContext::new(Path::new("Button.tsx"), content);
        ComponentEvaluator::new().check(&ctx)
    }

    #[test]
    fn img_without_alt_is_an_error() {
        let issues = check(r#"<img src={logo} />"#);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].rule, RuleId::ImgAlt);
    }

    #[test]
    fn img_with_literal_alt_passes() {
        assert!(check(r#"<img src={logo} alt="logo" />"#).is_empty());
    }

    #[test]
    fn img_with_expression_alt_passes() {
        assert!(check("<img src={logo} alt={altText} />").is_empty());
    }

    #[test]
    fn onclick_div_without_role_is_an_error() {
        let issues = check("<div onClick={fn}>text</div>");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].rule, RuleId::ClickEventsHaveKeyEvents);
        assert_eq!(issues[0].severity, Severity::Error);
    }

    #[test]
    fn onclick_div_with_tabindex_passes() {
        assert!(check("<div onClick={fn} tabIndex={0} role=\"button\" onKeyDown={fn}>text</div>")
            .is_empty());
    }

    #[test]
    fn onclick_div_with_tabindex_but_no_role_still_passes_click_rule() {
        // tabIndex alone suppresses the click rule; no other rule fires.
        assert!(check("<div onClick={fn} tabIndex={0}>text</div>").is_empty());
    }

    #[test]
    fn lowercase_onclick_spelling_is_detected() {
        let issues = check(r#"<span onclick="go()">x</span>"#);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].rule, RuleId::ClickEventsHaveKeyEvents);
    }

    #[test]
    fn role_button_without_keydown_is_a_warning() {
        let issues = check(r#"<div role="button" tabIndex={0} onClick={fn}>x</div>"#);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].rule, RuleId::InteractiveSupportsFocus);
        assert_eq!(issues[0].severity, Severity::Warning);
    }

    #[test]
    fn role_button_with_keydown_passes() {
        assert!(
            check(r#"<div role="button" tabIndex={0} onClick={fn} onKeyDown={fn}>x</div>"#)
                .is_empty()
        );
    }

    #[test]
    fn single_quoted_role_button_is_detected() {
        let issues = check("<div role='button' tabIndex={0} onClick={fn}>x</div>");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].rule, RuleId::InteractiveSupportsFocus);
    }

    #[test]
    fn aria_expanded_boolean_values_pass() {
        assert!(check(r#"<button aria-expanded="true">x</button>"#).is_empty());
        assert!(check(r#"<button aria-expanded="false">x</button>"#).is_empty());
        assert!(check("<button aria-expanded={isOpen}>x</button>").is_empty());
    }

    #[test]
    fn aria_expanded_other_value_is_an_error() {
        let issues = check(r#"<button aria-expanded="yes">x</button>"#);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].rule, RuleId::AriaExpandedInvalid);
    }

    #[test]
    fn label_without_htmlfor_is_a_warning() {
        let issues = check("<label>Name</label>");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].rule, RuleId::LabelHasAssociatedControl);
    }

    #[test]
    fn label_with_htmlfor_passes() {
        assert!(check(r#"<label htmlFor="name">Name</label>"#).is_empty());
    }

    #[test]
    fn label_wrapping_input_passes() {
        assert!(check("<label>Name <input value={name} alt=\"\" /></label>").is_empty());
    }

    #[test]
    fn autofocus_is_a_warning() {
        let issues = check(r#"<input autoFocus alt="x" />"#);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].rule, RuleId::NoAutofocus);
    }

    #[test]
    fn positive_tabindex_expression_is_a_warning() {
        let issues = check("<a tabIndex={2}>x</a>");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].rule, RuleId::NoPositiveTabindex);
    }

    #[test]
    fn positive_tabindex_literal_is_a_warning() {
        let issues = check(r#"<a tabIndex=3>x</a>"#);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].rule, RuleId::NoPositiveTabindex);
    }

    #[test]
    fn zero_tabindex_passes() {
        assert!(check("<a tabIndex={0}>x</a>").is_empty());
    }

    #[test]
    fn tabindex_beyond_integer_range_is_still_flagged() {
        let issues = check("<a tabIndex={99999999999999999999}>x</a>");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].rule, RuleId::NoPositiveTabindex);
    }
}
