//! Evaluator for stylesheet files.
//!
//! Two checks, both heuristic. The focus check uses a 1-line lookback for a
//! `:focus` pseudo-selector rather than a selector-block parser, so it does
//! not verify the declaration is actually nested inside the `:focus` block.
//! The contrast check is a coarse lightness comparison, deliberately not the
//! WCAG relative-luminance formula; false positives and negatives are
//! expected and accepted.

use a11y_lint_core::{Evaluator, FileContext, Issue, RuleId};
use regex::Regex;

/// WCAG checks for stylesheets (`.css`).
pub struct StylesheetEvaluator {
    color_value: Regex,
    background_value: Regex,
}

impl Default for StylesheetEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl StylesheetEvaluator {
    /// Creates the evaluator, compiling its patterns once.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new() -> Self {
        Self {
            color_value: Regex::new(r"color:\s*#([0-9a-f]{3,6})").expect("valid regex"),
            background_value: Regex::new(r"background(?:-color)?:\s*#([0-9a-f]{3,6})")
                .expect("valid regex"),
        }
    }
}

impl Evaluator for StylesheetEvaluator {
    fn name(&self) -> &'static str {
        "stylesheet"
    }

    fn description(&self) -> &'static str {
        "WCAG checks for CSS stylesheets"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["css"]
    }

    fn check(&self, ctx: &FileContext) -> Vec<Issue> {
        let mut issues = Vec::new();

        for (idx, line) in ctx.lines.iter().enumerate() {
            let line_no = idx + 1;
            let lower = line.trim().to_lowercase();

            if lower.contains("outline:") && lower.contains("none") {
                let near_focus = lower.contains(":focus")
                    || ctx
                        .line_before(line_no)
                        .is_some_and(|prev| prev.to_lowercase().contains(":focus"));
                if near_focus {
                    issues.push(Issue::new(
                        ctx.path,
                        line_no,
                        RuleId::FocusVisible,
                        "Removing outline on :focus requires alternative visible focus indicator (WCAG 2.4.7)",
                        line,
                    ));
                }
            }

            if let (Some(color), Some(background)) = (
                self.color_value.captures(&lower),
                self.background_value.captures(&lower),
            ) {
                if similar_lightness(&color[1], &background[1]) {
                    issues.push(Issue::new(
                        ctx.path,
                        line_no,
                        RuleId::ColorContrast,
                        "Potential color contrast issue - verify 4.5:1 ratio for text (WCAG 1.4.3)",
                        line,
                    ));
                }
            }
        }

        issues
    }
}

/// Lightness of a hex color as the truncated mean of its three channels.
///
/// 3-digit hex is expanded by doubling each digit. Hex runs that are
/// neither 3 nor 6 digits have no defined lightness and yield `None`.
fn hex_lightness(hex: &str) -> Option<u32> {
    let expanded: String = if hex.len() == 3 {
        hex.chars().flat_map(|c| [c, c]).collect()
    } else {
        hex.to_string()
    };
    if expanded.len() != 6 {
        return None;
    }

    let r = u32::from_str_radix(&expanded[0..2], 16).ok()?;
    let g = u32::from_str_radix(&expanded[2..4], 16).ok()?;
    let b = u32::from_str_radix(&expanded[4..6], 16).ok()?;
    Some((r + g + b) / 3)
}

/// Whether two hex colors are both light (> 180) or both dark (< 75).
///
/// Coarse proxy for the WCAG contrast ratio; any other combination, and any
/// color without a defined lightness, is not considered similar.
fn similar_lightness(first: &str, second: &str) -> bool {
    match (hex_lightness(first), hex_lightness(second)) {
        (Some(l1), Some(l2)) => (l1 > 180 && l2 > 180) || (l1 < 75 && l2 < 75),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use a11y_lint_core::Severity;
    use std::path::Path;

    fn check(content: &str) -> Vec<Issue> {
        let ctx = FileContext::new(Path::new("styles.css"), content);
        StylesheetEvaluator::new().check(&ctx)
    }

    #[test]
    fn outline_none_on_focus_line_is_a_warning() {
        let issues = check("a:focus { outline: none; }");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].rule, RuleId::FocusVisible);
        assert_eq!(issues[0].severity, Severity::Warning);
    }

    #[test]
    fn outline_none_after_focus_line_is_a_warning() {
        let issues = check("a:focus {\n  outline: none;\n}");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].line, 2);
    }

    #[test]
    fn outline_none_without_focus_context_passes() {
        assert!(check("a {\n  outline: none;\n}").is_empty());
    }

    #[test]
    fn lookback_is_one_line_only() {
        // :focus two lines up is outside the window.
        assert!(check("a:focus {\n  color: red;\n  outline: none;\n}").is_empty());
    }

    #[test]
    fn similar_light_colors_on_one_line_are_a_warning() {
        let issues = check("p { color: #fff; background: #eee; }");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].rule, RuleId::ColorContrast);
    }

    #[test]
    fn similar_dark_colors_are_a_warning() {
        let issues = check("p { color: #000; background-color: #222222; }");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].rule, RuleId::ColorContrast);
    }

    #[test]
    fn contrasting_colors_pass() {
        assert!(check("p { color: #000; background: #fff; }").is_empty());
    }

    #[test]
    fn declarations_on_separate_lines_pass() {
        // The contrast check is single-line only.
        assert!(check("p {\n  color: #fff;\n  background: #eee;\n}").is_empty());
    }

    #[test]
    fn focus_and_contrast_are_independent() {
        let issues = check(":focus {\n  background: #eee; color: #fff; outline: none;\n}");
        let rules: Vec<RuleId> = issues.iter().map(|i| i.rule).collect();
        assert_eq!(rules, vec![RuleId::FocusVisible, RuleId::ColorContrast]);
    }

    #[test]
    fn lightness_expands_three_digit_hex() {
        assert_eq!(hex_lightness("fff"), hex_lightness("ffffff"));
        assert_eq!(hex_lightness("fff"), Some(255));
        assert_eq!(hex_lightness("000"), Some(0));
    }

    #[test]
    fn lightness_is_the_truncated_channel_mean() {
        // (0x80 + 0x40 + 0x21) / 3 = (128 + 64 + 33) / 3 = 75
        assert_eq!(hex_lightness("804021"), Some(75));
    }

    #[test]
    fn boundary_lightness_is_not_similar() {
        // 75 is not below the dark threshold; 180 is not above the light one.
        assert!(!similar_lightness("4b4b4b", "000"));
        assert!(!similar_lightness("b4b4b4", "fff"));
    }

    #[test]
    fn mixed_lightness_is_not_similar() {
        assert!(!similar_lightness("fff", "000"));
    }

    #[test]
    fn malformed_hex_runs_are_never_similar() {
        // 4- and 5-digit runs have no defined lightness.
        assert!(!similar_lightness("ffff", "eee"));
        assert!(!similar_lightness("fffff", "eeeee"));
    }
}
