//! Core types for accessibility issues and scan results.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Severity level for accessibility issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Heuristic or style concern that should be reviewed.
    Warning,
    /// Definite WCAG failure that must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Identifier of a built-in accessibility rule.
///
/// The rule set is a fixed, closed enumeration: new rules are added by
/// extending this enum and the evaluator that raises them, never discovered
/// at runtime. Each rule carries a fixed severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleId {
    /// Image element without alternative text.
    ImgAlt,
    /// Button with no accessible name.
    ButtonName,
    /// `<html>` element without a `lang` attribute.
    HtmlLang,
    /// Click handler on a non-interactive element.
    ClickEventsHaveKeyEvents,
    /// `tabindex` greater than zero.
    NoPositiveTabindex,
    /// `role="button"` without a key-down handler.
    InteractiveSupportsFocus,
    /// `aria-expanded` with a non-boolean value.
    AriaExpandedInvalid,
    /// Label element without an associated control.
    LabelHasAssociatedControl,
    /// Auto-focus attribute present.
    NoAutofocus,
    /// Focus outline removed without an alternative indicator.
    FocusVisible,
    /// Foreground and background colors with similar lightness.
    ColorContrast,
}

impl RuleId {
    /// Every rule, in a stable order suitable for `list-rules` output.
    pub const ALL: [Self; 11] = [
        Self::ImgAlt,
        Self::ButtonName,
        Self::HtmlLang,
        Self::ClickEventsHaveKeyEvents,
        Self::NoPositiveTabindex,
        Self::InteractiveSupportsFocus,
        Self::AriaExpandedInvalid,
        Self::LabelHasAssociatedControl,
        Self::NoAutofocus,
        Self::FocusVisible,
        Self::ColorContrast,
    ];

    /// Returns the kebab-case rule identifier.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ImgAlt => "img-alt",
            Self::ButtonName => "button-name",
            Self::HtmlLang => "html-lang",
            Self::ClickEventsHaveKeyEvents => "click-events-have-key-events",
            Self::NoPositiveTabindex => "no-positive-tabindex",
            Self::InteractiveSupportsFocus => "interactive-supports-focus",
            Self::AriaExpandedInvalid => "aria-expanded-invalid",
            Self::LabelHasAssociatedControl => "label-has-associated-control",
            Self::NoAutofocus => "no-autofocus",
            Self::FocusVisible => "focus-visible",
            Self::ColorContrast => "color-contrast",
        }
    }

    /// Returns the fixed severity for issues raised under this rule.
    #[must_use]
    pub fn severity(self) -> Severity {
        match self {
            Self::ImgAlt
            | Self::ButtonName
            | Self::HtmlLang
            | Self::ClickEventsHaveKeyEvents
            | Self::AriaExpandedInvalid => Severity::Error,
            Self::NoPositiveTabindex
            | Self::InteractiveSupportsFocus
            | Self::LabelHasAssociatedControl
            | Self::NoAutofocus
            | Self::FocusVisible
            | Self::ColorContrast => Severity::Warning,
        }
    }

    /// Returns a brief description of what this rule checks.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::ImgAlt => "Images must have an alt attribute (WCAG 1.1.1)",
            Self::ButtonName => "Buttons must have an accessible name (WCAG 4.1.2)",
            Self::HtmlLang => "The html element must declare a lang attribute (WCAG 3.1.1)",
            Self::ClickEventsHaveKeyEvents => {
                "Click handlers on div/span need role and tabindex (WCAG 2.1.1)"
            }
            Self::NoPositiveTabindex => "Positive tabindex values disturb focus order",
            Self::InteractiveSupportsFocus => {
                "Elements with role=\"button\" should handle key-down events"
            }
            Self::AriaExpandedInvalid => "aria-expanded must be true, false, or an expression",
            Self::LabelHasAssociatedControl => {
                "Labels need an htmlFor binding or a wrapped input"
            }
            Self::NoAutofocus => "autoFocus is disruptive for assistive technology users",
            Self::FocusVisible => {
                "Removing the focus outline requires an alternative indicator (WCAG 2.4.7)"
            }
            Self::ColorContrast => "Text and background colors need sufficient contrast (WCAG 1.4.3)",
        }
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One accessibility violation found during a scan.
///
/// Issues are immutable once constructed: evaluators append them to the
/// run's result and nothing mutates or removes them afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Path of the scanned file.
    pub file: PathBuf,
    /// Line number where the pattern matched (1-indexed).
    pub line: usize,
    /// Reserved position indicator; always 0 (no sub-line localization).
    pub column: usize,
    /// Severity, fixed per rule.
    pub severity: Severity,
    /// The rule that raised this issue.
    pub rule: RuleId,
    /// Human-readable explanation, may cite a WCAG clause.
    pub message: String,
    /// The triggering line, whitespace-trimmed, verbatim.
    pub code_snippet: String,
}

impl Issue {
    /// Creates a new issue at the given line.
    ///
    /// Severity is derived from the rule; the snippet is trimmed for display.
    #[must_use]
    pub fn new(
        file: impl Into<PathBuf>,
        line: usize,
        rule: RuleId,
        message: impl Into<String>,
        snippet: &str,
    ) -> Self {
        Self {
            file: file.into(),
            line,
            column: 0,
            severity: rule.severity(),
            rule,
            message: message.into(),
            code_snippet: snippet.trim().to_string(),
        }
    }
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {} [{}] {}",
            self.file.display(),
            self.line,
            self.severity,
            self.rule,
            self.message
        )
    }
}

/// Result of scanning one or more files.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ScanResult {
    /// All issues found, in file-argument order then line order.
    pub issues: Vec<Issue>,
    /// Number of files successfully read and scanned.
    pub files_scanned: usize,
}

impl ScanResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if any issue has error severity.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Error)
    }

    /// Counts issues by severity as `(errors, warnings)`.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize) {
        let errors = self
            .issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .count();
        let warnings = self
            .issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .count();
        (errors, warnings)
    }

    /// Adds issues from another result.
    pub fn extend(&mut self, other: Self) {
        self.issues.extend(other.issues);
        self.files_scanned += other.files_scanned;
    }

    /// Formats the human-readable report.
    ///
    /// Issues are grouped by file in first-seen order, each block listing
    /// line, message, rule id, and the triggering snippet, followed by a
    /// summary of error and warning totals. A run with no issues renders a
    /// single success line. Pure function of the issue sequence.
    #[must_use]
    pub fn format_report(&self) -> String {
        use std::fmt::Write;

        if self.issues.is_empty() {
            return "No accessibility issues found.\n".to_string();
        }

        let mut report = String::new();
        let _ = writeln!(report, "Found {} accessibility issue(s):", self.issues.len());

        let mut file_order: Vec<&Path> = Vec::new();
        for issue in &self.issues {
            if !file_order.contains(&issue.file.as_path()) {
                file_order.push(issue.file.as_path());
            }
        }

        for file in file_order {
            let _ = writeln!(report, "\n{}", file.display());
            let _ = writeln!(report, "{}", "-".repeat(80));
            for issue in self.issues.iter().filter(|i| i.file == file) {
                let _ = writeln!(
                    report,
                    "{} line {}: {}",
                    issue.severity, issue.line, issue.message
                );
                let _ = writeln!(report, "  rule: {}", issue.rule);
                let _ = writeln!(report, "  code: {}", issue.code_snippet);
                let _ = writeln!(report);
            }
        }

        let (errors, warnings) = self.count_by_severity();
        let _ = writeln!(report, "{}", "-".repeat(80));
        let _ = writeln!(report, "Summary: {errors} error(s), {warnings} warning(s)");

        report
    }

    /// Serializes the full ordered issue sequence as a JSON record list.
    ///
    /// All fields of every issue are preserved verbatim; no grouping, no
    /// filtering. Intended for machine consumption.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn format_records(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.issues)
    }
}
