//! Core types for findings and validation results.

use miette::Diagnostic;
use serde::{Deserialize, Serialize};

/// Severity level for findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message; only reachable through severity overrides.
    Info,
    /// Advisory finding, such as an ordering suggestion.
    Warning,
    /// Missing dependency or invalid entry; blocks export.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Error returned when parsing an unknown severity name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown severity `{0}` (expected info, warning or error)")]
pub struct ParseSeverityError(String);

impl std::str::FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "info" => Ok(Self::Info),
            "warning" | "warn" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}

impl From<Severity> for miette::Severity {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Info => Self::Advice,
            Severity::Warning => Self::Warning,
            Severity::Error => Self::Error,
        }
    }
}

/// Position of a check in the list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Zero-based list index.
    pub check_index: usize,
    /// Display name at the time of evaluation.
    pub check_name: String,
}

impl Location {
    /// Creates a new location.
    #[must_use]
    pub fn new(check_index: usize, check_name: impl Into<String>) -> Self {
        Self {
            check_index,
            check_name: check_name.into(),
        }
    }

    /// One-based position, as shown to users.
    #[must_use]
    pub fn position(&self) -> usize {
        self.check_index + 1
    }
}

/// A reference to another list position involved in a finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Label {
    /// Zero-based index of the referenced check.
    pub check_index: usize,
    /// Message for this label.
    pub message: String,
}

impl Label {
    /// Creates a new label.
    #[must_use]
    pub fn new(check_index: usize, message: impl Into<String>) -> Self {
        Self {
            check_index,
            message: message.into(),
        }
    }
}

/// A suggested fix for a finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Human-readable description of the fix.
    pub message: String,
}

impl Suggestion {
    /// Creates a new suggestion.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A condition found while validating a check list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    /// Rule code (e.g., "CB001").
    pub code: String,
    /// Rule name (e.g., "printer-driver").
    pub rule: String,
    /// Severity of this finding.
    pub severity: Severity,
    /// Check that triggered the finding.
    #[serde(flatten)]
    pub location: Location,
    /// Human-readable message.
    pub message: String,
    /// Optional suggestion for fixing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<Suggestion>,
    /// Other checks involved.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related: Vec<Label>,
}

impl Finding {
    /// Creates a new finding.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        rule: impl Into<String>,
        severity: Severity,
        location: Location,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            rule: rule.into(),
            severity,
            location,
            message: message.into(),
            suggestion: None,
            related: Vec::new(),
        }
    }

    /// Adds a suggestion to this finding.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: Suggestion) -> Self {
        self.suggestion = Some(suggestion);
        self
    }

    /// Adds a label pointing at another check.
    #[must_use]
    pub fn with_label(mut self, label: Label) -> Self {
        self.related.push(label);
        self
    }

    /// Zero-based index of the triggering check.
    #[must_use]
    pub fn check_index(&self) -> usize {
        self.location.check_index
    }

    /// Display name of the triggering check.
    #[must_use]
    pub fn check_name(&self) -> &str {
        &self.location.check_name
    }

    /// Formats the finding for terminal output.
    #[must_use]
    pub fn format(&self) -> String {
        use std::fmt::Write;
        let mut output = format!(
            "{} {} at check #{} \"{}\"\n",
            self.code,
            self.rule,
            self.location.position(),
            self.location.check_name,
        );
        let _ = writeln!(output, "  {}: {}", self.severity, self.message);
        for label in &self.related {
            let _ = writeln!(output, "  = note: #{}: {}", label.check_index + 1, label.message);
        }
        if let Some(suggestion) = &self.suggestion {
            let _ = writeln!(output, "  = help: {}", suggestion.message);
        }
        output
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{} {}: {} [{}] {}",
            self.location.position(),
            self.location.check_name,
            self.severity,
            self.code,
            self.message
        )
    }
}

/// Converts a [`Finding`] into a miette diagnostic for rich terminal output.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct FindingDiagnostic {
    code: String,
    message: String,
    help: Option<String>,
    severity: miette::Severity,
}

impl Diagnostic for FindingDiagnostic {
    fn code<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        Some(Box::new(&self.code))
    }

    fn severity(&self) -> Option<miette::Severity> {
        Some(self.severity)
    }

    fn help<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        self.help
            .as_ref()
            .map(|h| Box::new(h) as Box<dyn std::fmt::Display + 'a>)
    }
}

impl From<&Finding> for FindingDiagnostic {
    fn from(f: &Finding) -> Self {
        Self {
            code: format!("{}::{}", f.code, f.rule),
            message: format!(
                "#{} \"{}\": {}",
                f.location.position(),
                f.location.check_name,
                f.message
            ),
            help: f.suggestion.as_ref().map(|s| s.message.clone()),
            severity: f.severity.into(),
        }
    }
}

/// Result of one validation pass.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    /// All findings, in list order.
    pub findings: Vec<Finding>,
    /// Number of checks in the validated list.
    pub checks_evaluated: usize,
}

impl ValidationReport {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.findings.iter().any(|f| f.severity == Severity::Error)
    }

    /// Returns true if there are any warnings or errors.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        self.findings.iter().any(|f| f.severity >= Severity::Warning)
    }

    /// Whether the error group is non-empty, which blocks exporting the
    /// configuration. Advisories never block.
    #[must_use]
    pub fn blocks_export(&self) -> bool {
        self.has_errors()
    }

    /// Splits findings into the error group and the advisory group.
    #[must_use]
    pub fn partition(&self) -> (Vec<&Finding>, Vec<&Finding>) {
        self.findings
            .iter()
            .partition(|f| f.severity == Severity::Error)
    }

    /// Counts findings by severity as `(errors, warnings, infos)`.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        self.findings
            .iter()
            .fold((0, 0, 0), |(e, w, i), f| match f.severity {
                Severity::Error => (e + 1, w, i),
                Severity::Warning => (e, w + 1, i),
                Severity::Info => (e, w, i + 1),
            })
    }

    /// Checks if any findings meet or exceed the given severity threshold.
    #[must_use]
    pub fn has_findings_at(&self, severity: Severity) -> bool {
        self.findings.iter().any(|f| f.severity >= severity)
    }

    /// Formats findings at or above `threshold` as a plain-text report,
    /// grouped into errors and advisories, followed by a summary.
    #[must_use]
    pub fn format_report(&self, threshold: Severity) -> String {
        use std::fmt::Write;

        let (errors, advisories) = self.partition();
        let mut report = String::new();
        for (heading, group) in [("Errors", errors), ("Advisories", advisories)] {
            let shown: Vec<&Finding> = group
                .into_iter()
                .filter(|f| f.severity >= threshold)
                .collect();
            if shown.is_empty() {
                continue;
            }
            let _ = writeln!(report, "{heading}:\n");
            for finding in shown {
                let _ = writeln!(report, "{}", finding.format());
            }
        }

        let (errors, warnings, infos) = self.count_by_severity();
        let _ = write!(
            report,
            "Found {} error(s), {} warning(s), {} info(s) in {} check(s)",
            errors, warnings, infos, self.checks_evaluated
        );
        if self.blocks_export() {
            report.push_str("\nExport is blocked until the errors are fixed.");
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_finding(severity: Severity) -> Finding {
        Finding::new(
            "CB001",
            "printer-driver",
            severity,
            Location::new(2, "Office printer"),
            "Printer driver \"HP\" is not installed by any check",
        )
    }

    #[test]
    fn finding_serializes_flat_location() {
        let value = serde_json::to_value(make_finding(Severity::Error)).expect("serialize");
        assert_eq!(value["checkIndex"], 2);
        assert_eq!(value["checkName"], "Office printer");
        assert_eq!(value["severity"], "error");
        assert!(value.get("suggestion").is_none());
    }

    #[test]
    fn finding_format_includes_suggestion_and_labels() {
        let f = make_finding(Severity::Warning)
            .with_label(Label::new(5, "driver installed here"))
            .with_suggestion(Suggestion::new("Move the driver above the printer"));
        let formatted = f.format();
        assert!(formatted.contains("at check #3 \"Office printer\""));
        assert!(formatted.contains("= note: #6: driver installed here"));
        assert!(formatted.contains("= help: Move the driver above the printer"));
    }

    #[test]
    fn finding_display_is_one_line() {
        let display = format!("{}", make_finding(Severity::Error));
        assert_eq!(
            display,
            "#3 Office printer: error [CB001] Printer driver \"HP\" is not installed by any check"
        );
    }

    #[test]
    fn severity_parses_case_insensitively() {
        assert_eq!("Warning".parse::<Severity>(), Ok(Severity::Warning));
        assert_eq!("ERROR".parse::<Severity>(), Ok(Severity::Error));
        assert!("fatal".parse::<Severity>().is_err());
    }

    #[test]
    fn partition_separates_errors_from_advisories() {
        let mut report = ValidationReport::new();
        report.findings.push(make_finding(Severity::Warning));
        report.findings.push(make_finding(Severity::Error));
        report.findings.push(make_finding(Severity::Info));

        let (errors, advisories) = report.partition();
        assert_eq!(errors.len(), 1);
        assert_eq!(advisories.len(), 2);
        assert!(report.blocks_export());
        assert_eq!(report.count_by_severity(), (1, 1, 1));
    }

    #[test]
    fn warnings_alone_do_not_block_export() {
        let mut report = ValidationReport::new();
        report.findings.push(make_finding(Severity::Warning));
        assert!(!report.blocks_export());
        assert!(report.has_warnings());
        assert!(report.has_findings_at(Severity::Warning));
        assert!(!report.has_findings_at(Severity::Error));
    }

    #[test]
    fn diagnostic_carries_code_and_help() {
        let f = make_finding(Severity::Error).with_suggestion(Suggestion::new("Add a driver"));
        let diagnostic = FindingDiagnostic::from(&f);
        assert_eq!(
            diagnostic.code().map(|c| c.to_string()).as_deref(),
            Some("CB001::printer-driver")
        );
        assert_eq!(diagnostic.severity(), Some(miette::Severity::Error));
        assert_eq!(
            diagnostic.help().map(|h| h.to_string()).as_deref(),
            Some("Add a driver")
        );
    }

    #[test]
    fn format_report_filters_by_threshold() {
        let mut report = ValidationReport::new();
        report.checks_evaluated = 4;
        report.findings.push(make_finding(Severity::Warning));
        report
            .findings
            .push(make_finding(Severity::Error).with_suggestion(Suggestion::new("Add a driver")));

        insta::assert_snapshot!(report.format_report(Severity::Error), @r#"
        Errors:

        CB001 printer-driver at check #3 "Office printer"
          error: Printer driver "HP" is not installed by any check
          = help: Add a driver

        Found 1 error(s), 1 warning(s), 0 info(s) in 4 check(s)
        Export is blocked until the errors are fixed.
        "#);
    }

    #[test]
    fn format_report_lists_advisories_after_errors() {
        let mut report = ValidationReport::new();
        report.findings.push(make_finding(Severity::Info));
        report.findings.push(make_finding(Severity::Error));

        let text = report.format_report(Severity::Info);
        let errors_at = text.find("Errors:").expect("errors heading");
        let advisories_at = text.find("Advisories:").expect("advisories heading");
        assert!(errors_at < advisories_at);
        assert!(text.contains("  info: Printer driver"));
    }
}
