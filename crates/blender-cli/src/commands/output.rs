//! Shared output formatting for validation results.

use anyhow::Result;
use blender_core::{FindingDiagnostic, Severity, ValidationReport};

use crate::OutputFormat;

/// Print validation results in the specified format.
pub fn print(report: &ValidationReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(report),
        OutputFormat::Json => return print_json(report),
        OutputFormat::Compact => print_compact(report),
        OutputFormat::Pretty => print_pretty(report),
    }
    Ok(())
}

fn print_text(report: &ValidationReport) {
    println!("{}", report.format_report(Severity::Info));
}

fn print_summary(report: &ValidationReport) {
    let (errors, warnings, infos) = report.count_by_severity();
    let summary_color = if errors > 0 {
        "\x1b[31m"
    } else if warnings > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };

    println!(
        "{}Found {} error(s), {} warning(s), {} info(s) in {} check(s)\x1b[0m",
        summary_color, errors, warnings, infos, report.checks_evaluated
    );
    if report.blocks_export() {
        println!("Export is blocked until the errors are fixed.");
    }
}

fn print_json(report: &ValidationReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    println!("{json}");
    Ok(())
}

fn print_compact(report: &ValidationReport) {
    for finding in &report.findings {
        println!("{finding}");
    }
}

fn print_pretty(report: &ValidationReport) {
    for finding in &report.findings {
        let diagnostic = miette::Report::new(FindingDiagnostic::from(finding));
        println!("{diagnostic:?}");
    }
    print_summary(report);
}
