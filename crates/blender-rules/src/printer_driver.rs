//! Rule requiring each printer's driver to be installed earlier in the list.
//!
//! # Rationale
//!
//! `Add-Printer` fails when the driver it names is not installed yet. The
//! remediation tool runs checks top to bottom, so the `DriverInstalled` check
//! must both exist and precede the printer.
//!
//! # Detected Patterns
//!
//! - `PrinterInstalled` whose `driverName` matches no enabled
//!   `DriverInstalled` check (error)
//! - a matching `DriverInstalled` check that only appears after the printer
//!   (warning)
//!
//! Driver names compare case-insensitively.

use blender_core::utils::{eq_ignore_case, non_empty};
use blender_core::{
    names, Check, CheckContext, CheckKind, Finding, Label, ListContext, Prerequisite, Rule,
    Severity, Suggestion,
};

/// Rule code for printer-driver.
pub const CODE: &str = "CB001";

/// Rule name for printer-driver.
pub const NAME: &str = "printer-driver";

/// Requires a `DriverInstalled` check before every printer that names a driver.
#[derive(Debug, Clone, Default)]
pub struct PrinterDriver;

impl PrinterDriver {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for PrinterDriver {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Printers need their driver installed by an earlier DriverInstalled check"
    }

    fn check(&self, ctx: &CheckContext, list: &ListContext) -> Vec<Finding> {
        let CheckKind::PrinterInstalled(printer) = &ctx.check.kind else {
            return Vec::new();
        };
        let Some(driver) = non_empty(printer.driver_name.as_ref()) else {
            return Vec::new();
        };

        let installs_driver = |candidate: &Check| match &candidate.kind {
            CheckKind::DriverInstalled(d) => {
                non_empty(d.driver_name.as_ref()).is_some_and(|name| eq_ignore_case(name, driver))
            }
            _ => false,
        };

        let name = &ctx.check.name;
        match list.locate(names::DRIVER_INSTALLED, ctx.index, installs_driver) {
            Prerequisite::Satisfied { .. } => Vec::new(),
            Prerequisite::Missing => vec![Finding::new(
                CODE,
                NAME,
                Severity::Error,
                ctx.location(),
                format!(
                    "\"{name}\" needs printer driver \"{driver}\", but no enabled DriverInstalled check installs it"
                ),
            )
            .with_suggestion(Suggestion::new(format!(
                "Add a DriverInstalled check for \"{driver}\" above this printer"
            )))],
            Prerequisite::Misordered { index } => vec![Finding::new(
                CODE,
                NAME,
                Severity::Warning,
                ctx.location(),
                format!(
                    "\"{name}\" (PrinterInstalled) should come AFTER the DriverInstalled check for \"{driver}\""
                ),
            )
            .with_label(Label::new(index, format!("driver \"{driver}\" is installed here")))
            .with_suggestion(Suggestion::new(
                "Move the driver check above this printer",
            ))],
        }
    }
}
