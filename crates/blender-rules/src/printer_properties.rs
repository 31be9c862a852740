//! Rule requiring the connection fields of a network printer.
//!
//! `PrinterInstalled` needs `printerName`, `driverName`, `printerIP` and
//! `portName` to create the port and queue, and an `LPR` port additionally
//! needs `lprQueue`.

use blender_core::utils::non_empty;
use blender_core::{CheckContext, CheckKind, Finding, ListContext, Rule, Severity, Suggestion};

/// Rule code for printer-properties.
pub const CODE: &str = "CB102";

/// Rule name for printer-properties.
pub const NAME: &str = "printer-properties";

/// Flags printers missing required connection properties.
#[derive(Debug, Clone, Default)]
pub struct PrinterPropertiesRule;

impl PrinterPropertiesRule {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for PrinterPropertiesRule {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Printers need printerName, driverName, printerIP, portName and, for LPR ports, lprQueue"
    }

    fn applies_to_disabled(&self) -> bool {
        true
    }

    fn check(&self, ctx: &CheckContext, _list: &ListContext) -> Vec<Finding> {
        let CheckKind::PrinterInstalled(printer) = &ctx.check.kind else {
            return Vec::new();
        };
        let name = &ctx.check.name;
        let mut findings = Vec::new();

        let required = [
            ("printerName", &printer.printer_name),
            ("driverName", &printer.driver_name),
            ("printerIP", &printer.printer_ip),
            ("portName", &printer.port_name),
        ];
        let missing: Vec<&str> = required
            .iter()
            .filter(|&&(_, value)| non_empty(value.as_ref()).is_none())
            .map(|&(key, _)| key)
            .collect();
        if !missing.is_empty() {
            findings.push(
                Finding::new(
                    CODE,
                    NAME,
                    Severity::Error,
                    ctx.location(),
                    format!(
                        "\"{name}\": PrinterInstalled requires printerName, driverName, printerIP and portName"
                    ),
                )
                .with_suggestion(Suggestion::new(format!("Fill in {}", missing.join(", ")))),
            );
        }

        let is_lpr = printer.port_type.as_deref() == Some("LPR");
        if is_lpr && non_empty(printer.lpr_queue.as_ref()).is_none() {
            findings.push(
                Finding::new(
                    CODE,
                    NAME,
                    Severity::Error,
                    ctx.location(),
                    format!("\"{name}\": LPR port type requires lprQueue"),
                )
                .with_suggestion(Suggestion::new("Set lprQueue or switch the port type to TCP")),
            );
        }

        findings
    }
}
