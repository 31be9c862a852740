//! Rule requiring Start menu pins of an Assigned Access profile to exist.
//!
//! # Rationale
//!
//! A kiosk profile silently drops Start pins whose `.lnk` file is missing.
//! Shortcuts are created by `ShortcutExists` checks, and the profile should
//! only be applied once all of them ran.
//!
//! # Detected Patterns
//!
//! - a `startPins` entry with no enabled `ShortcutExists` check at the same
//!   path, unless the pin lies in the Windows folder (one warning per pin)
//! - any enabled `ShortcutExists` check positioned after the profile (one
//!   warning, labelled with the first such shortcut)
//!
//! Pins and shortcut paths compare after [`normalize_shell_path`], so
//! `%AllUsersProfile%\...` and `C:\ProgramData\...` are the same location.

use blender_core::utils::{is_under_windows, non_empty, normalize_shell_path};
use blender_core::{
    names, CheckContext, CheckKind, Finding, Label, ListContext, Rule, Severity, Suggestion,
};
use std::collections::HashSet;

/// Rule code for assigned-access-pins.
pub const CODE: &str = "CB003";

/// Rule name for assigned-access-pins.
pub const NAME: &str = "assigned-access-pins";

/// Requires a shortcut for every Start pin and shortcuts ordered before the profile.
#[derive(Debug, Clone, Default)]
pub struct AssignedAccessPins;

impl AssignedAccessPins {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for AssignedAccessPins {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Assigned Access Start pins need ShortcutExists checks that run before the profile"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, ctx: &CheckContext, list: &ListContext) -> Vec<Finding> {
        let CheckKind::AssignedAccess(profile) = &ctx.check.kind else {
            return Vec::new();
        };

        let shortcuts: HashSet<String> = list
            .of_type(names::SHORTCUT_EXISTS)
            .filter_map(|(_, check)| match &check.kind {
                CheckKind::ShortcutExists(s) => non_empty(s.path.as_ref()).map(normalize_shell_path),
                _ => None,
            })
            .collect();

        let name = &ctx.check.name;
        let mut findings: Vec<Finding> = profile
            .start_pins
            .iter()
            .filter(|pin| !pin.trim().is_empty())
            .filter(|pin| {
                let normalized = normalize_shell_path(pin);
                !shortcuts.contains(&normalized) && !is_under_windows(&normalized)
            })
            .map(|pin| {
                Finding::new(
                    CODE,
                    NAME,
                    Severity::Warning,
                    ctx.location(),
                    format!("\"{name}\" pins \"{pin}\", but no enabled ShortcutExists check creates it"),
                )
                .with_suggestion(Suggestion::new(format!(
                    "Add a ShortcutExists check with path \"{pin}\" above this profile"
                )))
            })
            .collect();

        if let Some(later) = list.first_after(names::SHORTCUT_EXISTS, ctx.index) {
            findings.push(
                Finding::new(
                    CODE,
                    NAME,
                    Severity::Warning,
                    ctx.location(),
                    format!("\"{name}\" (AssignedAccess) should come AFTER all ShortcutExists checks"),
                )
                .with_label(Label::new(later, "shortcut created after the profile"))
                .with_suggestion(Suggestion::new(
                    "Move the AssignedAccess check below the last ShortcutExists check",
                )),
            );
        }

        findings
    }
}
