//! Rule requiring custom shortcut icons to be deployed before the shortcut.
//!
//! # Rationale
//!
//! A shortcut whose `iconLocation` points at a file that does not exist yet
//! renders with a blank icon. Custom icons are deployed by `FilesExist`
//! checks, which must run before the shortcut is created.
//!
//! # Detected Patterns
//!
//! Applies to `ShortcutExists` and `ShortcutProperties` checks with an
//! `iconLocation` that is not a system or embedded icon (see
//! [`is_embedded_or_system_icon`]). A `FilesExist` check deploys the icon when
//!
//! - in `SingleFile` mode, its `destinationPath` is the icon location, or
//! - otherwise, its `destinationPath` is the icon's folder and its `files`
//!   list the icon's file name.
//!
//! No such check at all is an error; one positioned after the shortcut is a
//! warning. Paths compare case-insensitively.

use blender_core::utils::{
    eq_ignore_case, is_embedded_or_system_icon, non_empty, split_icon_location,
};
use blender_core::{
    names, Check, CheckContext, CheckKind, FileMode, Finding, Label, ListContext, Prerequisite,
    Rule, Severity, Suggestion,
};

/// Rule code for shortcut-icon.
pub const CODE: &str = "CB002";

/// Rule name for shortcut-icon.
pub const NAME: &str = "shortcut-icon";

/// Requires a `FilesExist` check deploying each custom shortcut icon.
#[derive(Debug, Clone, Default)]
pub struct ShortcutIcon;

impl ShortcutIcon {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// Whether `candidate` is a `FilesExist` check that deploys the icon.
fn deploys_icon(candidate: &Check, location: &str, folder: &str, file_name: &str) -> bool {
    let CheckKind::FilesExist(files) = &candidate.kind else {
        return false;
    };
    let Some(destination) = non_empty(files.destination_path.as_ref()) else {
        return false;
    };

    match files.mode() {
        FileMode::SingleFile => eq_ignore_case(destination, location),
        FileMode::MultipleFiles => {
            eq_ignore_case(destination, folder)
                && files.files.iter().any(|f| eq_ignore_case(f, file_name))
        }
    }
}

impl Rule for ShortcutIcon {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Custom shortcut icons need an earlier FilesExist check that deploys them"
    }

    fn check(&self, ctx: &CheckContext, list: &ListContext) -> Vec<Finding> {
        let (CheckKind::ShortcutExists(shortcut) | CheckKind::ShortcutProperties(shortcut)) =
            &ctx.check.kind
        else {
            return Vec::new();
        };
        let Some(location) = non_empty(shortcut.icon_location.as_ref()) else {
            return Vec::new();
        };
        if is_embedded_or_system_icon(location) {
            return Vec::new();
        }

        let (folder, file_name) = split_icon_location(location);
        let prerequisite = list.locate(names::FILES_EXIST, ctx.index, |candidate| {
            deploys_icon(candidate, location, &folder, &file_name)
        });

        let name = &ctx.check.name;
        match prerequisite {
            Prerequisite::Satisfied { .. } => Vec::new(),
            Prerequisite::Missing => vec![Finding::new(
                CODE,
                NAME,
                Severity::Error,
                ctx.location(),
                format!(
                    "\"{name}\" uses icon \"{location}\", but no enabled FilesExist check deploys it"
                ),
            )
            .with_suggestion(Suggestion::new(format!(
                "Add a FilesExist check copying \"{file_name}\" to \"{folder}\" above this shortcut"
            )))],
            Prerequisite::Misordered { index } => vec![Finding::new(
                CODE,
                NAME,
                Severity::Warning,
                ctx.location(),
                format!(
                    "\"{name}\" should come AFTER the FilesExist check that deploys its icon \"{location}\""
                ),
            )
            .with_label(Label::new(index, "icon is deployed here"))
            .with_suggestion(Suggestion::new(
                "Move the FilesExist check above this shortcut",
            ))],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{check, run};
    use serde_json::json;

    fn shortcut(icon: &str) -> Check {
        check(json!({
            "id": "1", "name": "App shortcut", "type": "ShortcutExists",
            "properties": { "path": "C:\\Users\\Public\\Desktop\\App.lnk", "iconLocation": icon }
        }))
    }

    fn icon_files(destination: &str, files: &[&str]) -> Check {
        check(json!({
            "id": "2", "name": "Icons", "type": "FilesExist",
            "properties": {
                "mode": "MultipleFiles",
                "destinationPath": destination,
                "files": files,
                "sourceAssetPath": "Icons"
            }
        }))
    }

    fn single_file(destination: &str) -> Check {
        check(json!({
            "id": "3", "name": "Icon", "type": "FilesExist",
            "properties": { "mode": "SingleFile", "destinationPath": destination }
        }))
    }

    #[test]
    fn test_system_icon_is_excluded() {
        let findings = run(
            ShortcutIcon::new(),
            &[shortcut("C:\\Windows\\System32\\shell32.dll,5")],
        );
        assert!(findings.is_empty());
    }

    #[test]
    fn test_missing_icon_is_error() {
        let findings = run(ShortcutIcon::new(), &[shortcut("C:\\Icons\\app.ico")]);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Error);
        assert_eq!(findings[0].check_index(), 0);
    }

    #[test]
    fn test_multiple_files_deployment_satisfies() {
        let checks = [
            icon_files("c:\\icons", &["other.ico", "APP.ICO"]),
            shortcut("C:\\Icons\\app.ico"),
        ];
        assert!(run(ShortcutIcon::new(), &checks).is_empty());
    }

    #[test]
    fn test_multiple_files_needs_matching_folder() {
        let checks = [
            icon_files("C:\\Other", &["app.ico"]),
            shortcut("C:\\Icons\\app.ico"),
        ];
        let findings = run(ShortcutIcon::new(), &checks);
        assert_eq!(findings[0].severity, Severity::Error);
    }

    #[test]
    fn test_single_file_deployment_satisfies() {
        let checks = [single_file("C:\\ICONS\\APP.ico"), shortcut("C:\\Icons\\app.ico")];
        assert!(run(ShortcutIcon::new(), &checks).is_empty());
    }

    #[test]
    fn test_deployment_after_shortcut_is_warning() {
        let checks = [
            shortcut("C:\\Icons\\app.ico"),
            icon_files("C:\\Icons", &["app.ico"]),
        ];
        let findings = run(ShortcutIcon::new(), &checks);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Warning);
        assert_eq!(findings[0].related[0].check_index, 1);
    }

    #[test]
    fn test_shortcut_properties_checks_are_covered() {
        let properties = check(json!({
            "id": "1", "name": "Props", "type": "ShortcutProperties",
            "properties": { "iconLocation": "D:\\Branding\\logo.ico" }
        }));
        let findings = run(ShortcutIcon::new(), &[properties]);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Error);
    }

    #[test]
    fn test_disabled_deployment_does_not_satisfy() {
        let checks = [
            icon_files("C:\\Icons", &["app.ico"]).with_enabled(false),
            shortcut("C:\\Icons\\app.ico"),
        ];
        assert_eq!(run(ShortcutIcon::new(), &checks)[0].severity, Severity::Error);
    }

    #[test]
    fn test_empty_icon_location_is_skipped() {
        assert!(run(ShortcutIcon::new(), &[shortcut("")]).is_empty());
    }
}
