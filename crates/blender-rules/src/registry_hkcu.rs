//! Rule warning about `HKCU:` registry paths.
//!
//! The remediation runs as SYSTEM, so `HKCU:` resolves to SYSTEM's own hive
//! instead of the signed-in user's.

use blender_core::{CheckContext, CheckKind, Finding, ListContext, Rule, Severity, Suggestion};

/// Rule code for registry-hkcu.
pub const CODE: &str = "CB103";

/// Rule name for registry-hkcu.
pub const NAME: &str = "registry-hkcu";

/// Warns when a `RegistryValue` path targets `HKCU:`.
#[derive(Debug, Clone, Default)]
pub struct RegistryHkcu;

impl RegistryHkcu {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for RegistryHkcu {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "RegistryValue paths under HKCU: modify SYSTEM's hive, not the user's"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn applies_to_disabled(&self) -> bool {
        true
    }

    fn check(&self, ctx: &CheckContext, _list: &ListContext) -> Vec<Finding> {
        let CheckKind::RegistryValue(value) = &ctx.check.kind else {
            return Vec::new();
        };
        if !value.path.as_deref().is_some_and(|p| p.contains("HKCU:")) {
            return Vec::new();
        }

        vec![Finding::new(
            CODE,
            NAME,
            Severity::Warning,
            ctx.location(),
            format!(
                "\"{}\": HKCU:\\ is SYSTEM's registry hive when the remediation runs, not the signed-in user's",
                ctx.check.name
            ),
        )
        .with_suggestion(Suggestion::new("Use HKLM:\\ for machine-wide settings"))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{check, run};
    use serde_json::json;

    fn registry(path: &str) -> blender_core::Check {
        check(json!({
            "id": "1", "name": "Wallpaper", "type": "RegistryValue",
            "properties": { "path": path, "name": "Wallpaper", "value": "x", "type": "String" }
        }))
    }

    #[test]
    fn test_hkcu_path_warns() {
        let findings = run(RegistryHkcu::new(), &[registry("HKCU:\\Control Panel\\Desktop")]);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Warning);
    }

    #[test]
    fn test_hklm_path_is_clean() {
        assert!(run(RegistryHkcu::new(), &[registry("HKLM:\\SOFTWARE\\Policies")]).is_empty());
    }
}
