//! Rule warning about asset paths that repeat the asset folder name.
//!
//! `sourceAssetPath` is already relative to the configuration's `Assets`
//! folder, so `Assets\Fonts` resolves to `Assets\Assets\Fonts` at runtime.
//!
//! Applies to `FilesExist`, `FolderHasFiles`, `FileContent`,
//! `DriverInstalled` and `CertificateInstalled`. The prefix can be changed
//! through the `prefix` option:
//!
//! ```toml
//! [rules.asset-path-prefix]
//! prefix = "Assets"
//! ```

use blender_core::{CheckContext, CheckKind, Finding, ListContext, Rule, Severity, Suggestion};

/// Rule code for asset-path-prefix.
pub const CODE: &str = "CB104";

/// Rule name for asset-path-prefix.
pub const NAME: &str = "asset-path-prefix";

const DEFAULT_PREFIX: &str = "Assets";

/// Warns when `sourceAssetPath` starts with the asset folder name.
#[derive(Debug, Clone)]
pub struct AssetPathPrefix {
    prefix: String,
}

impl Default for AssetPathPrefix {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetPathPrefix {
    /// Creates a new rule flagging the `Assets` prefix.
    #[must_use]
    pub fn new() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }

    /// Sets the folder name to flag.
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }
}

fn source_asset_path(kind: &CheckKind) -> Option<&String> {
    match kind {
        CheckKind::FilesExist(p) => p.source_asset_path.as_ref(),
        CheckKind::FolderHasFiles(p) | CheckKind::FileContent(p) => p.source_asset_path.as_ref(),
        CheckKind::DriverInstalled(p) => p.source_asset_path.as_ref(),
        CheckKind::CertificateInstalled(p) => p.source_asset_path.as_ref(),
        _ => None,
    }
}

impl Rule for AssetPathPrefix {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "sourceAssetPath is relative to the Assets folder and must not repeat it"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn applies_to_disabled(&self) -> bool {
        true
    }

    fn check(&self, ctx: &CheckContext, _list: &ListContext) -> Vec<Finding> {
        let Some(path) = source_asset_path(&ctx.check.kind) else {
            return Vec::new();
        };
        if self.prefix.is_empty() || !path.starts_with(&self.prefix) {
            return Vec::new();
        }

        let prefix = &self.prefix;
        vec![Finding::new(
            CODE,
            NAME,
            Severity::Warning,
            ctx.location(),
            format!(
                "\"{}\": asset path \"{path}\" should NOT start with \"{prefix}\\\", it is already relative to the {prefix} folder",
                ctx.check.name
            ),
        )
        .with_suggestion(Suggestion::new(format!(
            "Remove the leading \"{prefix}\\\" from sourceAssetPath"
        )))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{check, run};
    use serde_json::json;

    fn sourced(type_name: &str, path: &str) -> blender_core::Check {
        check(json!({
            "id": "1", "name": "Copy", "type": type_name,
            "properties": { "sourceAssetPath": path }
        }))
    }

    #[test]
    fn test_prefixed_paths_warn_for_every_asset_type() {
        let checks: Vec<_> = [
            "FilesExist",
            "FolderHasFiles",
            "FileContent",
            "DriverInstalled",
            "CertificateInstalled",
        ]
        .iter()
        .map(|t| sourced(t, "Assets\\Fonts"))
        .collect();
        let findings = run(AssetPathPrefix::new(), &checks);
        assert_eq!(findings.len(), 5);
    }

    #[test]
    fn test_relative_paths_and_other_types_are_clean() {
        let checks = [
            sourced("FilesExist", "Fonts"),
            sourced("ShortcutExists", "Assets\\Icons"),
        ];
        assert!(run(AssetPathPrefix::new(), &checks).is_empty());
    }

    #[test]
    fn test_custom_prefix() {
        let checks = [sourced("FilesExist", "Payload\\Fonts"), sourced("FilesExist", "Assets\\x")];
        let findings = run(AssetPathPrefix::new().prefix("Payload"), &checks);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].check_index(), 0);
    }
}
