//! Rule flagging multi-file `FilesExist` checks without a source folder.
//!
//! In `MultipleFiles` mode the remediation copies `files` from
//! `sourceAssetPath`. Without one nothing is copied and the check can only
//! ever report the files as missing.

use blender_core::utils::non_empty;
use blender_core::{
    CheckContext, CheckKind, FileMode, Finding, ListContext, Rule, Severity, Suggestion,
};

/// Rule code for files-exist-source.
pub const CODE: &str = "CB004";

/// Rule name for files-exist-source.
pub const NAME: &str = "files-exist-source";

/// Warns when a multi-file `FilesExist` check has no `sourceAssetPath`.
#[derive(Debug, Clone, Default)]
pub struct FilesExistSource;

impl FilesExistSource {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for FilesExistSource {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Multi-file FilesExist checks need a sourceAssetPath to copy from"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, ctx: &CheckContext, _list: &ListContext) -> Vec<Finding> {
        let CheckKind::FilesExist(files) = &ctx.check.kind else {
            return Vec::new();
        };
        if files.mode() == FileMode::SingleFile
            || non_empty(files.source_asset_path.as_ref()).is_some()
        {
            return Vec::new();
        }

        vec![Finding::new(
            CODE,
            NAME,
            Severity::Warning,
            ctx.location(),
            format!(
                "\"{}\" has no sourceAssetPath, so no files will be copied",
                ctx.check.name
            ),
        )
        .with_suggestion(Suggestion::new(
            "Set sourceAssetPath to the asset folder holding the files",
        ))]
    }
}
