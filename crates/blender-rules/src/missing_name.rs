//! Rule requiring every check to have a display name.

use blender_core::{CheckContext, Finding, ListContext, Rule, Severity, Suggestion};

/// Rule code for missing-name.
pub const CODE: &str = "CB101";

/// Rule name for missing-name.
pub const NAME: &str = "missing-name";

/// Flags checks whose display name is empty or blank.
#[derive(Debug, Clone, Default)]
pub struct MissingName;

impl MissingName {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for MissingName {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Every check needs a display name"
    }

    fn applies_to_disabled(&self) -> bool {
        true
    }

    fn check(&self, ctx: &CheckContext, _list: &ListContext) -> Vec<Finding> {
        if !ctx.check.name.trim().is_empty() {
            return Vec::new();
        }

        let location = ctx.location();
        let message = format!("Check #{}: Missing display name", location.position());
        vec![Finding::new(CODE, NAME, Severity::Error, location, message)
            .with_suggestion(Suggestion::new("Give the check a descriptive name"))]
    }
}
