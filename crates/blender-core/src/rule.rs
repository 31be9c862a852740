//! Rule traits for defining validation rules.

use crate::context::{CheckContext, ListContext};
use crate::types::{Finding, Severity};

/// A rule evaluated once per check, in list order.
///
/// Rules receive the check under evaluation and a read-only view of the whole
/// list, so they can look for prerequisites elsewhere in it.
///
/// # Example
///
/// ```ignore
/// use blender_core::{CheckContext, CheckKind, Finding, ListContext, Rule, Severity};
///
/// pub struct NoEmptyRegistryPath;
///
/// impl Rule for NoEmptyRegistryPath {
///     fn name(&self) -> &'static str { "no-empty-registry-path" }
///     fn code(&self) -> &'static str { "CB900" }
///
///     fn check(&self, ctx: &CheckContext, _list: &ListContext) -> Vec<Finding> {
///         let CheckKind::RegistryValue(props) = &ctx.check.kind else {
///             return Vec::new();
///         };
///         if props.path.is_some() {
///             return Vec::new();
///         }
///         vec![Finding::new(self.code(), self.name(), Severity::Error,
///             ctx.location(), "Registry path is empty")]
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "printer-driver").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "CB001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for findings from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Whether the rule also evaluates disabled checks.
    ///
    /// Dependency rules leave disabled checks alone; field-level rules
    /// override this because disabled checks are still exported.
    fn applies_to_disabled(&self) -> bool {
        false
    }

    /// Checks a single entry and returns any findings.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The check being evaluated and its position
    /// * `list` - The whole list for this validation pass
    fn check(&self, ctx: &CheckContext, list: &ListContext) -> Vec<Finding>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;

/// A rule evaluated once over the whole list.
///
/// Useful for list-wide invariants such as unique ids, where no single
/// check owns the condition.
pub trait ListRule: Send + Sync {
    /// Returns the kebab-case name of this rule.
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "CB107").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for findings from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Checks the list and returns any findings.
    fn check_list(&self, list: &ListContext) -> Vec<Finding>;
}

/// Type alias for boxed `ListRule` trait objects.
pub type ListRuleBox = Box<dyn ListRule>;
