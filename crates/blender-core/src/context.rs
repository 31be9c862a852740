//! Context types for rule execution.

use crate::check::Check;
use crate::types::Location;
use std::collections::HashMap;

/// Context provided to per-check rules.
#[derive(Debug, Clone, Copy)]
pub struct CheckContext<'a> {
    /// Zero-based position of the check in the list.
    pub index: usize,
    /// The check being evaluated.
    pub check: &'a Check,
}

impl<'a> CheckContext<'a> {
    /// Creates a new check context.
    #[must_use]
    pub fn new(index: usize, check: &'a Check) -> Self {
        Self { index, check }
    }

    /// Location of the check, for attaching to findings.
    #[must_use]
    pub fn location(&self) -> Location {
        Location::new(self.index, self.check.name.clone())
    }
}

/// Where a prerequisite sits relative to the check that needs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prerequisite {
    /// No active check satisfies the dependency.
    Missing,
    /// A satisfying check exists, but only at or after the dependent's index.
    Misordered {
        /// Index of the first satisfying check.
        index: usize,
    },
    /// A satisfying check exists strictly before the dependent.
    Satisfied {
        /// Index of the first satisfying check.
        index: usize,
    },
}

/// Read-only view of the whole list for one validation pass.
///
/// Builds a `type -> ascending indices` index of the active checks once, so
/// rules that look for prerequisites only scan checks of the relevant type.
/// Disabled checks are not active unless the pass includes them.
#[derive(Debug, Clone)]
pub struct ListContext<'a> {
    checks: &'a [Check],
    include_disabled: bool,
    by_type: HashMap<&'a str, Vec<usize>>,
}

impl<'a> ListContext<'a> {
    /// Creates a new list context.
    #[must_use]
    pub fn new(checks: &'a [Check], include_disabled: bool) -> Self {
        let mut by_type: HashMap<&'a str, Vec<usize>> = HashMap::new();
        for (index, check) in checks.iter().enumerate() {
            if !(include_disabled || check.enabled) {
                continue;
            }
            if let Some(type_name) = check.type_name() {
                by_type.entry(type_name).or_default().push(index);
            }
        }

        Self {
            checks,
            include_disabled,
            by_type,
        }
    }

    /// The full list, including inactive checks.
    #[must_use]
    pub fn checks(&self) -> &'a [Check] {
        self.checks
    }

    /// Whether a check takes part in dependency evaluation.
    #[must_use]
    pub fn is_active(&self, check: &Check) -> bool {
        self.include_disabled || check.enabled
    }

    /// Active checks of the given type, in list order.
    pub fn of_type(&self, type_name: &str) -> impl Iterator<Item = (usize, &'a Check)> + '_ {
        let checks = self.checks;
        self.by_type
            .get(type_name)
            .into_iter()
            .flatten()
            .map(move |&index| (index, &checks[index]))
    }

    /// Looks for an active check of `type_name` matching `satisfies`, relative
    /// to the dependent check at `dependent_index`.
    pub fn locate<F>(&self, type_name: &str, dependent_index: usize, satisfies: F) -> Prerequisite
    where
        F: Fn(&Check) -> bool,
    {
        match self.of_type(type_name).find(|&(_, check)| satisfies(check)) {
            None => Prerequisite::Missing,
            Some((index, _)) if index < dependent_index => Prerequisite::Satisfied { index },
            Some((index, _)) => Prerequisite::Misordered { index },
        }
    }

    /// First active check of `type_name` positioned after `index`.
    #[must_use]
    pub fn first_after(&self, type_name: &str, index: usize) -> Option<usize> {
        self.of_type(type_name)
            .map(|(i, _)| i)
            .find(|&i| i > index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::{CheckKind, DriverProperties};

    fn driver(id: &str, name: &str) -> Check {
        Check::new(
            id,
            format!("Driver {name}"),
            CheckKind::DriverInstalled(DriverProperties {
                driver_name: Some(name.to_string()),
                ..DriverProperties::default()
            }),
        )
    }

    fn other(id: &str) -> Check {
        Check::new(
            id,
            "Service",
            CheckKind::Other {
                type_name: "ServiceRunning".to_string(),
                properties: serde_json::Value::Null,
            },
        )
    }

    fn driver_named(name: &'static str) -> impl Fn(&Check) -> bool {
        move |check: &Check| match &check.kind {
            CheckKind::DriverInstalled(p) => p.driver_name.as_deref() == Some(name),
            _ => false,
        }
    }

    #[test]
    fn indexes_active_checks_by_type() {
        let checks = vec![driver("1", "A"), other("2"), driver("3", "B")];
        let ctx = ListContext::new(&checks, false);
        let indices: Vec<usize> = ctx.of_type("DriverInstalled").map(|(i, _)| i).collect();
        assert_eq!(indices, vec![0, 2]);
        assert_eq!(ctx.of_type("PrinterInstalled").count(), 0);
    }

    #[test]
    fn disabled_checks_are_not_indexed() {
        let checks = vec![driver("1", "A").with_enabled(false)];
        let ctx = ListContext::new(&checks, false);
        assert_eq!(ctx.of_type("DriverInstalled").count(), 0);
        assert!(!ctx.is_active(&checks[0]));

        let ctx = ListContext::new(&checks, true);
        assert_eq!(ctx.of_type("DriverInstalled").count(), 1);
        assert!(ctx.is_active(&checks[0]));
    }

    #[test]
    fn locate_distinguishes_before_after_and_missing() {
        let checks = vec![other("1"), driver("2", "A"), other("3")];
        let ctx = ListContext::new(&checks, false);

        assert_eq!(
            ctx.locate("DriverInstalled", 2, driver_named("A")),
            Prerequisite::Satisfied { index: 1 }
        );
        assert_eq!(
            ctx.locate("DriverInstalled", 0, driver_named("A")),
            Prerequisite::Misordered { index: 1 }
        );
        // Same index is not "before".
        assert_eq!(
            ctx.locate("DriverInstalled", 1, driver_named("A")),
            Prerequisite::Misordered { index: 1 }
        );
        assert_eq!(
            ctx.locate("DriverInstalled", 2, driver_named("B")),
            Prerequisite::Missing
        );
    }

    #[test]
    fn first_after_skips_earlier_checks() {
        let checks = vec![driver("1", "A"), other("2"), driver("3", "B")];
        let ctx = ListContext::new(&checks, false);
        assert_eq!(ctx.first_after("DriverInstalled", 0), Some(2));
        assert_eq!(ctx.first_after("DriverInstalled", 2), None);
    }
}
