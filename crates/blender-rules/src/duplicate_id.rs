//! Whole-list rule requiring unique check ids.
//!
//! The builder addresses checks by id when editing and reordering, and the
//! remediation tool reports results per id. Every check after the first one
//! with a given id is reported, labelled with the first occurrence.

use blender_core::{Finding, Label, ListContext, ListRule, Location, Severity, Suggestion};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Rule code for duplicate-id.
pub const CODE: &str = "CB107";

/// Rule name for duplicate-id.
pub const NAME: &str = "duplicate-id";

/// Flags checks that reuse an earlier check's id.
#[derive(Debug, Clone, Default)]
pub struct DuplicateId;

impl DuplicateId {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ListRule for DuplicateId {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Check ids must be unique within the list"
    }

    fn check_list(&self, list: &ListContext) -> Vec<Finding> {
        let mut first_seen: HashMap<&str, usize> = HashMap::new();
        let mut findings = Vec::new();

        for (index, check) in list.checks().iter().enumerate() {
            let first = match first_seen.entry(check.id.as_str()) {
                Entry::Vacant(slot) => {
                    slot.insert(index);
                    continue;
                }
                Entry::Occupied(slot) => *slot.get(),
            };
            findings.push(
                Finding::new(
                    CODE,
                    NAME,
                    Severity::Error,
                    Location::new(index, check.name.clone()),
                    format!("\"{}\" reuses id \"{}\"", check.name, check.id),
                )
                .with_label(Label::new(first, "id first used here"))
                .with_suggestion(Suggestion::new("Give the check a fresh id")),
            );
        }

        findings
    }
}
