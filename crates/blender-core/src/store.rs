//! Check store owned by the application shell.
//!
//! The builder UI mutates the list through add / edit / delete / reorder /
//! duplicate / toggle actions and re-validates after each one. The store owns
//! the list; the validator only ever sees `&[Check]` snapshots of it.

use crate::check::{Check, CheckKind};
use crate::types::ValidationReport;
use crate::utils::leading_integer;
use crate::validator::Validator;
use tracing::debug;

/// Errors from store mutations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The index does not refer to a check.
    #[error("check index {index} is out of range (list has {len} check(s))")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Current list length.
        len: usize,
    },
}

/// Owns the mutable check list.
#[derive(Debug, Clone, Default)]
pub struct CheckStore {
    checks: Vec<Check>,
    unsaved: bool,
}

impl CheckStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding an imported list.
    #[must_use]
    pub fn from_checks(checks: Vec<Check>) -> Self {
        Self {
            checks,
            unsaved: false,
        }
    }

    /// Read-only snapshot of the list.
    #[must_use]
    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    /// Number of checks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Whether the list changed since the last [`CheckStore::mark_saved`].
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved
    }

    /// Marks the current list as saved.
    pub fn mark_saved(&mut self) {
        self.unsaved = false;
    }

    /// Next id: the largest numeric id plus one.
    ///
    /// An id counts by its leading digits (`"12abc"` is 12); ids without any
    /// count as 0. The result saturates at `u64::MAX`.
    #[must_use]
    pub fn next_id(&self) -> String {
        let max = self
            .checks
            .iter()
            .map(|c| leading_integer(&c.id))
            .max()
            .unwrap_or(0);
        max.saturating_add(1).to_string()
    }

    /// Appends a new check with a fresh id and returns its index.
    pub fn add(&mut self, name: impl Into<String>, enabled: bool, kind: CheckKind) -> usize {
        let check = Check::new(self.next_id(), name, kind).with_enabled(enabled);
        debug!("Adding check {} ({:?})", check.id, check.type_name());
        self.checks.push(check);
        self.unsaved = true;
        self.checks.len() - 1
    }

    /// Replaces the check at `index`, keeping its id.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range.
    pub fn update(
        &mut self,
        index: usize,
        name: impl Into<String>,
        enabled: bool,
        kind: CheckKind,
    ) -> Result<(), StoreError> {
        self.ensure_index(index)?;
        let id = self.checks[index].id.clone();
        self.checks[index] = Check::new(id, name, kind).with_enabled(enabled);
        self.unsaved = true;
        Ok(())
    }

    /// Removes and returns the check at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range.
    pub fn remove(&mut self, index: usize) -> Result<Check, StoreError> {
        self.ensure_index(index)?;
        self.unsaved = true;
        Ok(self.checks.remove(index))
    }

    /// Moves the check at `from` so that it ends up at `to`.
    ///
    /// # Errors
    ///
    /// Returns an error if either index is out of range.
    pub fn move_check(&mut self, from: usize, to: usize) -> Result<(), StoreError> {
        self.ensure_index(from)?;
        self.ensure_index(to)?;
        if from != to {
            let check = self.checks.remove(from);
            self.checks.insert(to, check);
            self.unsaved = true;
        }
        Ok(())
    }

    /// Appends a copy of the check at `index` to the end of the list, with a
    /// fresh id and ` (Copy)` appended to the name. Returns the index of the
    /// copy.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range.
    pub fn duplicate(&mut self, index: usize) -> Result<usize, StoreError> {
        self.ensure_index(index)?;
        let mut copy = self.checks[index].clone();
        copy.id = self.next_id();
        copy.name = format!("{} (Copy)", copy.name);
        debug!("Duplicating check {} as {}", self.checks[index].id, copy.id);
        self.checks.push(copy);
        self.unsaved = true;
        Ok(self.checks.len() - 1)
    }

    /// Flips the enabled flag and returns the new value.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range.
    pub fn toggle_enabled(&mut self, index: usize) -> Result<bool, StoreError> {
        self.ensure_index(index)?;
        let check = &mut self.checks[index];
        check.enabled = !check.enabled;
        self.unsaved = true;
        Ok(check.enabled)
    }

    /// Checks whose name, type or id contains `text`, case-insensitively,
    /// paired with their list index. An empty filter matches everything.
    #[must_use]
    pub fn filter(&self, text: &str) -> Vec<(usize, &Check)> {
        let needle = text.to_lowercase();
        self.checks
            .iter()
            .enumerate()
            .filter(|(_, c)| {
                needle.is_empty()
                    || c.name.to_lowercase().contains(&needle)
                    || c.type_name()
                        .is_some_and(|t| t.to_lowercase().contains(&needle))
                    || c.id.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Runs a full validation pass over the current list.
    #[must_use]
    pub fn validate(&self, validator: &Validator) -> ValidationReport {
        validator.validate(&self.checks)
    }

    fn ensure_index(&self, index: usize) -> Result<(), StoreError> {
        if index < self.checks.len() {
            Ok(())
        } else {
            Err(StoreError::IndexOutOfRange {
                index,
                len: self.checks.len(),
            })
        }
    }
}
