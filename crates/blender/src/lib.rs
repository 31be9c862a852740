//! # blender
//!
//! Dependency and ordering validator for Configuration Blender check lists.
//!
//! This is the facade crate that re-exports the check model, the validator
//! engine and the built-in rules.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use blender::{validate_dependencies, ConfigDocument, Severity};
//!
//! let doc = ConfigDocument::from_file("Config.json".as_ref())?;
//! for finding in validate_dependencies(&doc.checks) {
//!     if finding.severity == Severity::Error {
//!         eprintln!("{finding}");
//!     }
//! }
//! ```
//!
//! ## Custom Rule Sets
//!
//! ```rust,ignore
//! use blender::rules::{DuplicateId, PrinterDriver};
//! use blender::Validator;
//!
//! let validator = Validator::builder()
//!     .rule(PrinterDriver::new())
//!     .list_rule(DuplicateId::new())
//!     .build();
//! let report = validator.validate(&checks);
//! ```

#![forbid(unsafe_code)]

// Re-export core types and traits
pub use blender_core::*;

/// Built-in rules and presets.
pub mod rules {
    pub use blender_rules::*;
}

use blender_rules::Preset;

/// Runs the dependency rules over `checks`.
///
/// Findings come back in list order. Only enabled checks are evaluated or
/// count as prerequisites. The input is never modified, and the same list
/// always yields the same findings.
#[must_use]
pub fn validate_dependencies(checks: &[Check]) -> Vec<Finding> {
    preset_validator(Preset::Dependencies).validate(checks).findings
}

/// Runs every built-in rule, dependency and structural, over `checks`.
///
/// Errors in the returned report block export; see
/// [`ValidationReport::partition`].
#[must_use]
pub fn validate_configuration(checks: &[Check]) -> ValidationReport {
    preset_validator(Preset::Full).validate(checks)
}

fn preset_validator(preset: Preset) -> Validator {
    Validator::builder()
        .rules(preset.rules())
        .list_rules(preset.list_rules())
        .build()
}
