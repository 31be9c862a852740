//! # blender-core
//!
//! Core framework for validating Configuration Blender check lists.
//!
//! A configuration is an ordered list of typed checks (printers, drivers,
//! shortcuts, file deployments, ...) that an external remediation tool runs
//! top to bottom. This crate provides:
//!
//! - [`Check`] and [`CheckKind`], the typed check model with lenient JSON decoding
//! - [`Rule`] trait for per-check rules and [`ListRule`] for whole-list rules
//! - [`Validator`] for running rules over a snapshot of the list
//! - [`Finding`] and [`ValidationReport`] for representing results
//! - [`CheckStore`] and [`ConfigDocument`] for the application shell
//!
//! ## Example
//!
//! ```ignore
//! use blender_core::{ConfigDocument, Validator};
//!
//! let document = ConfigDocument::parse(json)?;
//! let validator = Validator::builder()
//!     .rule(MyRule::new())
//!     .build();
//!
//! let report = validator.validate(&document.checks);
//! println!("{}", report.format_report(Severity::Warning));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod check;
mod config;
mod context;
mod document;
mod rule;
mod store;
mod types;
mod validator;

/// Utility modules for rule implementations.
pub mod utils;

pub use check::{
    names, AssetCopyProperties, AssignedAccessProperties, CertificateProperties, Check,
    CheckKind, DriverProperties, FileMode, FilesExistProperties, NetworkAdapterProperties,
    PrinterProperties, RegistryValueProperties, ShortcutProperties,
};
pub use config::{Config, ConfigError, RuleConfig, ValidatorConfig};
pub use context::{CheckContext, ListContext, Prerequisite};
pub use document::{next_version, ConfigDocument, DocumentError};
pub use rule::{ListRule, ListRuleBox, Rule, RuleBox};
pub use store::{CheckStore, StoreError};
pub use types::{
    FindingDiagnostic, Finding, Label, Location, ParseSeverityError, Severity, Suggestion,
    ValidationReport,
};
pub use validator::{Validator, ValidatorBuilder};
