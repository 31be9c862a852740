//! # blender-rules
//!
//! Built-in validation rules for Configuration Blender check lists.
//!
//! ## Available Rules
//!
//! Dependency rules look for prerequisites elsewhere in the list and only
//! consider enabled checks:
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | CB001 | `printer-driver` | `PrinterInstalled` needs an earlier `DriverInstalled` for its driver |
//! | CB002 | `shortcut-icon` | Custom shortcut icons need an earlier `FilesExist` deploying them |
//! | CB003 | `assigned-access-pins` | Start pins need `ShortcutExists` checks placed before the profile |
//! | CB004 | `files-exist-source` | Multi-file `FilesExist` needs a `sourceAssetPath` |
//!
//! Structural rules examine single checks, disabled ones included:
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | CB101 | `missing-name` | Every check needs a display name |
//! | CB102 | `printer-properties` | Printers need their connection fields |
//! | CB103 | `registry-hkcu` | `HKCU:` registry paths hit SYSTEM's hive |
//! | CB104 | `asset-path-prefix` | `sourceAssetPath` must not start with `Assets` |
//! | CB105 | `certificate-identity` | Certificates need a thumbprint or subject |
//! | CB106 | `network-adapter-identity` | Adapters need a name, description or MAC |
//! | CB107 | `duplicate-id` | Ids are unique within the list |
//!
//! ## Usage
//!
//! ```ignore
//! use blender_core::Validator;
//! use blender_rules::{DuplicateId, PrinterDriver, ShortcutIcon};
//!
//! let validator = Validator::builder()
//!     .rule(PrinterDriver::new())
//!     .rule(ShortcutIcon::new())
//!     .list_rule(DuplicateId::new())
//!     .build();
//! let report = validator.validate(&checks);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod asset_path_prefix;
mod assigned_access_pins;
mod certificate_identity;
mod duplicate_id;
mod files_exist_source;
mod missing_name;
mod network_adapter_identity;
mod presets;
mod printer_driver;
mod printer_properties;
mod registry_hkcu;
mod shortcut_icon;

#[cfg(test)]
mod test_support;

pub use asset_path_prefix::AssetPathPrefix;
pub use assigned_access_pins::AssignedAccessPins;
pub use certificate_identity::CertificateIdentity;
pub use duplicate_id::DuplicateId;
pub use files_exist_source::FilesExistSource;
pub use missing_name::MissingName;
pub use network_adapter_identity::NetworkAdapterIdentity;
pub use presets::{
    all_rules, dependency_rules, structural_list_rules, structural_rules, Preset,
    UnknownPresetError,
};
pub use printer_driver::PrinterDriver;
pub use printer_properties::PrinterPropertiesRule;
pub use registry_hkcu::RegistryHkcu;
pub use shortcut_icon::ShortcutIcon;

/// Re-export core types for convenience.
pub use blender_core::{Check, Finding, ListRule, Rule, Severity};
