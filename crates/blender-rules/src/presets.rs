//! Rule presets for common configurations.

use crate::{
    AssetPathPrefix, AssignedAccessPins, CertificateIdentity, DuplicateId, FilesExistSource,
    MissingName, NetworkAdapterIdentity, PrinterDriver, PrinterPropertiesRule, RegistryHkcu,
    ShortcutIcon,
};
use blender_core::{Config, ListRuleBox, RuleBox};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Preset configurations for the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    /// Dependency and structural rules.
    #[default]
    Full,
    /// Only the ordering/prerequisite rules (CB001-CB004).
    Dependencies,
    /// Only the field-level rules (CB101-CB107).
    Structural,
}

impl Preset {
    /// Returns the per-check rules for this preset.
    #[must_use]
    pub fn rules(self) -> Vec<RuleBox> {
        self.configured_rules(&Config::default())
    }

    /// Returns the per-check rules for this preset, applying rule options
    /// from `config`.
    #[must_use]
    pub fn configured_rules(self, config: &Config) -> Vec<RuleBox> {
        match self {
            Self::Full => {
                let mut rules = dependency_rules();
                rules.extend(configured_structural_rules(config));
                rules
            }
            Self::Dependencies => dependency_rules(),
            Self::Structural => configured_structural_rules(config),
        }
    }

    /// Returns the whole-list rules for this preset.
    #[must_use]
    pub fn list_rules(self) -> Vec<ListRuleBox> {
        match self {
            Self::Full | Self::Structural => structural_list_rules(),
            Self::Dependencies => Vec::new(),
        }
    }

    /// Preset name as used in configuration and on the command line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Dependencies => "dependencies",
            Self::Structural => "structural",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unknown preset name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown preset \"{0}\" (expected full, dependencies or structural)")]
pub struct UnknownPresetError(String);

impl FromStr for Preset {
    type Err = UnknownPresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "full" | "all" => Ok(Self::Full),
            "dependencies" | "deps" => Ok(Self::Dependencies),
            "structural" => Ok(Self::Structural),
            _ => Err(UnknownPresetError(s.to_string())),
        }
    }
}

/// Returns the dependency rules, in evaluation order.
///
/// - `printer-driver` (CB001)
/// - `shortcut-icon` (CB002)
/// - `assigned-access-pins` (CB003)
/// - `files-exist-source` (CB004)
#[must_use]
pub fn dependency_rules() -> Vec<RuleBox> {
    vec![
        Box::new(PrinterDriver::new()),
        Box::new(ShortcutIcon::new()),
        Box::new(AssignedAccessPins::new()),
        Box::new(FilesExistSource::new()),
    ]
}

/// Returns the per-check structural rules (CB101-CB106).
#[must_use]
pub fn structural_rules() -> Vec<RuleBox> {
    configured_structural_rules(&Config::default())
}

fn configured_structural_rules(config: &Config) -> Vec<RuleBox> {
    let mut asset_path_prefix = AssetPathPrefix::new();
    if let Some(prefix) = config.rule_option::<String>(crate::asset_path_prefix::NAME, "prefix") {
        debug!("asset-path-prefix: flagging prefix {:?}", prefix);
        asset_path_prefix = asset_path_prefix.prefix(prefix);
    }

    vec![
        Box::new(MissingName::new()),
        Box::new(PrinterPropertiesRule::new()),
        Box::new(RegistryHkcu::new()),
        Box::new(asset_path_prefix),
        Box::new(CertificateIdentity::new()),
        Box::new(NetworkAdapterIdentity::new()),
    ]
}

/// Returns the whole-list structural rules (CB107).
#[must_use]
pub fn structural_list_rules() -> Vec<ListRuleBox> {
    vec![Box::new(DuplicateId::new())]
}

/// Returns all available per-check rules.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    Preset::Full.rules()
}
