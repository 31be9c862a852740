//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

use crate::config_resolver::CONFIG_FILE_NAME;

const DEFAULT_CONFIG: &str = r#"# Configuration Blender validator configuration
# Place next to Config.json (Configurations\<role>\blender.toml), in
# Configurations\blender.toml for every role, or in ~/.config-blender/config.toml

# Rule preset: "full" (default), "dependencies" or "structural"
preset = "full"

# Lowest severity that makes `blender check` exit non-zero
fail_on = "error"

[validator]
# Evaluate disabled checks as if they were enabled
include_disabled = false

# Rule configurations
# Each rule can be enabled/disabled and have its severity overridden

[rules.printer-driver]
enabled = true
# severity = "warning"  # Override default severity

[rules.files-exist-source]
enabled = true

# [rules.asset-path-prefix]
# prefix = "Assets"
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    write_config(Path::new(CONFIG_FILE_NAME), force)?;

    println!("Created {CONFIG_FILE_NAME}");
    println!("\nNext steps:");
    println!("  1. Edit {CONFIG_FILE_NAME} to configure rules");
    println!("  2. Run: blender check Config.json");

    Ok(())
}

fn write_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use blender_core::Config;

    #[test]
    fn default_config_parses() {
        let config = Config::parse(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.preset.as_deref(), Some("full"));
        assert!(config.is_rule_enabled("printer-driver"));
        assert!(!config.validator.include_disabled);
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("blender.toml");
        std::fs::write(&path, "# mine").unwrap();

        assert!(write_config(&path, false).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine");

        write_config(&path, true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
    }
}
