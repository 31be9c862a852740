//! Check command implementation.

use anyhow::{Context, Result};
use blender_core::{Config, ConfigDocument, ListRuleBox, RuleBox, Validator};
use blender_rules::Preset;
use std::path::Path;

use crate::config_resolver::{self, ConfigSource, RoleLayout};
use crate::OutputFormat;

/// Runs the check command.
pub fn run(
    file: &Path,
    format: OutputFormat,
    preset: Option<&str>,
    rules_filter: Option<&str>,
    explicit_config: Option<&Path>,
) -> Result<()> {
    let document = ConfigDocument::from_file(file)
        .with_context(|| format!("Failed to load configuration document: {}", file.display()))?;

    let layout = RoleLayout::of(file, &document.role);
    warn_on_role_mismatch(&layout, &document.role);
    let user_dir = config_resolver::user_config_dir();
    let source = config_resolver::resolve(&layout, explicit_config, user_dir.as_deref());

    let config = load_config(&source)?;
    let fail_on = config
        .fail_on_severity()
        .context("Invalid fail_on in config")?;

    let preset = match preset.or(config.preset.as_deref()) {
        Some(name) => name.parse::<Preset>()?,
        None => Preset::default(),
    };

    let (rules, list_rules) = match rules_filter {
        Some(filter) => {
            let names: Vec<&str> = filter.split(',').map(str::trim).collect();
            filter_rules(&names, &config)
        }
        None => (preset.configured_rules(&config), preset.list_rules()),
    };

    let validator = Validator::builder()
        .rules(rules)
        .list_rules(list_rules)
        .config(config)
        .build();

    tracing::info!(
        "Validating {} ({} checks) with {} rules",
        file.display(),
        document.checks.len(),
        validator.rule_count()
    );

    let report = validator.validate(&document.checks);

    super::output::print(&report, format)?;

    if report.has_findings_at(fail_on) {
        std::process::exit(1);
    }

    Ok(())
}

fn load_config(source: &ConfigSource) -> Result<Config> {
    let Some(path) = source.path() else {
        return Ok(Config::default());
    };
    tracing::info!("Using {} config: {}", source.label(), path.display());
    Config::from_file(path).with_context(|| format!("Failed to load config: {}", path.display()))
}

/// The remediation tool looks the document up as `Configurations\<role>\`.
fn warn_on_role_mismatch(layout: &RoleLayout, role: &str) {
    if layout.configurations_dir.is_some() && !role.trim().is_empty() && !layout.named_after_role {
        tracing::warn!(
            "Document role \"{}\" does not match its folder {}",
            role,
            layout.role_dir.display()
        );
    }
}

/// Selects rules by name or code from the full rule set.
fn filter_rules(names: &[&str], config: &Config) -> (Vec<RuleBox>, Vec<ListRuleBox>) {
    let wanted = |name: &str, code: &str| names.iter().any(|n| *n == name || *n == code);

    let rules: Vec<RuleBox> = Preset::Full
        .configured_rules(config)
        .into_iter()
        .filter(|r| wanted(r.name(), r.code()))
        .collect();
    let list_rules: Vec<ListRuleBox> = Preset::Full
        .list_rules()
        .into_iter()
        .filter(|r| wanted(r.name(), r.code()))
        .collect();

    for name in names {
        let known = rules.iter().any(|r| r.name() == *name || r.code() == *name)
            || list_rules
                .iter()
                .any(|r| r.name() == *name || r.code() == *name);
        if !known {
            tracing::warn!("Unknown rule: {}", name);
        }
    }

    (rules, list_rules)
}
