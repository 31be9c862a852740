//! Core validator for orchestrating rule execution.

use crate::check::Check;
use crate::config::Config;
use crate::context::{CheckContext, ListContext};
use crate::rule::{ListRule, ListRuleBox, Rule, RuleBox};
use crate::types::{Finding, ValidationReport};

use tracing::{debug, info};

/// Builder for configuring a [`Validator`].
#[derive(Default)]
pub struct ValidatorBuilder {
    rules: Vec<RuleBox>,
    list_rules: Vec<ListRuleBox>,
    config: Option<Config>,
    include_disabled: Option<bool>,
}

impl ValidatorBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a per-check rule.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed per-check rule.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds multiple boxed per-check rules.
    #[must_use]
    pub fn rules<I>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = RuleBox>,
    {
        self.rules.extend(rules);
        self
    }

    /// Adds a whole-list rule.
    #[must_use]
    pub fn list_rule<R: ListRule + 'static>(mut self, rule: R) -> Self {
        self.list_rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed whole-list rule.
    #[must_use]
    pub fn list_rule_box(mut self, rule: ListRuleBox) -> Self {
        self.list_rules.push(rule);
        self
    }

    /// Adds multiple boxed whole-list rules.
    #[must_use]
    pub fn list_rules<I>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = ListRuleBox>,
    {
        self.list_rules.extend(rules);
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Overrides whether disabled checks take part in evaluation.
    #[must_use]
    pub fn include_disabled(mut self, include: bool) -> Self {
        self.include_disabled = Some(include);
        self
    }

    /// Builds the validator.
    #[must_use]
    pub fn build(self) -> Validator {
        let config = self.config.unwrap_or_default();
        let include_disabled = self
            .include_disabled
            .unwrap_or(config.validator.include_disabled);

        Validator {
            rules: self.rules,
            list_rules: self.list_rules,
            config,
            include_disabled,
        }
    }
}

/// Runs registered rules over a snapshot of the check list.
///
/// The validator holds no per-pass state: every call to
/// [`Validator::validate`] recomputes all findings from the given slice, so
/// it can be re-run after every edit, delete, reorder or toggle.
///
/// Use [`Validator::builder()`] to construct an instance.
pub struct Validator {
    rules: Vec<RuleBox>,
    list_rules: Vec<ListRuleBox>,
    config: Config,
    include_disabled: bool,
}

impl Validator {
    /// Creates a new builder for configuring a validator.
    #[must_use]
    pub fn builder() -> ValidatorBuilder {
        ValidatorBuilder::new()
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len() + self.list_rules.len()
    }

    /// Validates the list and returns every finding.
    ///
    /// Per-check rules run for each check in ascending list order, in
    /// registration order within a check. Whole-list rules run afterwards and
    /// their findings are merged by check index; the merge is stable, so
    /// findings for the same check keep the order in which rules fired.
    #[must_use]
    pub fn validate(&self, checks: &[Check]) -> ValidationReport {
        info!("Validating {} check(s)", checks.len());

        let list = ListContext::new(checks, self.include_disabled);
        let rules: Vec<&RuleBox> = self
            .rules
            .iter()
            .filter(|rule| self.is_enabled(rule.name()))
            .collect();

        let mut findings = Vec::new();
        for (index, check) in checks.iter().enumerate() {
            let ctx = CheckContext::new(index, check);
            let active = list.is_active(check);

            for rule in &rules {
                if !active && !rule.applies_to_disabled() {
                    continue;
                }
                let rule_findings = rule.check(&ctx, &list);
                findings.extend(self.apply_severity_override(rule.name(), rule_findings));
            }
        }

        for rule in &self.list_rules {
            if !self.is_enabled(rule.name()) {
                continue;
            }
            let rule_findings = rule.check_list(&list);
            findings.extend(self.apply_severity_override(rule.name(), rule_findings));
        }

        findings.sort_by_key(|f| f.location.check_index);

        info!("Validation complete: {} finding(s)", findings.len());

        ValidationReport {
            findings,
            checks_evaluated: checks.len(),
        }
    }

    fn is_enabled(&self, rule_name: &str) -> bool {
        let enabled = self.config.is_rule_enabled(rule_name);
        if !enabled {
            debug!("Skipping disabled rule: {}", rule_name);
        }
        enabled
    }

    /// Applies severity overrides from configuration.
    fn apply_severity_override(&self, rule_name: &str, mut findings: Vec<Finding>) -> Vec<Finding> {
        if let Some(severity) = self.config.rule_severity(rule_name) {
            for f in &mut findings {
                f.severity = severity;
            }
        }
        findings
    }
}
