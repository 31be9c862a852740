//! Helpers shared by rule tests.

use blender_core::{Check, Finding, ListRule, Rule, Validator};

/// Decodes a check from its JSON record.
pub fn check(value: serde_json::Value) -> Check {
    serde_json::from_value(value).expect("test check should decode")
}

/// Runs a single per-check rule over `checks`.
pub fn run<R: Rule + 'static>(rule: R, checks: &[Check]) -> Vec<Finding> {
    Validator::builder().rule(rule).build().validate(checks).findings
}

/// Runs a single whole-list rule over `checks`.
pub fn run_list<R: ListRule + 'static>(rule: R, checks: &[Check]) -> Vec<Finding> {
    Validator::builder()
        .list_rule(rule)
        .build()
        .validate(checks)
        .findings
}
