//! Rule checking network adapter selection and static addressing.

use blender_core::utils::non_empty;
use blender_core::{CheckContext, CheckKind, Finding, ListContext, Rule, Severity, Suggestion};

/// Rule code for network-adapter-identity.
pub const CODE: &str = "CB106";

/// Rule name for network-adapter-identity.
pub const NAME: &str = "network-adapter-identity";

/// Requires a way to select the adapter and a prefix length for static IPs.
#[derive(Debug, Clone, Default)]
pub struct NetworkAdapterIdentity;

impl NetworkAdapterIdentity {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for NetworkAdapterIdentity {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Network adapters need adapterName, adapterDescription or macAddress"
    }

    fn applies_to_disabled(&self) -> bool {
        true
    }

    fn check(&self, ctx: &CheckContext, _list: &ListContext) -> Vec<Finding> {
        let CheckKind::NetworkAdapterConfiguration(adapter) = &ctx.check.kind else {
            return Vec::new();
        };
        let name = &ctx.check.name;
        let mut findings = Vec::new();

        let identified = [
            &adapter.adapter_name,
            &adapter.adapter_description,
            &adapter.mac_address,
        ]
        .into_iter()
        .any(|value| non_empty(value.as_ref()).is_some());
        if !identified {
            findings.push(
                Finding::new(
                    CODE,
                    NAME,
                    Severity::Error,
                    ctx.location(),
                    format!(
                        "\"{name}\": NetworkAdapterConfiguration requires adapterName, adapterDescription or macAddress"
                    ),
                )
                .with_suggestion(Suggestion::new("Identify the adapter to configure")),
            );
        }

        // A prefix length of 0 is what an untouched form field exports.
        let has_prefix = adapter.subnet_prefix_length.is_some_and(|len| len > 0);
        if non_empty(adapter.static_ip_address.as_ref()).is_some() && !has_prefix {
            findings.push(
                Finding::new(
                    CODE,
                    NAME,
                    Severity::Warning,
                    ctx.location(),
                    format!(
                        "\"{name}\": static IP configured without subnet prefix length (will default to /24)"
                    ),
                )
                .with_suggestion(Suggestion::new("Set subnetPrefixLength")),
            );
        }

        findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{check, run};
    use serde_json::json;

    #[test]
    fn test_unidentified_adapter_is_error() {
        let adapter = check(json!({
            "id": "1", "name": "LAN", "type": "NetworkAdapterConfiguration",
            "properties": { "dnsServers": ["10.0.0.1"] }
        }));
        let findings = run(NetworkAdapterIdentity::new(), &[adapter]);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Error);
    }

    #[test]
    fn test_static_ip_without_prefix_warns() {
        let adapter = check(json!({
            "id": "1", "name": "LAN", "type": "NetworkAdapterConfiguration",
            "properties": { "macAddress": "00-11-22-33-44-55", "staticIPAddress": "10.0.0.20" }
        }));
        let findings = run(NetworkAdapterIdentity::new(), &[adapter]);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Warning);
        assert!(findings[0].message.contains("/24"));
    }

    #[test]
    fn test_complete_static_configuration_is_clean() {
        let adapter = check(json!({
            "id": "1", "name": "LAN", "type": "NetworkAdapterConfiguration",
            "properties": {
                "adapterName": "Ethernet", "staticIPAddress": "10.0.0.20", "subnetPrefixLength": 16
            }
        }));
        assert!(run(NetworkAdapterIdentity::new(), &[adapter]).is_empty());
    }
}
