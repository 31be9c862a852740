//! Rule checking how a certificate is identified and imported.

use blender_core::utils::non_empty;
use blender_core::{CheckContext, CheckKind, Finding, ListContext, Rule, Severity, Suggestion};

/// Rule code for certificate-identity.
pub const CODE: &str = "CB105";

/// Rule name for certificate-identity.
pub const NAME: &str = "certificate-identity";

/// Requires a thumbprint or subject, and warns about stored PFX passwords.
#[derive(Debug, Clone, Default)]
pub struct CertificateIdentity;

impl CertificateIdentity {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for CertificateIdentity {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Certificates need a thumbprint or subject; PFX passwords are stored in plain text"
    }

    fn applies_to_disabled(&self) -> bool {
        true
    }

    fn check(&self, ctx: &CheckContext, _list: &ListContext) -> Vec<Finding> {
        let CheckKind::CertificateInstalled(cert) = &ctx.check.kind else {
            return Vec::new();
        };
        let name = &ctx.check.name;
        let mut findings = Vec::new();

        let identified = non_empty(cert.thumbprint.as_ref()).is_some()
            || non_empty(cert.subject.as_ref()).is_some();
        if !identified {
            findings.push(
                Finding::new(
                    CODE,
                    NAME,
                    Severity::Error,
                    ctx.location(),
                    format!("\"{name}\": CertificateInstalled requires either thumbprint or subject"),
                )
                .with_suggestion(Suggestion::new("Set the certificate thumbprint or subject")),
            );
        }

        if non_empty(cert.pfx_password.as_ref()).is_some() {
            findings.push(
                Finding::new(
                    CODE,
                    NAME,
                    Severity::Warning,
                    ctx.location(),
                    format!("\"{name}\": PFX password is stored in plain text in the exported configuration"),
                )
                .with_suggestion(Suggestion::new(
                    "Prefer a .cer without private key, or restrict access to the configuration",
                )),
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
    fn test_unidentified_certificate_with_password() {
        let cert = check(json!({
            "id": "1", "name": "Root CA", "type": "CertificateInstalled",
            "properties": { "storeLocation": "LocalMachine", "pfxPassword": "hunter2" }
        }));
        let severities: Vec<Severity> = run(CertificateIdentity::new(), &[cert])
            .iter()
            .map(|f| f.severity)
            .collect();
        assert_eq!(severities, vec![Severity::Error, Severity::Warning]);
    }

    #[test]
    fn test_subject_alone_identifies() {
        let cert = check(json!({
            "id": "1", "name": "Root CA", "type": "CertificateInstalled",
            "properties": { "subject": "CN=Contoso Root" }
        }));
        assert!(run(CertificateIdentity::new(), &[cert]).is_empty());
    }
}
