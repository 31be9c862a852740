//! The exported configuration document.

use crate::check::Check;
use crate::utils::leading_integer;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A complete configuration as imported and exported by the builder.
///
/// Serialized with camelCase keys:
///
/// ```json
/// { "version": "1.0.0", "role": "Kiosk", "description": "", "author": "",
///   "lastModified": "2026-01-01", "checks": [] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDocument {
    /// Configuration version.
    #[serde(default = "default_version")]
    pub version: String,
    /// Device role the configuration targets.
    #[serde(default)]
    pub role: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Author.
    #[serde(default)]
    pub author: String,
    /// Date of the last edit, `YYYY-MM-DD`.
    #[serde(default)]
    pub last_modified: String,
    /// The ordered check list.
    #[serde(default)]
    pub checks: Vec<Check>,
}

fn default_version() -> String {
    "1.0.0".to_string()
}

impl Default for ConfigDocument {
    fn default() -> Self {
        Self {
            version: default_version(),
            role: String::new(),
            description: String::new(),
            author: String::new(),
            last_modified: String::new(),
            checks: Vec::new(),
        }
    }
}

impl ConfigDocument {
    /// Loads a document from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a configuration document.
    pub fn from_file(path: &Path) -> Result<Self, DocumentError> {
        let content = std::fs::read_to_string(path).map_err(|e| DocumentError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses a document from a JSON string.
    ///
    /// Individual checks decode leniently; only a malformed document shape
    /// (invalid JSON, `checks` not an array of objects) is an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid.
    pub fn parse(content: &str) -> Result<Self, DocumentError> {
        serde_json::from_str(content).map_err(|e| DocumentError::Parse {
            message: e.to_string(),
        })
    }

    /// Starts a new revision of an imported document: bumps the patch
    /// version (see [`next_version`]) and stamps `today` (`YYYY-MM-DD`) as
    /// the last modification date. Returns the new version.
    pub fn begin_revision(&mut self, today: impl Into<String>) -> &str {
        self.version = next_version(&self.version);
        self.last_modified = today.into();
        &self.version
    }

    /// Renders the document as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, DocumentError> {
        serde_json::to_string_pretty(self).map_err(|e| DocumentError::Parse {
            message: e.to_string(),
        })
    }
}

/// The version following `version`.
///
/// `major.minor.patch` gets its patch incremented (a non-numeric patch counts
/// as 0), an empty version becomes `1.0.1`, and any other shape gets `.1`
/// appended.
#[must_use]
pub fn next_version(version: &str) -> String {
    if version.is_empty() {
        return "1.0.1".to_string();
    }
    let parts: Vec<&str> = version.split('.').collect();
    match parts.as_slice() {
        [major, minor, patch] => {
            let patch = leading_integer(patch).saturating_add(1);
            format!("{major}.{minor}.{patch}")
        }
        _ => format!("{version}.1"),
    }
}

/// Document errors.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// IO error reading the document.
    #[error("Failed to read configuration {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The document is not valid configuration JSON.
    #[error("Failed to parse configuration: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::CheckKind;

    #[test]
    fn parses_minimal_document() {
        let doc = ConfigDocument::parse(r#"{ "checks": [] }"#).unwrap();
        assert_eq!(doc.version, "1.0.0");
        assert!(doc.checks.is_empty());
    }

    #[test]
    fn parses_full_document() {
        let doc = ConfigDocument::parse(
            r#"{
                "version": "2.1.0",
                "role": "Kiosk",
                "description": "Lobby kiosk",
                "author": "ops",
                "lastModified": "2026-03-01",
                "checks": [
                    { "id": "1", "name": "HP driver", "type": "DriverInstalled",
                      "enabled": true, "properties": { "driverName": "HP" } },
                    { "id": "2", "name": "Broken", "type": null }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(doc.role, "Kiosk");
        assert_eq!(doc.last_modified, "2026-03-01");
        assert_eq!(doc.checks.len(), 2);
        assert!(matches!(doc.checks[0].kind, CheckKind::DriverInstalled(_)));
        assert!(matches!(doc.checks[1].kind, CheckKind::Untyped { .. }));
    }

    #[test]
    fn rejects_invalid_json() {
        let err = ConfigDocument::parse("{ not json").unwrap_err();
        assert!(matches!(err, DocumentError::Parse { .. }));
    }

    #[test]
    fn round_trips_through_json() {
        let doc = ConfigDocument::parse(
            r#"{ "role": "Front desk", "checks": [
                { "id": "1", "name": "Printer", "type": "PrinterInstalled",
                  "enabled": false, "properties": { "driverName": "HP", "portType": "LPR" } }
            ] }"#,
        )
        .unwrap();

        let rendered = doc.to_json_pretty().unwrap();
        assert!(rendered.contains("\"lastModified\""));
        assert_eq!(ConfigDocument::parse(&rendered).unwrap(), doc);
    }

    #[test]
    fn next_version_bumps_patch() {
        assert_eq!(next_version("1.0.0"), "1.0.1");
        assert_eq!(next_version("2.3.9"), "2.3.10");
        assert_eq!(next_version("1.0.beta"), "1.0.1");
        assert_eq!(next_version("1.2"), "1.2.1");
        assert_eq!(next_version(""), "1.0.1");
    }

    #[test]
    fn begin_revision_updates_version_and_date() {
        let mut doc = ConfigDocument::parse(
            r#"{ "version": "1.4.2", "lastModified": "2025-12-01", "checks": [] }"#,
        )
        .unwrap();
        assert_eq!(doc.begin_revision("2026-10-18"), "1.4.3");
        assert_eq!(doc.last_modified, "2026-10-18");

        let mut fresh = ConfigDocument::parse(r#"{ "checks": [] }"#).unwrap();
        assert_eq!(fresh.begin_revision("2026-10-18"), "1.0.1");
    }

    #[test]
    fn export_keeps_wrongly_typed_properties() {
        let source = r#"{ "checks": [
            { "id": "1", "name": "Ethernet", "type": "NetworkAdapterConfiguration",
              "enabled": true,
              "properties": { "adapterName": "Ethernet", "subnetPrefixLength": "24", "macAddress": 5 } }
        ] }"#;
        let doc = ConfigDocument::parse(source).unwrap();
        let rendered: serde_json::Value =
            serde_json::from_str(&doc.to_json_pretty().unwrap()).unwrap();
        let original: serde_json::Value = serde_json::from_str(source).unwrap();
        assert_eq!(rendered["checks"], original["checks"]);
    }

    #[test]
    fn reads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Config.json");
        std::fs::write(&path, r#"{ "role": "Lab", "checks": [] }"#).unwrap();

        assert_eq!(ConfigDocument::from_file(&path).unwrap().role, "Lab");
        assert!(matches!(
            ConfigDocument::from_file(&dir.path().join("missing.json")),
            Err(DocumentError::Io { .. })
        ));
    }
}
