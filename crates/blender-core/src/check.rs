//! Typed check model.
//!
//! A check arrives from the builder UI as a loosely-shaped JSON record:
//!
//! ```json
//! { "id": "3", "name": "Office printer", "type": "PrinterInstalled",
//!   "enabled": true, "properties": { "driverName": "HP Universal" } }
//! ```
//!
//! The `properties` object depends on `type`. Decoding maps the record onto
//! [`CheckKind`], one variant per type that rules inspect. Decoding is total:
//! a missing or non-object `properties`, a non-string `type`, or a property of
//! the wrong JSON type never fails, the value is simply treated as absent.
//!
//! A decoded check remembers the record it came from. Encoding an unedited
//! check writes that record back verbatim; encoding an edited one writes the
//! typed view plus whatever the typed view could not represent (unknown
//! top-level keys, wrongly-typed properties).

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Check type tags used by the built-in rules.
pub mod names {
    /// `PrinterInstalled`
    pub const PRINTER_INSTALLED: &str = "PrinterInstalled";
    /// `DriverInstalled`
    pub const DRIVER_INSTALLED: &str = "DriverInstalled";
    /// `ShortcutExists`
    pub const SHORTCUT_EXISTS: &str = "ShortcutExists";
    /// `ShortcutProperties`
    pub const SHORTCUT_PROPERTIES: &str = "ShortcutProperties";
    /// `FilesExist`
    pub const FILES_EXIST: &str = "FilesExist";
    /// `AssignedAccess`
    pub const ASSIGNED_ACCESS: &str = "AssignedAccess";
    /// `RegistryValue`
    pub const REGISTRY_VALUE: &str = "RegistryValue";
    /// `CertificateInstalled`
    pub const CERTIFICATE_INSTALLED: &str = "CertificateInstalled";
    /// `NetworkAdapterConfiguration`
    pub const NETWORK_ADAPTER_CONFIGURATION: &str = "NetworkAdapterConfiguration";
    /// `FolderHasFiles`
    pub const FOLDER_HAS_FILES: &str = "FolderHasFiles";
    /// `FileContent`
    pub const FILE_CONTENT: &str = "FileContent";
}

/// One configuration entry in the ordered check list.
///
/// Equality compares the typed fields only, not the record a check was
/// decoded from.
#[derive(Debug, Clone)]
pub struct Check {
    /// Identifier, unique within the list and stable across edits.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Whether the remediation tool runs this check.
    pub enabled: bool,
    /// Type tag and type-specific properties.
    pub kind: CheckKind,
    source: Option<Map<String, Value>>,
}

impl PartialEq for Check {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.name == other.name
            && self.enabled == other.enabled
            && self.kind == other.kind
    }
}

impl Check {
    /// Creates an enabled check.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: CheckKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            enabled: true,
            kind,
            source: None,
        }
    }

    /// Sets the enabled flag.
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Returns the type tag, or `None` when the record had no string `type`.
    #[must_use]
    pub fn type_name(&self) -> Option<&str> {
        self.kind.type_name()
    }
}

/// Type tag plus the properties the tag implies.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckKind {
    /// Network printer that needs its driver installed first.
    PrinterInstalled(PrinterProperties),
    /// Printer driver deployment.
    DriverInstalled(DriverProperties),
    /// Shortcut file that must exist.
    ShortcutExists(ShortcutProperties),
    /// Properties of an existing shortcut.
    ShortcutProperties(ShortcutProperties),
    /// Files copied from the asset folder to a destination.
    FilesExist(FilesExistProperties),
    /// Kiosk / assigned access profile.
    AssignedAccess(AssignedAccessProperties),
    /// Registry value.
    RegistryValue(RegistryValueProperties),
    /// Certificate in a store.
    CertificateInstalled(CertificateProperties),
    /// Network adapter settings.
    NetworkAdapterConfiguration(NetworkAdapterProperties),
    /// Folder populated from assets.
    FolderHasFiles(AssetCopyProperties),
    /// File whose content comes from an asset.
    FileContent(AssetCopyProperties),
    /// Any other type tag; properties are kept verbatim.
    Other {
        /// The `type` tag.
        type_name: String,
        /// Raw `properties` value.
        properties: Value,
    },
    /// A record whose `type` is missing or not a string.
    Untyped {
        /// Raw `type` value.
        type_value: Value,
        /// Raw `properties` value.
        properties: Value,
    },
}

impl CheckKind {
    /// Returns the type tag.
    #[must_use]
    pub fn type_name(&self) -> Option<&str> {
        Some(match self {
            Self::PrinterInstalled(_) => names::PRINTER_INSTALLED,
            Self::DriverInstalled(_) => names::DRIVER_INSTALLED,
            Self::ShortcutExists(_) => names::SHORTCUT_EXISTS,
            Self::ShortcutProperties(_) => names::SHORTCUT_PROPERTIES,
            Self::FilesExist(_) => names::FILES_EXIST,
            Self::AssignedAccess(_) => names::ASSIGNED_ACCESS,
            Self::RegistryValue(_) => names::REGISTRY_VALUE,
            Self::CertificateInstalled(_) => names::CERTIFICATE_INSTALLED,
            Self::NetworkAdapterConfiguration(_) => names::NETWORK_ADAPTER_CONFIGURATION,
            Self::FolderHasFiles(_) => names::FOLDER_HAS_FILES,
            Self::FileContent(_) => names::FILE_CONTENT,
            Self::Other { type_name, .. } => type_name.as_str(),
            Self::Untyped { .. } => return None,
        })
    }

    /// Builds a kind from the raw `type` and `properties` values.
    #[must_use]
    pub fn from_parts(type_value: Value, properties: Value) -> Self {
        let Value::String(type_name) = type_value else {
            return Self::Untyped {
                type_value,
                properties,
            };
        };

        match type_name.as_str() {
            names::PRINTER_INSTALLED => Self::PrinterInstalled(decode(properties)),
            names::DRIVER_INSTALLED => Self::DriverInstalled(decode(properties)),
            names::SHORTCUT_EXISTS => Self::ShortcutExists(decode(properties)),
            names::SHORTCUT_PROPERTIES => Self::ShortcutProperties(decode(properties)),
            names::FILES_EXIST => Self::FilesExist(decode(properties)),
            names::ASSIGNED_ACCESS => Self::AssignedAccess(decode(properties)),
            names::REGISTRY_VALUE => Self::RegistryValue(decode(properties)),
            names::CERTIFICATE_INSTALLED => Self::CertificateInstalled(decode(properties)),
            names::NETWORK_ADAPTER_CONFIGURATION => {
                Self::NetworkAdapterConfiguration(decode(properties))
            }
            names::FOLDER_HAS_FILES => Self::FolderHasFiles(decode(properties)),
            names::FILE_CONTENT => Self::FileContent(decode(properties)),
            _ => Self::Other {
                type_name,
                properties,
            },
        }
    }

    /// Splits the kind back into raw `type` and `properties` values.
    #[must_use]
    pub fn to_parts(&self) -> (Value, Value) {
        let properties = match self {
            Self::PrinterInstalled(p) => encode(p),
            Self::DriverInstalled(p) => encode(p),
            Self::ShortcutExists(p) | Self::ShortcutProperties(p) => encode(p),
            Self::FilesExist(p) => encode(p),
            Self::AssignedAccess(p) => encode(p),
            Self::RegistryValue(p) => encode(p),
            Self::CertificateInstalled(p) => encode(p),
            Self::NetworkAdapterConfiguration(p) => encode(p),
            Self::FolderHasFiles(p) | Self::FileContent(p) => encode(p),
            Self::Other { properties, .. } => properties.clone(),
            Self::Untyped {
                type_value,
                properties,
            } => return (type_value.clone(), properties.clone()),
        };
        let type_value = self
            .type_name()
            .map_or(Value::Null, |name| Value::String(name.to_string()));
        (type_value, properties)
    }
}

fn decode<T: DeserializeOwned + Default>(properties: Value) -> T {
    match properties {
        Value::Object(_) => serde_json::from_value(properties).unwrap_or_default(),
        _ => T::default(),
    }
}

fn encode<T: Serialize>(properties: &T) -> Value {
    serde_json::to_value(properties).unwrap_or_else(|_| Value::Object(Map::new()))
}

/// Properties of a `PrinterInstalled` check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrinterProperties {
    /// Printer display name.
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub printer_name: Option<String>,
    /// Driver the printer uses; must match a `DriverInstalled` check.
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub driver_name: Option<String>,
    /// Port name.
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub port_name: Option<String>,
    /// Printer address.
    #[serde(
        rename = "printerIP",
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub printer_ip: Option<String>,
    /// `TCP` or `LPR`.
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub port_type: Option<String>,
    /// LPR queue name; required for LPR ports.
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub lpr_queue: Option<String>,
    /// Whether the printer becomes the default.
    #[serde(default, deserialize_with = "lenient::boolean", skip_serializing_if = "Option::is_none")]
    pub set_as_default: Option<bool>,
    /// Keys not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Properties of a `DriverInstalled` check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverProperties {
    /// Driver name as registered with the spooler.
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub driver_name: Option<String>,
    /// Driver class.
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub driver_class: Option<String>,
    /// Path of the driver package, relative to the asset folder.
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub source_asset_path: Option<String>,
    /// Minimum accepted driver version.
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub minimum_version: Option<String>,
    /// Keys not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Properties of `ShortcutExists` and `ShortcutProperties` checks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortcutProperties {
    /// Full path of the `.lnk` file.
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Shortcut target.
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub target_path: Option<String>,
    /// Target arguments.
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub arguments: Option<String>,
    /// Icon file, or `file,index` for an embedded icon.
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub icon_location: Option<String>,
    /// Shortcut comment.
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Keys not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// How a `FilesExist` check deploys its files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileMode {
    /// `destinationPath` is the full path of one file.
    SingleFile,
    /// `destinationPath` is a folder receiving every entry of `files`.
    MultipleFiles,
}

/// Properties of a `FilesExist` check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilesExistProperties {
    /// Raw deployment mode; see [`FilesExistProperties::mode`].
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    /// Destination folder, or destination file in single-file mode.
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub destination_path: Option<String>,
    /// File names copied into the destination folder.
    #[serde(default, deserialize_with = "lenient::string_list", skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<String>,
    /// Source folder, relative to the asset folder.
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub source_asset_path: Option<String>,
    /// Keys not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FilesExistProperties {
    /// Returns the deployment mode. Anything but `SingleFile` means multiple files.
    #[must_use]
    pub fn mode(&self) -> FileMode {
        match self.mode.as_deref() {
            Some("SingleFile") => FileMode::SingleFile,
            _ => FileMode::MultipleFiles,
        }
    }
}

/// Properties of an `AssignedAccess` check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignedAccessProperties {
    /// Profile GUID.
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<String>,
    /// Kiosk account display name.
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Allowed application ids or paths.
    #[serde(default, deserialize_with = "lenient::string_list", skip_serializing_if = "Vec::is_empty")]
    pub allowed_apps: Vec<String>,
    /// Shortcut paths pinned to Start.
    #[serde(default, deserialize_with = "lenient::string_list", skip_serializing_if = "Vec::is_empty")]
    pub start_pins: Vec<String>,
    /// Whether the taskbar is shown.
    #[serde(default, deserialize_with = "lenient::boolean", skip_serializing_if = "Option::is_none")]
    pub show_taskbar: Option<bool>,
    /// Allowed file-explorer namespaces.
    #[serde(default, deserialize_with = "lenient::string_list", skip_serializing_if = "Vec::is_empty")]
    pub allowed_namespaces: Vec<String>,
    /// Keys not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Properties of a `RegistryValue` check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryValueProperties {
    /// Key path, e.g. `HKLM:\SOFTWARE\Vendor`.
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Value name.
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Value data, string or number depending on the value type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    /// Registry value type (`String`, `DWord`, ...).
    #[serde(
        rename = "type",
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub value_type: Option<String>,
    /// Keys not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Properties of a `CertificateInstalled` check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateProperties {
    /// `LocalMachine` or `CurrentUser`.
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub store_location: Option<String>,
    /// Store name.
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub store_name: Option<String>,
    /// Certificate thumbprint.
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub thumbprint: Option<String>,
    /// Certificate subject.
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Certificate issuer.
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    /// Minimum remaining validity in days.
    #[serde(default, deserialize_with = "lenient::integer", skip_serializing_if = "Option::is_none")]
    pub minimum_days_valid: Option<u64>,
    /// Certificate file, relative to the asset folder.
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub source_asset_path: Option<String>,
    /// PFX password, stored in plain text in the document.
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub pfx_password: Option<String>,
    /// Keys not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Properties of a `NetworkAdapterConfiguration` check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkAdapterProperties {
    /// Adapter name.
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub adapter_name: Option<String>,
    /// Adapter description.
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub adapter_description: Option<String>,
    /// Adapter MAC address.
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,
    /// Static IPv4 address.
    #[serde(
        rename = "staticIPAddress",
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub static_ip_address: Option<String>,
    /// Subnet prefix length for the static address.
    #[serde(default, deserialize_with = "lenient::integer", skip_serializing_if = "Option::is_none")]
    pub subnet_prefix_length: Option<u64>,
    /// Default gateway.
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub default_gateway: Option<String>,
    /// DNS servers.
    #[serde(default, deserialize_with = "lenient::string_list", skip_serializing_if = "Vec::is_empty")]
    pub dns_servers: Vec<String>,
    /// Keys not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Properties shared by `FolderHasFiles` and `FileContent` checks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetCopyProperties {
    /// Target folder or file.
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Source, relative to the asset folder.
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub source_asset_path: Option<String>,
    /// Minimum number of files (`FolderHasFiles` only).
    #[serde(default, deserialize_with = "lenient::integer", skip_serializing_if = "Option::is_none")]
    pub minimum_file_count: Option<u64>,
    /// Keys not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Wire shape of a check record.
#[derive(Serialize, Deserialize)]
struct CheckRecord {
    #[serde(default, deserialize_with = "lenient::id")]
    id: String,
    #[serde(default, deserialize_with = "lenient::name")]
    name: String,
    #[serde(rename = "type", default)]
    check_type: Value,
    #[serde(default = "enabled_by_default", deserialize_with = "lenient::enabled")]
    enabled: bool,
    #[serde(default)]
    properties: Value,
}

fn enabled_by_default() -> bool {
    true
}

impl From<CheckRecord> for Check {
    fn from(record: CheckRecord) -> Self {
        Self::new(
            record.id,
            record.name,
            CheckKind::from_parts(record.check_type, record.properties),
        )
        .with_enabled(record.enabled)
    }
}

impl From<&Check> for CheckRecord {
    fn from(check: &Check) -> Self {
        let (check_type, properties) = check.kind.to_parts();
        Self {
            id: check.id.clone(),
            name: check.name.clone(),
            check_type,
            enabled: check.enabled,
            properties,
        }
    }
}

impl<'de> Deserialize<'de> for Check {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let source = Map::<String, Value>::deserialize(deserializer)?;
        let record: CheckRecord = serde_json::from_value(Value::Object(source.clone()))
            .map_err(serde::de::Error::custom)?;
        let mut check = Self::from(record);
        check.source = Some(source);
        Ok(check)
    }
}

impl Serialize for Check {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_record()
            .map_err(serde::ser::Error::custom)?
            .serialize(serializer)
    }
}

impl Check {
    fn to_record(&self) -> Result<Value, serde_json::Error> {
        let mut encoded = serde_json::to_value(CheckRecord::from(self))?;
        let Some(source) = &self.source else {
            return Ok(encoded);
        };

        let original = Self::from(serde_json::from_value::<CheckRecord>(Value::Object(
            source.clone(),
        ))?);
        if original == *self {
            return Ok(Value::Object(source.clone()));
        }

        // Edited: carry over only what the typed view of the original dropped.
        let typed_original = serde_json::to_value(CheckRecord::from(&original))?;
        if let (Value::Object(encoded), Value::Object(typed_original)) =
            (&mut encoded, &typed_original)
        {
            for (key, value) in source {
                if key == "properties" {
                    if original.kind.type_name() == self.kind.type_name() {
                        restore_dropped(encoded, typed_original, key, value);
                    }
                } else if !typed_original.contains_key(key) {
                    encoded.entry(key.clone()).or_insert_with(|| value.clone());
                }
            }
        }
        Ok(encoded)
    }
}

/// Re-inserts the property keys of `raw` that decoding dropped and the
/// current encoding does not set.
fn restore_dropped(
    encoded: &mut Map<String, Value>,
    typed_original: &Map<String, Value>,
    key: &str,
    raw: &Value,
) {
    let Value::Object(raw) = raw else {
        return;
    };
    let decoded = typed_original.get(key).and_then(Value::as_object);
    let Some(Value::Object(current)) = encoded.get_mut(key) else {
        return;
    };
    for (name, value) in raw {
        if decoded.is_some_and(|d| d.contains_key(name)) {
            continue;
        }
        current.entry(name.clone()).or_insert_with(|| value.clone());
    }
}

/// Deserializers that map wrongly-typed JSON values to "absent".
mod lenient {
    use super::{Deserialize, Deserializer, Value};

    pub fn string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::String(s) => Some(s),
            _ => None,
        })
    }

    /// Accepts an array of strings, or a newline-separated string as typed
    /// into the builder's textareas.
    pub fn string_list<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::Array(items) => items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
            Value::String(s) => s
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from)
                .collect(),
            _ => Vec::new(),
        })
    }

    pub fn boolean<'de, D: Deserializer<'de>>(d: D) -> Result<Option<bool>, D::Error> {
        Ok(Value::deserialize(d)?.as_bool())
    }

    pub fn integer<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u64>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        })
    }

    pub fn id<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            _ => String::new(),
        })
    }

    pub fn name<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        Ok(string(d)?.unwrap_or_default())
    }

    pub fn enabled<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
        Ok(boolean(d)?.unwrap_or(true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode_check(value: Value) -> Check {
        serde_json::from_value(value).expect("check should decode")
    }

    #[test]
    fn decodes_typed_printer() {
        let check = decode_check(json!({
            "id": "1",
            "name": "Office printer",
            "type": "PrinterInstalled",
            "enabled": true,
            "properties": { "driverName": "HP Universal", "printerIP": "10.0.0.5" }
        }));

        let CheckKind::PrinterInstalled(props) = &check.kind else {
            panic!("expected printer, got {:?}", check.kind);
        };
        assert_eq!(props.driver_name.as_deref(), Some("HP Universal"));
        assert_eq!(props.printer_ip.as_deref(), Some("10.0.0.5"));
        assert_eq!(check.type_name(), Some("PrinterInstalled"));
    }

    #[test]
    fn missing_properties_decode_as_default() {
        let check = decode_check(json!({ "id": "1", "name": "x", "type": "DriverInstalled" }));
        assert_eq!(
            check.kind,
            CheckKind::DriverInstalled(DriverProperties::default())
        );
        assert!(check.enabled);
    }

    #[test]
    fn non_object_properties_decode_as_default() {
        let check = decode_check(json!({
            "id": "1", "name": "x", "type": "FilesExist", "properties": "oops"
        }));
        assert_eq!(check.kind, CheckKind::FilesExist(FilesExistProperties::default()));
    }

    #[test]
    fn wrongly_typed_values_are_absent() {
        let check = decode_check(json!({
            "id": "1", "name": "x", "type": "PrinterInstalled",
            "properties": { "driverName": 42, "setAsDefault": "yes" }
        }));
        let CheckKind::PrinterInstalled(props) = check.kind else {
            panic!("expected printer");
        };
        assert!(props.driver_name.is_none());
        assert!(props.set_as_default.is_none());
    }

    #[test]
    fn non_string_type_is_untyped() {
        let check = decode_check(json!({ "id": 7, "name": "x", "type": 3 }));
        assert_eq!(check.id, "7");
        assert!(check.type_name().is_none());
        assert!(matches!(check.kind, CheckKind::Untyped { .. }));
    }

    #[test]
    fn unknown_type_is_kept_verbatim() {
        let check = decode_check(json!({
            "id": "1", "name": "Spooler", "type": "ServiceRunning",
            "properties": { "serviceName": "Spooler" }
        }));
        assert_eq!(check.type_name(), Some("ServiceRunning"));
        let encoded = serde_json::to_value(&check).expect("encode");
        assert_eq!(encoded["properties"]["serviceName"], "Spooler");
    }

    #[test]
    fn textarea_lists_split_on_newlines() {
        let check = decode_check(json!({
            "id": "1", "name": "Kiosk", "type": "AssignedAccess",
            "properties": { "startPins": "a.lnk\n\n  b.lnk  " }
        }));
        let CheckKind::AssignedAccess(props) = check.kind else {
            panic!("expected assigned access");
        };
        assert_eq!(props.start_pins, vec!["a.lnk", "b.lnk"]);
    }

    #[test]
    fn unknown_property_keys_survive_encoding() {
        let original = json!({
            "id": "4", "name": "Icons", "type": "FilesExist", "enabled": false,
            "properties": {
                "destinationPath": "C:\\Icons",
                "files": ["app.ico"],
                "sourceAssetPath": "Icons",
                "overwrite": true
            }
        });
        let check = decode_check(original.clone());
        assert!(!check.enabled);
        assert_eq!(serde_json::to_value(&check).expect("encode"), original);
    }

    #[test]
    fn wrongly_typed_known_keys_survive_encoding() {
        let original = json!({
            "id": 6, "name": "Ethernet", "type": "NetworkAdapterConfiguration",
            "enabled": "yes", "notes": "lab",
            "properties": {
                "adapterName": "Ethernet",
                "subnetPrefixLength": "24",
                "macAddress": 5,
                "dnsServers": "10.0.0.1\n10.0.0.2"
            }
        });
        let check = decode_check(original.clone());

        let CheckKind::NetworkAdapterConfiguration(props) = &check.kind else {
            panic!("expected network adapter");
        };
        assert_eq!(props.subnet_prefix_length, Some(24));
        assert!(props.mac_address.is_none());
        assert_eq!(props.dns_servers, vec!["10.0.0.1", "10.0.0.2"]);
        assert_eq!(check.id, "6");

        assert_eq!(serde_json::to_value(&check).expect("encode"), original);
    }

    #[test]
    fn edited_check_keeps_only_unrepresentable_keys() {
        let mut check = decode_check(json!({
            "id": "1", "name": "Ethernet", "type": "NetworkAdapterConfiguration",
            "notes": "lab",
            "properties": { "adapterName": "Ethernet", "macAddress": 5, "subnetPrefixLength": "24" }
        }));
        let CheckKind::NetworkAdapterConfiguration(props) = &mut check.kind else {
            panic!("expected network adapter");
        };
        props.adapter_name = None;
        props.subnet_prefix_length = Some(16);

        let encoded = serde_json::to_value(&check).expect("encode");
        assert_eq!(encoded["notes"], "lab");
        assert_eq!(
            encoded["properties"],
            json!({ "subnetPrefixLength": 16, "macAddress": 5 })
        );
    }

    #[test]
    fn retyped_check_drops_old_properties() {
        let mut check = decode_check(json!({
            "id": "1", "name": "x", "type": "PrinterInstalled",
            "properties": { "driverName": 42 }
        }));
        check.kind = CheckKind::DriverInstalled(DriverProperties::default());

        let encoded = serde_json::to_value(&check).expect("encode");
        assert_eq!(encoded["type"], "DriverInstalled");
        assert_eq!(encoded["properties"], json!({}));
    }

    #[test]
    fn files_exist_mode_defaults_to_multiple() {
        let mut props = FilesExistProperties::default();
        assert_eq!(props.mode(), FileMode::MultipleFiles);
        props.mode = Some("SingleFile".to_string());
        assert_eq!(props.mode(), FileMode::SingleFile);
        props.mode = Some("Whatever".to_string());
        assert_eq!(props.mode(), FileMode::MultipleFiles);
    }
}
