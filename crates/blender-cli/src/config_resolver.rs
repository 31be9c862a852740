//! Locating `blender.toml` for a configuration document.
//!
//! The builder tells users to deploy a document as
//! `Configurations\<role>\Config.json`, with assets in
//! `Configurations\<role>\Assets\`. Validator settings follow the same tree:
//!
//! 1. `--config` / `$BLENDER_CONFIG`
//! 2. `blender.toml` in the role folder, next to `Config.json`
//! 3. `blender.toml` in the `Configurations` folder, shared by every role
//! 4. `config.toml` in `$CONFIG_BLENDER_DIR` or `~/.config-blender/`
//! 5. built-in defaults
//!
//! Step 3 only applies when the document sits in a role folder: a folder
//! named after the document's `role`, or one whose parent is `Configurations`.

use blender_core::utils::eq_ignore_case;
use std::path::{Path, PathBuf};

/// Settings file name in role and `Configurations` folders.
pub const CONFIG_FILE_NAME: &str = "blender.toml";

/// Folder that holds one subfolder per role.
const CONFIGURATIONS_DIR_NAME: &str = "Configurations";

/// Settings file name in the per-user directory.
const USER_CONFIG_NAME: &str = "config.toml";

/// Where a document sits relative to the `Configurations\<role>\` tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleLayout {
    /// Folder holding the document.
    pub role_dir: PathBuf,
    /// The folder above `role_dir`, when `role_dir` is a role folder.
    pub configurations_dir: Option<PathBuf>,
    /// Whether `role_dir` is named after the document's role.
    pub named_after_role: bool,
}

impl RoleLayout {
    /// Derives the layout from the document path and its `role` field.
    #[must_use]
    pub fn of(document: &Path, role: &str) -> Self {
        let role_dir = match document.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let folder_name = |path: &Path| {
            path.file_name()
                .map(|name| name.to_string_lossy().into_owned())
        };

        let role = role.trim();
        let named_after_role = !role.is_empty()
            && folder_name(&role_dir).is_some_and(|name| eq_ignore_case(&name, role));
        let configurations_dir = role_dir.parent().filter(|parent| {
            named_after_role
                || folder_name(parent)
                    .is_some_and(|name| eq_ignore_case(&name, CONFIGURATIONS_DIR_NAME))
        });

        Self {
            configurations_dir: configurations_dir.map(Path::to_path_buf),
            role_dir,
            named_after_role,
        }
    }
}

/// Where the settings came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// `--config` or `$BLENDER_CONFIG`.
    Explicit(PathBuf),
    /// The role folder.
    Role(PathBuf),
    /// The `Configurations` folder.
    Shared(PathBuf),
    /// The per-user directory.
    User(PathBuf),
    /// Nothing found.
    Default,
}

impl ConfigSource {
    /// The settings file, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Role(p) | Self::Shared(p) | Self::User(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Short description for log lines.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Explicit(_) => "explicit",
            Self::Role(_) => "role",
            Self::Shared(_) => "shared",
            Self::User(_) => "user",
            Self::Default => "default",
        }
    }
}

/// Picks the settings file for a document. An explicit path is returned
/// whether or not it exists, so loading reports it.
#[must_use]
pub fn resolve(layout: &RoleLayout, explicit: Option<&Path>, user_dir: Option<&Path>) -> ConfigSource {
    if let Some(path) = explicit {
        return ConfigSource::Explicit(path.to_path_buf());
    }

    let candidates = [
        Some(ConfigSource::Role(layout.role_dir.join(CONFIG_FILE_NAME))),
        layout
            .configurations_dir
            .as_ref()
            .map(|dir| ConfigSource::Shared(dir.join(CONFIG_FILE_NAME))),
        user_dir.map(|dir| ConfigSource::User(dir.join(USER_CONFIG_NAME))),
    ];

    let found = candidates
        .into_iter()
        .flatten()
        .find(|source| source.path().is_some_and(Path::is_file));
    match found {
        Some(source) => {
            tracing::debug!("Found {} config", source.label());
            source
        }
        None => ConfigSource::Default,
    }
}

/// The per-user settings directory: `$CONFIG_BLENDER_DIR`, else
/// `~/.config-blender/`.
#[must_use]
pub fn user_config_dir() -> Option<PathBuf> {
    std::env::var_os("CONFIG_BLENDER_DIR")
        .map(PathBuf::from)
        .or_else(|| home::home_dir().map(|home| home.join(".config-blender")))
}
