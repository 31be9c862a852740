//! Windows path utilities.
//!
//! Comparisons are case-insensitive, so every helper here returns lower-cased
//! text.

/// Environment-variable prefixes that expand to `C:\ProgramData` on the
/// machines the configuration targets.
const PROGRAM_DATA_ALIASES: &[&str] = &["%allusersprofile%", "%programdata%"];

const PROGRAM_DATA: &str = "c:\\programdata";

/// Lower-cases a path and expands the known `ProgramData` aliases.
///
/// # Example
///
/// ```ignore
/// assert_eq!(
///     normalize_shell_path("%AllUsersProfile%\\Start Menu\\App.lnk"),
///     "c:\\programdata\\start menu\\app.lnk"
/// );
/// ```
#[must_use]
pub fn normalize_shell_path(path: &str) -> String {
    let lowered = path.trim().to_lowercase();
    for alias in PROGRAM_DATA_ALIASES {
        if lowered.contains(alias) {
            return lowered.replacen(alias, PROGRAM_DATA, 1);
        }
    }
    lowered
}

/// Whether an icon location points into Windows itself or at an icon
/// embedded in a resource file (`shell32.dll,5`). Such icons never need to
/// be deployed.
#[must_use]
pub fn is_embedded_or_system_icon(location: &str) -> bool {
    let lowered = location.to_lowercase();
    lowered.contains("system32") || lowered.contains("windows\\") || lowered.contains(',')
}

/// Whether a normalized path lies in the Windows installation folder
/// (`<drive>:\windows\...`, `%windir%\...` or `%systemroot%\...`).
///
/// Only the top-level folder counts: `c:\programdata\microsoft\windows\...`
/// is an ordinary location.
#[must_use]
pub fn is_under_windows(normalized: &str) -> bool {
    if normalized.starts_with("%windir%\\") || normalized.starts_with("%systemroot%\\") {
        return true;
    }
    let mut chars = normalized.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.as_str().starts_with(":\\windows\\")
}

/// Splits an icon location into lower-cased `(folder, file name)` at the
/// last backslash. Without a backslash the folder is empty.
#[must_use]
pub fn split_icon_location(location: &str) -> (String, String) {
    let lowered = location.to_lowercase();
    match lowered.rfind('\\') {
        Some(pos) => (lowered[..pos].to_string(), lowered[pos + 1..].to_string()),
        None => (String::new(), lowered),
    }
}
