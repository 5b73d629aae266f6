//! Path handling for the Zellij plugin sandbox.
//!
//! Inside the sandbox the user's home directory is reachable as `/host`
//! (strictly, `/host` is the cwd Zellij was started from, which is usually
//! home). User-supplied paths from the plugin configuration are mapped onto
//! it.

use std::path::PathBuf;

/// Directory holding the span log.
///
/// # Examples
///
/// ```
/// use zcovid::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/zcovid"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("zcovid")
}

/// Replaces a leading `~` with the `/host` mount.
///
/// # Examples
///
/// ```
/// use zcovid::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/covid/countries.json"), "/host/covid/countries.json");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/zcovid.toml"), "/etc/zcovid.toml");
/// assert_eq!(expand_tilde("~user/file"), "~user/file");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

/// Turns a configured path into a sandbox path.
///
/// Tilde paths are expanded; relative paths are taken relative to `/host`.
#[must_use]
pub fn resolve_path(path: &str) -> PathBuf {
    let expanded = expand_tilde(path.trim());
    let resolved = PathBuf::from(&expanded);
    if resolved.is_absolute() {
        resolved
    } else {
        PathBuf::from("/host").join(resolved)
    }
}
