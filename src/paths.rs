//! Platform configuration directory resolution.
//!
//! - Windows: `%APPDATA%\<app>`
//! - Everything else: `$XDG_CONFIG_HOME/<app>` when set and non-empty,
//!   otherwise `$HOME/.config/<app>`
//!
//! The rules are expressed as a pure function of the platform, the application
//! name and an environment lookup so they can be checked without touching the
//! process environment.

use std::ffi::OsString;
use std::path::PathBuf;

/// Directory layout convention to resolve against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// `%APPDATA%`
    Windows,
    /// XDG base directories with a `$HOME/.config` fallback.
    Unix,
}

impl Platform {
    /// The convention of the platform this binary was built for.
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }
}

/// Resolves the configuration directory for `app_name`.
///
/// `var` looks up an environment variable. Empty values are treated as unset.
/// When the primary variable is missing the `dirs` crate is asked for the
/// equivalent location; `None` means no base directory could be found at all.
pub fn resolve_app_dir<F>(platform: Platform, app_name: &str, var: F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<OsString>,
{
    let non_empty = |key: &str| var(key).filter(|v| !v.is_empty()).map(PathBuf::from);

    let base = match platform {
        Platform::Windows => non_empty("APPDATA").or_else(dirs::config_dir)?,
        Platform::Unix => match non_empty("XDG_CONFIG_HOME") {
            Some(xdg) => xdg,
            None => non_empty("HOME").or_else(dirs::home_dir)?.join(".config"),
        },
    };

    Some(base.join(app_name))
}

/// Resolves the configuration directory for `app_name` from the process environment.
pub fn system_app_dir(app_name: &str) -> Option<PathBuf> {
    resolve_app_dir(Platform::current(), app_name, |key| std::env::var_os(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<OsString> {
        let map: HashMap<String, OsString> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), OsString::from(v)))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_xdg_config_home_wins() {
        let dir = resolve_app_dir(
            Platform::Unix,
            "app1",
            env(&[("XDG_CONFIG_HOME", "/tmp/cfg"), ("HOME", "/home/u")]),
        );
        assert_eq!(dir, Some(PathBuf::from("/tmp/cfg/app1")));
    }

    #[test]
    fn test_home_fallback_when_xdg_unset() {
        let dir = resolve_app_dir(Platform::Unix, "app1", env(&[("HOME", "/home/u")]));
        assert_eq!(dir, Some(PathBuf::from("/home/u/.config/app1")));
    }

    #[test]
    fn test_home_fallback_when_xdg_empty() {
        let dir = resolve_app_dir(
            Platform::Unix,
            "app1",
            env(&[("XDG_CONFIG_HOME", ""), ("HOME", "/home/u")]),
        );
        assert_eq!(dir, Some(PathBuf::from("/home/u/.config/app1")));
    }

    #[test]
    fn test_windows_uses_appdata() {
        let dir = resolve_app_dir(
            Platform::Windows,
            "app1",
            env(&[("APPDATA", "C:\\Users\\u\\AppData\\Roaming"), ("XDG_CONFIG_HOME", "/tmp/cfg")]),
        )
        .unwrap();
        assert!(dir.starts_with("C:\\Users\\u\\AppData\\Roaming"));
        assert!(dir.ends_with("app1"));
        assert!(!dir.to_string_lossy().contains("/tmp/cfg"));
    }

    #[test]
    fn test_windows_ignores_xdg() {
        let dir = resolve_app_dir(
            Platform::Windows,
            "app1",
            env(&[("APPDATA", "/roaming"), ("XDG_CONFIG_HOME", "/tmp/cfg")]),
        );
        assert_eq!(dir, Some(PathBuf::from("/roaming").join("app1")));
    }

    #[test]
    fn test_current_platform_matches_cfg() {
        assert_eq!(Platform::current() == Platform::Windows, cfg!(windows));
    }
}
