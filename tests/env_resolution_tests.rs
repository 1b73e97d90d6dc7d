//! Path resolution against the real process environment.
//!
//! Everything lives in a single test because the environment is shared by all
//! threads of the test binary.

#![cfg(not(windows))]

use std::path::PathBuf;

use confstore::Store;
use serde::{Deserialize, Serialize};
use tempfile::TempDir;

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
struct Prefs {
    volume: u8,
}

#[test]
fn test_store_follows_xdg_config_home() {
    std::env::set_var("XDG_CONFIG_HOME", "/tmp/cfg");
    let store = Store::new("app1");
    assert_eq!(store.app_dir().unwrap(), PathBuf::from("/tmp/cfg/app1"));
    assert_eq!(
        store.path("a.json").unwrap(),
        PathBuf::from("/tmp/cfg/app1/a.json")
    );

    // Resolution happens per call, so a changed variable is picked up.
    let root = TempDir::new().unwrap();
    std::env::set_var("XDG_CONFIG_HOME", root.path());
    store.save("prefs.yaml", &Prefs { volume: 7 }).unwrap();
    assert!(root.path().join("app1/prefs.yaml").is_file());
    assert_eq!(store.load::<Prefs>("prefs.yaml").unwrap(), Prefs { volume: 7 });

    // An empty XDG_CONFIG_HOME falls back to $HOME/.config.
    std::env::set_var("XDG_CONFIG_HOME", "");
    std::env::set_var("HOME", "/home/someone");
    assert_eq!(
        store.path("a.json").unwrap(),
        PathBuf::from("/home/someone/.config/app1/a.json")
    );
}
