//! confstore - load and save application settings files.
//!
//! Settings live in the platform configuration directory of an application:
//! `%APPDATA%\<app>` on Windows, `$XDG_CONFIG_HOME/<app>` or `~/.config/<app>`
//! elsewhere. The file format is chosen from the file extension (`json`, `yaml`,
//! `yml`, `toml`, or anything registered at runtime), and a file that does not
//! exist yet is created from the default value on first load.
//!
//! # Example
//!
//! ```
//! use confstore::Store;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
//! struct Settings {
//!     age: u32,
//!     cats: Vec<String>,
//!     pi: f64,
//! }
//!
//! let root = tempfile::tempdir().unwrap();
//! let store = Store::with_base_dir("store_test", root.path());
//!
//! let settings = Settings {
//!     age: 42,
//!     cats: vec!["cat1".into(), "cat2".into(), "cat3".into()],
//!     pi: 3.1415,
//! };
//! store.save("preferences.toml", &settings).unwrap();
//!
//! let loaded: Settings = store.load("preferences.toml").unwrap();
//! assert_eq!(loaded, settings);
//! ```

pub mod error;
pub mod file;
pub mod format;
pub mod paths;
pub mod store;

pub use error::{BoxError, Result, StoreError};
pub use format::{Codec, FormatRegistry};
pub use paths::Platform;
pub use store::Store;
