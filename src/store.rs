//! The settings store handle.
//!
//! A [`Store`] ties together an application name, the place its configuration
//! directory lives, and the [`FormatRegistry`] used to pick a codec for each file.
//! Loading and saving are implemented in [`crate::file`].

use std::path::{Component, Path, PathBuf};

use serde_json::Value;

use crate::error::{BoxError, Result, StoreError};
use crate::format::{extension_of, Codec, FormatRegistry};
use crate::paths;

/// Handle for loading and saving one application's settings files.
///
/// # Examples
///
/// ```no_run
/// use confstore::Store;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, Default, Serialize, Deserialize)]
/// struct Prefs {
///     theme: String,
///     font_size: u32,
/// }
///
/// let store = Store::new("myapp");
/// // Creates ~/.config/myapp/prefs.toml on first run.
/// let mut prefs: Prefs = store.load("prefs.toml").unwrap();
/// prefs.font_size = 14;
/// store.save("prefs.toml", &prefs).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct Store {
    app_name: String,
    base_dir: Option<PathBuf>,
    formats: FormatRegistry,
}

impl Store {
    /// Creates a store that resolves its directory from the platform conventions.
    ///
    /// # Panics
    ///
    /// Panics if `app_name` is empty. Every path depends on it, so a missing name
    /// is a programming error rather than a runtime condition.
    pub fn new(app_name: impl Into<String>) -> Self {
        let app_name = app_name.into();
        assert!(
            !app_name.is_empty(),
            "confstore: application name not defined"
        );
        Self {
            app_name,
            base_dir: None,
            formats: FormatRegistry::default(),
        }
    }

    /// Creates a store whose application directory is `<base_dir>/<app_name>`.
    ///
    /// No environment variables are consulted.
    ///
    /// # Panics
    ///
    /// Panics if `app_name` is empty.
    pub fn with_base_dir(app_name: impl Into<String>, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: Some(base_dir.into()),
            ..Self::new(app_name)
        }
    }

    /// Returns the application name this store was created with.
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Returns the absolute configuration directory for this application.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NoConfigDir`] when no base directory can be derived
    /// from the environment.
    pub fn app_dir(&self) -> Result<PathBuf> {
        match &self.base_dir {
            Some(base) => Ok(base.join(&self.app_name)),
            None => paths::system_app_dir(&self.app_name).ok_or(StoreError::NoConfigDir),
        }
    }

    /// Resolves `relative` against the application directory.
    ///
    /// # Arguments
    ///
    /// * `relative` - File path below the application directory, e.g. `"prefs.toml"`
    ///   or `"profiles/work.yaml"`
    ///
    /// # Returns
    ///
    /// The absolute path `<app_dir>/<relative>`.
    ///
    /// # Errors
    ///
    /// - [`StoreError::InvalidPath`] if `relative` is absolute, carries a drive or
    ///   UNC prefix, or contains a `..` component
    /// - [`StoreError::NoConfigDir`] if the application directory cannot be resolved
    pub fn path(&self, relative: impl AsRef<Path>) -> Result<PathBuf> {
        let relative = relative.as_ref();
        let escapes = relative.components().any(|c| {
            matches!(
                c,
                Component::Prefix(_) | Component::RootDir | Component::ParentDir
            )
        });
        if escapes {
            return Err(StoreError::InvalidPath {
                path: relative.to_path_buf(),
            });
        }
        Ok(self.app_dir()?.join(relative))
    }

    /// Returns the codecs this store picks from by file extension.
    pub fn formats(&self) -> &FormatRegistry {
        &self.formats
    }

    /// Returns the codecs for modification, e.g. to [`FormatRegistry::insert`] a
    /// prebuilt [`Codec`].
    pub fn formats_mut(&mut self) -> &mut FormatRegistry {
        &mut self.formats
    }

    /// Registers a codec for `extension`, replacing any existing one.
    ///
    /// # Arguments
    ///
    /// * `extension` - Case-sensitive extension without the leading dot
    /// * `encode` - Turns a value tree into file bytes
    /// * `decode` - Turns file bytes into a value tree
    ///
    /// The two functions are not checked against each other.
    pub fn register<E, D>(&mut self, extension: impl Into<String>, encode: E, decode: D)
    where
        E: Fn(&Value) -> std::result::Result<Vec<u8>, BoxError> + Send + Sync + 'static,
        D: Fn(&[u8]) -> std::result::Result<Value, BoxError> + Send + Sync + 'static,
    {
        self.formats.register(extension, encode, decode);
    }

    /// Looks up the codec for the extension of `relative`.
    pub(crate) fn codec_for(&self, relative: &Path) -> Result<&Codec> {
        let extension = extension_of(relative);
        self.formats
            .lookup(extension)
            .ok_or_else(|| StoreError::UnknownFormat {
                path: relative.to_path_buf(),
                extension: extension.to_string(),
            })
    }
}
