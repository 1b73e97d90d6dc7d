//! Settings file loading.
//!
//! Loading never fails just because a file is missing: the default value is
//! written out in the file's format and handed back to the caller, so the value
//! seen right after creation is the same one a later load will read.

use std::fs;
use std::io;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{BoxError, Result, StoreError};
use crate::format::Codec;
use crate::store::Store;

impl Store {
    /// Loads `relative` from the application directory, picking the codec from
    /// the file extension.
    ///
    /// If the file does not exist, `T::default()` is saved there and returned.
    ///
    /// # Arguments
    ///
    /// * `relative` - File path below the application directory; its extension
    ///   selects the codec
    ///
    /// # Returns
    ///
    /// The decoded value, or the freshly written default for a missing file.
    ///
    /// # Errors
    ///
    /// - [`StoreError::UnknownFormat`] if the extension has no codec
    /// - [`StoreError::InvalidPath`] if `relative` points outside the application directory
    /// - [`StoreError::Decode`] if the file contents cannot be decoded into `T`
    /// - [`StoreError::Io`] if the file cannot be read, or if it is missing and
    ///   the default could not be written (the original read error is returned)
    pub fn load<T>(&self, relative: impl AsRef<Path>) -> Result<T>
    where
        T: Serialize + DeserializeOwned + Default,
    {
        self.load_or_else(relative, T::default)
    }

    /// Like [`Store::load`], but the value created for a missing file comes from
    /// `default` instead of `T::default()`.
    pub fn load_or_else<T, F>(&self, relative: impl AsRef<Path>, default: F) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> T,
    {
        let relative = relative.as_ref();
        let codec = self.codec_for(relative)?;
        self.load_with_or_else(relative, codec, default)
    }

    /// Loads `relative` into `target`.
    ///
    /// On a missing file `target` is overwritten with the default that was saved.
    pub fn load_into<T>(&self, relative: impl AsRef<Path>, target: &mut T) -> Result<()>
    where
        T: Serialize + DeserializeOwned + Default,
    {
        *target = self.load(relative)?;
        Ok(())
    }

    /// Loads `relative` with an explicit codec, ignoring the file extension.
    pub fn load_with<T>(&self, relative: impl AsRef<Path>, codec: &Codec) -> Result<T>
    where
        T: Serialize + DeserializeOwned + Default,
    {
        self.load_with_or_else(relative, codec, T::default)
    }

    /// Loads `relative` into `target` with an explicit codec.
    pub fn load_into_with<T>(
        &self,
        relative: impl AsRef<Path>,
        target: &mut T,
        codec: &Codec,
    ) -> Result<()>
    where
        T: Serialize + DeserializeOwned + Default,
    {
        *target = self.load_with(relative, codec)?;
        Ok(())
    }

    /// Loads `relative` with an explicit codec and a default factory.
    pub fn load_with_or_else<T, F>(
        &self,
        relative: impl AsRef<Path>,
        codec: &Codec,
        default: F,
    ) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> T,
    {
        let relative = relative.as_ref();
        let path = self.path(relative)?;
        debug!("loading settings from {}", path.display());

        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(read_err) if read_err.kind() == io::ErrorKind::NotFound => {
                let value = default();
                if let Err(save_err) = self.save_with(relative, &value, codec) {
                    warn!(
                        "could not create default settings at {}: {save_err}",
                        path.display()
                    );
                    return Err(StoreError::Io(read_err));
                }
                info!("created default settings at {}", path.display());
                return Ok(value);
            }
            Err(read_err) => return Err(StoreError::Io(read_err)),
        };

        decode_bytes(relative, codec, &bytes)
    }
}

/// Decodes file bytes into `T`, tagging failures with `relative`.
fn decode_bytes<T: DeserializeOwned>(relative: &Path, codec: &Codec, bytes: &[u8]) -> Result<T> {
    let decode_err = |source: BoxError| StoreError::Decode {
        path: relative.to_path_buf(),
        source,
    };
    let tree = codec.decode(bytes).map_err(decode_err)?;
    serde_json::from_value(tree).map_err(|e| decode_err(e.into()))
}
