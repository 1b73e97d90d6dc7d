//! Settings file saving.

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::error::{BoxError, Result, StoreError};
use crate::format::builtin::{non_finite_error, yaml_non_finite};
use crate::format::Codec;
use crate::store::Store;

impl Store {
    /// Saves `value` to `relative` in the application directory, picking the
    /// codec from the file extension.
    ///
    /// The encoded bytes get a trailing newline. Missing parent directories are
    /// created and any existing file is overwritten in place.
    ///
    /// # Arguments
    ///
    /// * `relative` - File path below the application directory; its extension
    ///   selects the codec
    /// * `value` - Settings to write
    ///
    /// # Errors
    ///
    /// - [`StoreError::UnknownFormat`] if the extension has no codec
    /// - [`StoreError::Encode`] if `value` cannot be encoded, including when it
    ///   holds an infinite or NaN float
    /// - [`StoreError::InvalidPath`] if `relative` points outside the application directory
    /// - [`StoreError::Io`] if a directory cannot be created or the write fails
    pub fn save<T>(&self, relative: impl AsRef<Path>, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        let relative = relative.as_ref();
        let codec = self.codec_for(relative)?;
        self.save_with(relative, value, codec)
    }

    /// Saves `value` to `relative` with an explicit codec, ignoring the file
    /// extension.
    pub fn save_with<T>(&self, relative: impl AsRef<Path>, value: &T, codec: &Codec) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        let relative = relative.as_ref();
        let mut bytes = encode_value(relative, codec, value)?;
        bytes.push(b'\n');

        let path = self.path(relative)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        debug!("writing {} bytes to {}", bytes.len(), path.display());
        fs::write(&path, bytes)?;
        Ok(())
    }
}

/// Encodes `value` with `codec`, tagging failures with `relative`.
///
/// The JSON value tree turns infinite and NaN floats into `null`, so such values
/// are refused up front instead of being written out as something else.
fn encode_value<T: Serialize + ?Sized>(relative: &Path, codec: &Codec, value: &T) -> Result<Vec<u8>> {
    let encode_err = |source: BoxError| StoreError::Encode {
        path: relative.to_path_buf(),
        source,
    };
    if let Some(f) = serde_yaml::to_value(value)
        .ok()
        .as_ref()
        .and_then(yaml_non_finite)
    {
        return Err(encode_err(non_finite_error(f)));
    }
    let tree = serde_json::to_value(value).map_err(|e| encode_err(e.into()))?;
    codec.encode(&tree).map_err(encode_err)
}
