//! Format registry mapping file extensions to codecs.
//!
//! A [`Codec`] is a pair of functions that turn a [`serde_json::Value`] tree into
//! bytes and back. The store converts the caller's settings type to and from that
//! tree, so a single registry can serve any `Serialize`/`Deserialize` type.
//!
//! The registry starts out with `json`, `yaml`, `yml` and `toml`. More formats can
//! be registered at runtime; registering an extension twice replaces the first codec.
//!
//! # Examples
//!
//! ```
//! use confstore::format::{extension_of, FormatRegistry};
//! use std::path::Path;
//!
//! let registry = FormatRegistry::default();
//! let ext = extension_of(Path::new("prefs/window.yml"));
//! assert_eq!(ext, "yml");
//! assert!(registry.lookup(ext).is_some());
//! assert!(registry.lookup("xyz").is_none());
//! ```

pub mod builtin;

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use serde_json::Value;

use crate::error::BoxError;

type EncodeFn = dyn Fn(&Value) -> Result<Vec<u8>, BoxError> + Send + Sync;
type DecodeFn = dyn Fn(&[u8]) -> Result<Value, BoxError> + Send + Sync;

/// An encode/decode function pair for one file format.
///
/// Cloning a codec is cheap; both functions are reference counted.
#[derive(Clone)]
pub struct Codec {
    encode: Arc<EncodeFn>,
    decode: Arc<DecodeFn>,
}

impl Codec {
    /// Builds a codec from an encode and a decode function.
    ///
    /// No attempt is made to check that the two functions agree with each other.
    pub fn new<E, D>(encode: E, decode: D) -> Self
    where
        E: Fn(&Value) -> Result<Vec<u8>, BoxError> + Send + Sync + 'static,
        D: Fn(&[u8]) -> Result<Value, BoxError> + Send + Sync + 'static,
    {
        Self {
            encode: Arc::new(encode),
            decode: Arc::new(decode),
        }
    }

    /// Pretty-printed JSON.
    pub fn json() -> Self {
        Self::new(builtin::encode_json, builtin::decode_json)
    }

    /// YAML.
    pub fn yaml() -> Self {
        Self::new(builtin::encode_yaml, builtin::decode_yaml)
    }

    /// Pretty-printed TOML. `null` table members are dropped on encode.
    pub fn toml() -> Self {
        Self::new(builtin::encode_toml, builtin::decode_toml)
    }

    /// Encodes a value tree into bytes.
    pub fn encode(&self, value: &Value) -> Result<Vec<u8>, BoxError> {
        (self.encode)(value)
    }

    /// Decodes bytes into a value tree.
    pub fn decode(&self, bytes: &[u8]) -> Result<Value, BoxError> {
        (self.decode)(bytes)
    }
}

impl fmt::Debug for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Codec").finish_non_exhaustive()
    }
}

/// Extension-keyed set of codecs.
///
/// Keys are case-sensitive and carry no leading dot.
#[derive(Debug, Clone)]
pub struct FormatRegistry {
    codecs: HashMap<String, Codec>,
}

impl Default for FormatRegistry {
    /// Creates a registry seeded with `json`, `yaml`, `yml` and `toml`.
    fn default() -> Self {
        let mut registry = Self::empty();
        let yaml = Codec::yaml();
        registry.insert("json", Codec::json());
        registry.insert("yaml", yaml.clone());
        registry.insert("yml", yaml);
        registry.insert("toml", Codec::toml());
        registry
    }
}

impl FormatRegistry {
    /// Creates a registry with no codecs at all.
    pub fn empty() -> Self {
        Self {
            codecs: HashMap::new(),
        }
    }

    /// Inserts or replaces the codec for `extension`.
    pub fn insert(&mut self, extension: impl Into<String>, codec: Codec) {
        self.codecs.insert(extension.into(), codec);
    }

    /// Registers an encode/decode pair for `extension`, replacing any earlier one.
    pub fn register<E, D>(&mut self, extension: impl Into<String>, encode: E, decode: D)
    where
        E: Fn(&Value) -> Result<Vec<u8>, BoxError> + Send + Sync + 'static,
        D: Fn(&[u8]) -> Result<Value, BoxError> + Send + Sync + 'static,
    {
        self.insert(extension, Codec::new(encode, decode));
    }

    /// Returns the codec registered for `extension`, if any.
    pub fn lookup(&self, extension: &str) -> Option<&Codec> {
        self.codecs.get(extension)
    }

    /// Returns the registered extensions in sorted order.
    pub fn extensions(&self) -> Vec<&str> {
        let mut exts: Vec<&str> = self.codecs.keys().map(String::as_str).collect();
        exts.sort_unstable();
        exts
    }
}

/// Returns the part of the file name after its last `.`.
///
/// Only the final path component is considered, so `conf.d/settings` has no
/// extension. A file name without a dot yields `""`, which no codec is
/// registered under.
pub fn extension_of(path: &Path) -> &str {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| ext)
        .unwrap_or("")
}
