//! File I/O for settings values.
//!
//! [`loader`] reads a settings file and decodes it, creating a default file the
//! first time it is asked for. [`saver`] encodes a value and writes it, creating
//! parent directories as needed. Both are implemented as methods on
//! [`Store`](crate::Store).

pub mod loader;
pub mod saver;
