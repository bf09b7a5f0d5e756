//! Mode-aware symmetric cipher engine for the modecrypt library
//!
//! This crate turns any [`CipherPrimitive`] into a stateful [`Cipher`]:
//! key and vector setup, the chaining modes, finalization with a MAC tag,
//! and erasure of every byte of key material. A [`CipherRegistry`] builds
//! ciphers by name or numeric identity.

#![forbid(unsafe_code)]

pub mod cipher;
pub mod error;
mod modes;
pub mod registry;
pub mod text;

pub use cipher::Cipher;
pub use registry::{CipherFactory, CipherRegistry};
pub use text::TextCipher;

pub use algorithms::{Aes, Base64, Hex, HexUpper, Null, Plain, Rc4};
pub use api::{CipherMetadata, CipherPrimitive, CipherState, Format, Mode};

// Re-export the API error system instead of custom error types
pub use error::{validate, Error, Result};
