//! Cipher primitives and output formats for the modecrypt library
//!
//! The primitives here implement [`api::CipherPrimitive`] and carry no key
//! state of their own; the mode engine in `modecrypt-symmetric` owns every
//! byte of working memory. The formats implement [`api::Format`].
//!
//! # Security Features
//!
//! - Constant-time AES S-box (no table lookups)
//! - Temporary key and state copies zeroized after use

#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Block cipher primitives
pub mod block;
/// Output formats
pub mod format;
/// Pass-through primitive
pub mod null;
/// Stream cipher primitives
pub mod stream;

pub use block::Aes;
pub use format::{Base64, Hex, HexUpper, Plain};
pub use null::Null;
pub use stream::Rc4;

pub use api::{Error, Result};
