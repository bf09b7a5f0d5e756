//! Public API traits and types for the modecrypt library
//!
//! This crate provides the public API surface for the modecrypt ecosystem:
//! the capability traits a cipher primitive or output formatter implements,
//! the error taxonomy, and the data-model types shared by every crate.

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{validate, Error, Result};
pub use types::*;

pub use traits::{format_decode, format_encode, CipherPrimitive, Format};
