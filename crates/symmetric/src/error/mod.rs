//! Error handling for cipher engine operations
//!
//! The engine reports through the unified API error type; nothing here
//! adds variants of its own.

pub use api::error::{validate, Error, Result};
