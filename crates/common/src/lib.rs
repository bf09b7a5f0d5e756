//! Common implementations and shared functionality for the modecrypt library
//!
//! This crate provides the secure memory primitives the engine builds its
//! key-bearing buffers on.

#![forbid(unsafe_code)]

pub mod security;

// Re-export core security types
pub use security::{barrier, secure_wipe, SecretVec};
