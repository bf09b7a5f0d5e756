//! Security primitives and memory safety utilities
//!
//! This module provides the zeroizing containers and erasure helpers used
//! wherever key material or chaining state is held.

pub mod memory;
pub mod secret;

pub use memory::{barrier, secure_wipe};
pub use secret::SecretVec;
