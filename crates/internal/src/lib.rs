//! Internal utilities for the modecrypt library
//!
//! Not part of the public API; shared by the algorithm and engine crates.

#![forbid(unsafe_code)]

pub mod constant_time;
pub mod endian;
pub mod xor;
