//! Constant values shared across the modecrypt crates

#![forbid(unsafe_code)]

pub mod utils;

pub use utils::symmetric::DEFAULT_FILLER;
