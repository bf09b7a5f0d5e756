//! Block cipher primitives
//!
//! Block primitives transform whole blocks only; the mode engine decides
//! how blocks are chained.

pub mod aes;

pub use aes::Aes;
