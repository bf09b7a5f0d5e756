//! Capability traits consumed by the cipher engine

pub mod format;
pub mod primitive;

pub use format::{format_decode, format_encode, Format};
pub use primitive::CipherPrimitive;
