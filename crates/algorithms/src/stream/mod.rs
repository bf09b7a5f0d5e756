//! Stream cipher primitives
//!
//! Stream primitives report a block size of 1 and keep their keystream
//! position in the engine's user region, which is why they ask for it to be
//! snapshotted after key setup.

pub mod rc4;

pub use rc4::Rc4;
