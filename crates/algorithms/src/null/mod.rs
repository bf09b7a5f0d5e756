//! Pass-through cipher
//!
//! Leaves data untouched so the engine's state machine and buffer plumbing
//! can be exercised independently of real cryptography.

use api::{CipherKind, CipherMetadata, CipherPrimitive, Result};
use params::utils::symmetric::NULL_BUFFER_SIZE;

/// Identity transform with unbounded key size
#[derive(Debug, Clone, Copy, Default)]
pub struct Null;

impl CipherPrimitive for Null {
    fn name(&self) -> &'static str {
        "Null"
    }

    fn metadata(&self) -> Result<CipherMetadata> {
        Ok(CipherMetadata {
            key_size: 0,
            block_size: 1,
            buffer_size: NULL_BUFFER_SIZE,
            user_size: 0,
            user_must_be_saved: false,
            kind: CipherKind::STREAM | CipherKind::SYMMETRIC,
        })
    }

    fn key_setup(&self, _user: &mut [u8], _key: &[u8]) -> Result<()> {
        Ok(())
    }

    fn encode(&self, _user: &mut [u8], _data: &mut [u8]) -> Result<()> {
        Ok(())
    }

    fn decode(&self, _user: &mut [u8], _data: &mut [u8]) -> Result<()> {
        Ok(())
    }
}
