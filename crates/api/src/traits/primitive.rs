//! Capability interface of a concrete cipher primitive

use crate::error::{Error, Result};
use crate::types::CipherMetadata;

/// A block or stream transform plugged into the cipher engine
///
/// A primitive keeps no key material of its own. Everything it needs
/// between calls (expanded key schedule, keystream position) lives in the
/// `user` region the engine hands to every method, so that the engine can
/// snapshot, restore and wipe it.
///
/// `encode` and `decode` work in place on `data`, whose length is always a
/// whole number of the primitive's blocks.
pub trait CipherPrimitive: Send + Sync {
    /// Algorithm name used for registry lookups and logging
    fn name(&self) -> &'static str;

    /// Static sizing of this primitive
    ///
    /// Types that do not override this cannot be instantiated.
    fn metadata(&self) -> Result<CipherMetadata> {
        Err(Error::AbstractCall {
            type_name: self.name(),
            method: "metadata",
        })
    }

    /// Screen `key` before the engine touches any state
    ///
    /// Errors returned here leave a running session intact. The default
    /// accepts every key.
    fn check_key(&self, _key: &[u8]) -> Result<()> {
        Ok(())
    }

    /// Populate `user` from `key`
    fn key_setup(&self, user: &mut [u8], key: &[u8]) -> Result<()>;

    /// Forward transform of `data` in place
    fn encode(&self, user: &mut [u8], data: &mut [u8]) -> Result<()>;

    /// Inverse transform of `data` in place
    fn decode(&self, user: &mut [u8], data: &mut [u8]) -> Result<()>;
}
