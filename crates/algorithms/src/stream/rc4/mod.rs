//! RC4 stream cipher primitive
//!
//! User region layout: the 256-byte permutation followed by the `i` and `j`
//! indices. Encoding and decoding are the same keystream XOR.

use api::{validate, CipherKind, CipherMetadata, CipherPrimitive, Error, Result};
use params::utils::symmetric::{RC4_BUFFER_SIZE, RC4_KEY_SIZE, RC4_USER_SIZE};

const I_INDEX: usize = 256;
const J_INDEX: usize = 257;

/// RC4 primitive
#[derive(Debug, Clone, Copy, Default)]
pub struct Rc4;

impl Rc4 {
    fn apply_keystream(user: &mut [u8], data: &mut [u8]) -> Result<()> {
        validate::length("RC4 user state", user.len(), RC4_USER_SIZE)?;
        let mut i = user[I_INDEX];
        let mut j = user[J_INDEX];
        for byte in data.iter_mut() {
            i = i.wrapping_add(1);
            j = j.wrapping_add(user[i as usize]);
            user.swap(i as usize, j as usize);
            let k = user[i as usize].wrapping_add(user[j as usize]);
            *byte ^= user[k as usize];
        }
        user[I_INDEX] = i;
        user[J_INDEX] = j;
        Ok(())
    }
}

impl CipherPrimitive for Rc4 {
    fn name(&self) -> &'static str {
        "RC4"
    }

    fn metadata(&self) -> Result<CipherMetadata> {
        Ok(CipherMetadata {
            key_size: RC4_KEY_SIZE,
            block_size: 1,
            buffer_size: RC4_BUFFER_SIZE,
            user_size: RC4_USER_SIZE,
            user_must_be_saved: true,
            kind: CipherKind::STREAM | CipherKind::SYMMETRIC,
        })
    }

    fn check_key(&self, key: &[u8]) -> Result<()> {
        if key.is_empty() {
            return Err(Error::NoKeyMaterial {
                context: "RC4 key setup",
            });
        }
        validate::max_length("RC4 key", key.len(), RC4_KEY_SIZE)
    }

    fn key_setup(&self, user: &mut [u8], key: &[u8]) -> Result<()> {
        validate::length("RC4 user state", user.len(), RC4_USER_SIZE)?;
        self.check_key(key)?;

        for (i, s) in user[..256].iter_mut().enumerate() {
            *s = i as u8;
        }
        let mut j = 0u8;
        for i in 0..256 {
            j = j.wrapping_add(user[i]).wrapping_add(key[i % key.len()]);
            user.swap(i, j as usize);
        }
        user[I_INDEX] = 0;
        user[J_INDEX] = 0;
        Ok(())
    }

    fn encode(&self, user: &mut [u8], data: &mut [u8]) -> Result<()> {
        Self::apply_keystream(user, data)
    }

    fn decode(&self, user: &mut [u8], data: &mut [u8]) -> Result<()> {
        Self::apply_keystream(user, data)
    }
}

#[cfg(test)]
mod tests;
