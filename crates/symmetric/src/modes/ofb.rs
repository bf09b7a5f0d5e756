//! Output feedback; encryption and decryption coincide

use api::Result;

use super::Chain;

pub(super) fn apply8(chain: &mut Chain<'_>, data: &mut [u8]) -> Result<()> {
    for byte in data.iter_mut() {
        chain.keystream()?;
        let key = chain.buffer[0];
        chain.shift_in(key);
        *byte ^= key;
    }
    Ok(())
}

/// `F = E(F)` once per register, output `x ^ F`
pub(super) fn apply(chain: &mut Chain<'_>, data: &mut [u8]) -> Result<()> {
    for byte in data.iter_mut() {
        if *chain.index == 0 {
            chain.primitive.encode(chain.user, chain.feedback)?;
        }
        *byte ^= chain.feedback[*chain.index];
        chain.advance();
    }
    Ok(())
}
