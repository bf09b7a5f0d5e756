//! Cipher feedback, byte-wise (CFB8) and register-wide (CFBx)

use api::Result;

use super::Chain;

pub(crate) fn encode8(chain: &mut Chain<'_>, data: &mut [u8]) -> Result<()> {
    for byte in data.iter_mut() {
        chain.keystream()?;
        *byte ^= chain.buffer[0];
        chain.shift_in(*byte);
    }
    Ok(())
}

pub(crate) fn decode8(chain: &mut Chain<'_>, data: &mut [u8]) -> Result<()> {
    for byte in data.iter_mut() {
        chain.keystream()?;
        let cipher = *byte;
        *byte ^= chain.buffer[0];
        chain.shift_in(cipher);
    }
    Ok(())
}

/// `C = P ^ E(F); F = C`, resumable mid-register
pub(super) fn encode(chain: &mut Chain<'_>, data: &mut [u8]) -> Result<()> {
    for byte in data.iter_mut() {
        if *chain.index == 0 {
            chain.keystream()?;
        }
        let idx = *chain.index;
        *byte ^= chain.buffer[idx];
        chain.feedback[idx] = *byte;
        chain.advance();
    }
    Ok(())
}

pub(super) fn decode(chain: &mut Chain<'_>, data: &mut [u8]) -> Result<()> {
    for byte in data.iter_mut() {
        if *chain.index == 0 {
            chain.keystream()?;
        }
        let idx = *chain.index;
        chain.feedback[idx] = *byte;
        *byte ^= chain.buffer[idx];
        chain.advance();
    }
    Ok(())
}
