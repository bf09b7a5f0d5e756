//! CBCx: cipher block chaining with a CFB8 tail

use api::Result;
use internal::xor::xor_in_place;

use super::{cfb, Chain, Step};

/// `C = E(P ^ F); F = C`
pub(super) fn encode(chain: &mut Chain<'_>, data: &mut [u8]) -> Result<Step> {
    let n = chain.width();
    let mut blocks = data.chunks_exact_mut(n);
    for block in &mut blocks {
        xor_in_place(block, chain.feedback);
        chain.encrypt(block)?;
        chain.feedback.copy_from_slice(block);
    }
    let tail = blocks.into_remainder();
    if tail.is_empty() {
        return Ok(Step::Continue);
    }
    cfb::encode8(chain, tail)?;
    Ok(Step::Padded)
}

/// `P = D(C) ^ F; F = C`
pub(super) fn decode(chain: &mut Chain<'_>, data: &mut [u8]) -> Result<Step> {
    let n = chain.width();
    let mut blocks = data.chunks_exact_mut(n);
    for block in &mut blocks {
        chain.buffer.copy_from_slice(block);
        chain.decrypt(block)?;
        xor_in_place(block, chain.feedback);
        chain.feedback.copy_from_slice(chain.buffer);
    }
    let tail = blocks.into_remainder();
    if tail.is_empty() {
        return Ok(Step::Continue);
    }
    cfb::decode8(chain, tail)?;
    Ok(Step::Padded)
}
