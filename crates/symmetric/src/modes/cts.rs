//! CTSx (double CBC) and its legacy CTS3 variant
//!
//! Whole blocks: `C = E(P ^ F); F ^= C`. CTSx closes a short tail with
//! CFS8; CTS3 XORs the tail with a single `E(F)`.

use api::Result;
use internal::xor::xor_in_place;

use super::{cfs, Chain, Step};

fn encode_blocks<'d>(chain: &mut Chain<'_>, data: &'d mut [u8]) -> Result<&'d mut [u8]> {
    let n = chain.width();
    let mut blocks = data.chunks_exact_mut(n);
    for block in &mut blocks {
        xor_in_place(block, chain.feedback);
        chain.encrypt(block)?;
        xor_in_place(chain.feedback, block);
    }
    Ok(blocks.into_remainder())
}

fn decode_blocks<'d>(chain: &mut Chain<'_>, data: &'d mut [u8]) -> Result<&'d mut [u8]> {
    let n = chain.width();
    let mut blocks = data.chunks_exact_mut(n);
    for block in &mut blocks {
        chain.buffer.copy_from_slice(block);
        chain.decrypt(block)?;
        xor_in_place(block, chain.feedback);
        xor_in_place(chain.feedback, chain.buffer);
    }
    Ok(blocks.into_remainder())
}

pub(super) fn encode(chain: &mut Chain<'_>, data: &mut [u8]) -> Result<Step> {
    let tail = encode_blocks(chain, data)?;
    if tail.is_empty() {
        return Ok(Step::Continue);
    }
    cfs::encode8(chain, tail)?;
    Ok(Step::Padded)
}

pub(super) fn decode(chain: &mut Chain<'_>, data: &mut [u8]) -> Result<Step> {
    let tail = decode_blocks(chain, data)?;
    if tail.is_empty() {
        return Ok(Step::Continue);
    }
    cfs::decode8(chain, tail)?;
    Ok(Step::Padded)
}

pub(super) fn encode_legacy(chain: &mut Chain<'_>, data: &mut [u8]) -> Result<Step> {
    let tail = encode_blocks(chain, data)?;
    close_legacy(chain, tail)
}

pub(super) fn decode_legacy(chain: &mut Chain<'_>, data: &mut [u8]) -> Result<Step> {
    let tail = decode_blocks(chain, data)?;
    close_legacy(chain, tail)
}

fn close_legacy(chain: &mut Chain<'_>, tail: &mut [u8]) -> Result<Step> {
    if tail.is_empty() {
        return Ok(Step::Continue);
    }
    chain.keystream()?;
    xor_in_place(tail, chain.buffer);
    Ok(Step::Padded)
}
