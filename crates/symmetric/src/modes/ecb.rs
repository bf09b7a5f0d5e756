//! Electronic code book; no chaining and no MAC

use api::Result;

use super::Chain;

pub(super) fn encode(chain: &mut Chain<'_>, data: &mut [u8]) -> Result<()> {
    if chain.block_size == 1 {
        return chain.encrypt(data);
    }
    let n = chain.width();
    for block in data.chunks_mut(n) {
        chain.encrypt(block)?;
    }
    Ok(())
}

pub(super) fn decode(chain: &mut Chain<'_>, data: &mut [u8]) -> Result<()> {
    if chain.block_size == 1 {
        return chain.decrypt(data);
    }
    let n = chain.width();
    for block in data.chunks_mut(n) {
        chain.decrypt(block)?;
    }
    Ok(())
}
