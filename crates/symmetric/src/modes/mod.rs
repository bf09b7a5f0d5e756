//! Chaining modes
//!
//! Every mode works on a [`Chain`]: the primitive plus borrowed views of
//! the feedback register, the scratch buffer, the primitive's user state
//! and the partial-block index. `n` below is the feedback width
//! (`buffer_size`), which is always a multiple of the primitive's block
//! size.

use api::{CipherPrimitive, Mode, Result};

mod cbc;
mod cfb;
mod cfs;
mod cts;
mod ecb;
mod ofb;

/// How a transform left the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    /// More input may follow
    Continue,
    /// A short final block was consumed; the session is closed
    Padded,
}

/// Chaining context for one transform call
pub(crate) struct Chain<'a> {
    pub primitive: &'a dyn CipherPrimitive,
    pub feedback: &'a mut [u8],
    pub buffer: &'a mut [u8],
    pub user: &'a mut [u8],
    pub index: &'a mut usize,
    pub block_size: usize,
}

impl Chain<'_> {
    fn width(&self) -> usize {
        self.feedback.len()
    }

    fn encrypt(&mut self, block: &mut [u8]) -> Result<()> {
        self.primitive.encode(self.user, block)
    }

    fn decrypt(&mut self, block: &mut [u8]) -> Result<()> {
        self.primitive.decode(self.user, block)
    }

    /// `B = E(F)`
    fn keystream(&mut self) -> Result<()> {
        self.buffer.copy_from_slice(self.feedback);
        self.primitive.encode(self.user, self.buffer)
    }

    /// Shift the register left one byte and append `byte`
    fn shift_in(&mut self, byte: u8) {
        let n = self.width();
        self.feedback.copy_within(1.., 0);
        self.feedback[n - 1] = byte;
    }

    /// Advance the partial-block index, wrapping at the register width
    fn advance(&mut self) {
        *self.index += 1;
        if *self.index == self.width() {
            *self.index = 0;
        }
    }
}

/// Encrypt `data` in place under `mode`
pub(crate) fn encode(mode: Mode, chain: &mut Chain<'_>, data: &mut [u8]) -> Result<Step> {
    let step = match mode {
        Mode::Ctsx => cts::encode(chain, data),
        Mode::Cts3 => cts::encode_legacy(chain, data),
        Mode::Cbcx => cbc::encode(chain, data),
        Mode::Cfb8 => cfb::encode8(chain, data).map(|()| Step::Continue),
        Mode::Cfbx => cfb::encode(chain, data).map(|()| Step::Continue),
        Mode::Ofb8 => ofb::apply8(chain, data).map(|()| Step::Continue),
        Mode::Ofbx => ofb::apply(chain, data).map(|()| Step::Continue),
        Mode::Cfs8 => cfs::encode8(chain, data).map(|()| Step::Continue),
        Mode::Cfsx => cfs::encode(chain, data).map(|()| Step::Continue),
        Mode::Ecbx => ecb::encode(chain, data).map(|()| Step::Continue),
    }?;
    Ok(terminal(mode, step))
}

/// Decrypt `data` in place under `mode`
pub(crate) fn decode(mode: Mode, chain: &mut Chain<'_>, data: &mut [u8]) -> Result<Step> {
    let step = match mode {
        Mode::Ctsx => cts::decode(chain, data),
        Mode::Cts3 => cts::decode_legacy(chain, data),
        Mode::Cbcx => cbc::decode(chain, data),
        Mode::Cfb8 => cfb::decode8(chain, data).map(|()| Step::Continue),
        Mode::Cfbx => cfb::decode(chain, data).map(|()| Step::Continue),
        Mode::Ofb8 => ofb::apply8(chain, data).map(|()| Step::Continue),
        Mode::Ofbx => ofb::apply(chain, data).map(|()| Step::Continue),
        Mode::Cfs8 => cfs::decode8(chain, data).map(|()| Step::Continue),
        Mode::Cfsx => cfs::decode(chain, data).map(|()| Step::Continue),
        Mode::Ecbx => ecb::decode(chain, data).map(|()| Step::Continue),
    }?;
    Ok(terminal(mode, step))
}

/// Only the block-chaining modes can close a session on a short tail
fn terminal(mode: Mode, step: Step) -> Step {
    debug_assert!(step == Step::Continue || mode.pads_final_block(), "{mode} padded");
    step
}

/// Reject input the mode cannot process, before anything is touched
pub(crate) fn check_length(mode: Mode, block_size: usize, len: usize) -> Result<()> {
    if mode == Mode::Ecbx && block_size > 1 && len % block_size != 0 {
        return Err(api::Error::InvalidMessageLength {
            mode,
            block_size,
            actual: len,
        });
    }
    Ok(())
}
