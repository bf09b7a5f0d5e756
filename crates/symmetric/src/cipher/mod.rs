//! Mode-aware cipher instance
//!
//! A [`Cipher`] wraps any [`CipherPrimitive`] and supplies everything the
//! primitive itself does not: the arena holding vector, feedback, buffer and
//! user state, the init protocol, chaining, finalization and erasure.
//!
//! ```
//! use modecrypt_symmetric::{Aes, Cipher, Mode};
//!
//! let mut enc = Cipher::with_mode(Box::new(Aes), Mode::Cbcx)?;
//! enc.init_key(b"secret key")?;
//! let sealed = enc.encode(b"thirty-two bytes of sample text!")?;
//! let tag = enc.calc_mac(None)?;
//!
//! let mut dec = Cipher::with_mode(Box::new(Aes), Mode::Cbcx)?;
//! dec.init_key(b"secret key")?;
//! assert_eq!(dec.decode(&sealed)?, b"thirty-two bytes of sample text!");
//! assert!(dec.verify_mac(&tag)?);
//! # Ok::<(), modecrypt_symmetric::Error>(())
//! ```

mod layout;
mod state;

use core::fmt;

use api::{
    format_decode, format_encode, CipherMetadata, CipherPrimitive, CipherState, Error, Format,
    Mode, Result,
};
use common::SecretVec;
use internal::constant_time::ct_eq;
use params::DEFAULT_FILLER;
use tracing::{debug, trace};

use crate::modes::{self, Chain};
use layout::{Arena, Layout};
use state::Direction;

/// Stateful encryption/decryption object over a primitive
pub struct Cipher {
    primitive: Box<dyn CipherPrimitive>,
    metadata: CipherMetadata,
    arena: Arena,
    mode: Mode,
    state: CipherState,
    buffer_index: usize,
}

impl Cipher {
    /// Create an instance in the default mode (CTSx)
    pub fn new(primitive: Box<dyn CipherPrimitive>) -> Result<Self> {
        Self::with_mode(primitive, Mode::default())
    }

    /// Create an instance in `mode`
    ///
    /// Fails with [`Error::AbstractCall`] when the primitive supplies no
    /// metadata and with [`Error::Allocation`] when the arena cannot be
    /// obtained.
    pub fn with_mode(primitive: Box<dyn CipherPrimitive>, mode: Mode) -> Result<Self> {
        let metadata = primitive.metadata()?;
        let layout = Layout::new(&metadata)?;
        let arena = Arena::allocate(layout)?;

        let mut cipher = Self {
            primitive,
            metadata,
            arena,
            mode,
            state: CipherState::New,
            buffer_index: 0,
        };
        cipher.protect();
        debug!(
            cipher = cipher.name(),
            mode = %mode,
            arena = layout.total(),
            "cipher instance created"
        );
        Ok(cipher)
    }

    /// Key the instance and seed the feedback register
    ///
    /// An empty `iv` asks for a key-dependent vector: the `filler`-filled
    /// register is encrypted once with the fresh key. A short `iv` is
    /// padded with `filler`. Size checks and the primitive's key screen run
    /// before anything is touched, so a rejected call leaves the current
    /// session intact.
    pub fn init(&mut self, key: &[u8], iv: &[u8], filler: u8) -> Result<()> {
        if !self.metadata.unbounded_key() && key.len() > self.metadata.key_size {
            return Err(Error::KeyTooLarge {
                max: self.metadata.key_size,
                actual: key.len(),
            });
        }
        if iv.len() > self.metadata.buffer_size {
            return Err(Error::IvTooLarge {
                max: self.metadata.buffer_size,
                actual: iv.len(),
            });
        }
        self.primitive.check_key(key)?;

        self.protect();
        let seeded = self.seed(key, iv, filler);
        self.wipe_on_error(seeded)?;
        self.state = CipherState::Initialized;

        debug!(
            cipher = self.name(),
            mode = %self.mode,
            derived_iv = iv.is_empty(),
            "cipher initialized"
        );
        Ok(())
    }

    /// [`init`](Self::init) with a self-derived vector and the default filler
    pub fn init_key(&mut self, key: &[u8]) -> Result<()> {
        self.init(key, &[], DEFAULT_FILLER)
    }

    /// [`init`](Self::init) from secret containers; an empty key is refused
    pub fn init_secret(&mut self, key: &SecretVec, iv: Option<&SecretVec>) -> Result<()> {
        if key.is_empty() {
            return Err(Error::NoKeyMaterial {
                context: "Cipher::init_secret",
            });
        }
        let iv = iv.map_or(&[][..], SecretVec::as_slice);
        self.init(key.as_slice(), iv, DEFAULT_FILLER)
    }

    fn seed(&mut self, key: &[u8], iv: &[u8], filler: u8) -> Result<()> {
        let primitive = self.primitive.as_ref();
        let mut regions = self.arena.regions();

        primitive.key_setup(regions.user, key)?;
        regions.save_user();
        regions.vector.fill(filler);
        if iv.is_empty() {
            primitive.encode(regions.user, regions.vector)?;
            regions.restore_user();
        } else {
            regions.vector[..iv.len()].copy_from_slice(iv);
        }
        regions.feedback.copy_from_slice(regions.vector);
        Ok(())
    }

    /// Encrypt `data` in place, chaining from the previous call
    pub fn encode_in_place(&mut self, data: &mut [u8]) -> Result<()> {
        self.transform(Direction::Encode, data)
    }

    /// Decrypt `data` in place, chaining from the previous call
    pub fn decode_in_place(&mut self, data: &mut [u8]) -> Result<()> {
        self.transform(Direction::Decode, data)
    }

    /// Encrypt into a new vector
    pub fn encode(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        let mut out = data.to_vec();
        self.encode_in_place(&mut out)?;
        Ok(out)
    }

    /// Decrypt into a new vector
    pub fn decode(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        let mut out = data.to_vec();
        self.decode_in_place(&mut out)?;
        Ok(out)
    }

    /// Encrypt, then pass the ciphertext through `format`
    pub fn encode_bytes(&mut self, source: &[u8], format: Option<&dyn Format>) -> Result<Vec<u8>> {
        if source.is_empty() {
            return Ok(Vec::new());
        }
        let raw = self.encode(source)?;
        format_encode(format, raw)
    }

    /// Undo `format`, then decrypt
    pub fn decode_bytes(&mut self, source: &[u8], format: Option<&dyn Format>) -> Result<Vec<u8>> {
        if source.is_empty() {
            return Ok(Vec::new());
        }
        let mut raw = format_decode(format, source)?;
        self.decode_in_place(&mut raw)?;
        Ok(raw)
    }

    fn transform(&mut self, direction: Direction, data: &mut [u8]) -> Result<()> {
        if data.is_empty() {
            return Ok(());
        }
        state::check_transform(self.state, direction)?;
        modes::check_length(self.mode, self.metadata.block_size, data.len())?;

        let outcome = {
            let regions = self.arena.regions();
            let mut chain = Chain {
                primitive: self.primitive.as_ref(),
                feedback: regions.feedback,
                buffer: regions.buffer,
                user: regions.user,
                index: &mut self.buffer_index,
                block_size: self.metadata.block_size,
            };
            match direction {
                Direction::Encode => modes::encode(self.mode, &mut chain, data),
                Direction::Decode => modes::decode(self.mode, &mut chain, data),
            }
        };
        let step = self.wipe_on_error(outcome)?;
        self.state = state::after_transform(direction, step);

        trace!(
            cipher = self.name(),
            operation = direction.operation(),
            bytes = data.len(),
            state = %self.state,
            "transform applied"
        );
        Ok(())
    }

    /// Close the session and leave the tag in the buffer
    ///
    /// The encrypted feedback register becomes the buffer, the register
    /// returns to the initial vector and saved user state is restored, so
    /// the instance can start over without a new [`init`](Self::init).
    pub fn done(&mut self) -> Result<()> {
        match self.state {
            CipherState::Done => return Ok(()),
            CipherState::New => {
                return Err(Error::InvalidState {
                    operation: "done",
                    state: CipherState::New,
                })
            }
            _ => {}
        }

        self.buffer_index = 0;
        let finalized = {
            let primitive = self.primitive.as_ref();
            let mut regions = self.arena.regions();
            regions.buffer.copy_from_slice(regions.feedback);
            let sealed = primitive.encode(regions.user, regions.buffer);
            regions.feedback.copy_from_slice(regions.vector);
            regions.restore_user();
            sealed
        };
        self.wipe_on_error(finalized)?;
        self.state = CipherState::Done;

        debug!(cipher = self.name(), mode = %self.mode, "cipher session finalized");
        Ok(())
    }

    /// Wipe all key and chaining state and return to `New`
    pub fn protect(&mut self) {
        self.arena.wipe();
        self.state = CipherState::New;
        self.buffer_index = 0;
        trace!(cipher = self.name(), "cipher state wiped");
    }

    /// Finalize and return the tag, optionally formatted
    ///
    /// ECB has no chaining tag; an open ECB session is still finalized
    /// before the request is refused.
    pub fn calc_mac(&mut self, format: Option<&dyn Format>) -> Result<Vec<u8>> {
        if self.state != CipherState::New {
            self.done()?;
        }
        if !self.mode.has_mac() {
            return Err(Error::InvalidMacMode { mode: self.mode });
        }
        self.done()?;
        format_encode(format, self.arena.buffer().to_vec())
    }

    /// Finalize and compare the tag with `expected` in constant time
    pub fn verify_mac(&mut self, expected: &[u8]) -> Result<bool> {
        let tag = self.calc_mac(None)?;
        Ok(ct_eq(&tag, expected))
    }

    /// Switch the chaining mode, finalizing an open session first
    pub fn set_mode(&mut self, mode: Mode) -> Result<()> {
        if mode == self.mode {
            return Ok(());
        }
        if state::is_mid_stream(self.state) {
            debug!(
                cipher = self.name(),
                from = %self.mode,
                to = %mode,
                "mode switch finalizes open session"
            );
            self.done()?;
        }
        self.mode = mode;
        Ok(())
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn state(&self) -> CipherState {
        self.state
    }

    /// Width of the vector, feedback and buffer registers
    pub fn init_vector_size(&self) -> usize {
        self.metadata.buffer_size
    }

    pub fn metadata(&self) -> &CipherMetadata {
        &self.metadata
    }

    pub fn name(&self) -> &'static str {
        self.primitive.name()
    }

    /// Vector the current session started from
    pub fn init_vector(&self) -> &[u8] {
        self.arena.vector()
    }

    /// Current chaining register
    pub fn feedback(&self) -> &[u8] {
        self.arena.feedback()
    }

    /// Scratch register; holds the tag after [`done`](Self::done)
    pub fn buffer(&self) -> &[u8] {
        self.arena.buffer()
    }

    fn wipe_on_error<T>(&mut self, result: Result<T>) -> Result<T> {
        if result.is_err() {
            self.protect();
        }
        result
    }
}

impl Drop for Cipher {
    fn drop(&mut self) {
        self.protect();
    }
}

impl fmt::Debug for Cipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cipher")
            .field("primitive", &self.name())
            .field("mode", &self.mode)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
