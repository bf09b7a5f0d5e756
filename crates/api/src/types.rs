//! Core data-model types for the modecrypt library
//!
//! These types describe a cipher primitive statically ([`CipherMetadata`],
//! [`CipherKind`]) and the runtime condition of a cipher instance
//! ([`Mode`], [`CipherState`]).

use core::fmt;
use core::ops::BitOr;

use crate::error::{validate, Error, Result};

/// Chaining mode of a cipher instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// Double CBC, final partial block padded with 8-bit CFS
    #[default]
    Ctsx,
    /// CBC, final partial block padded with 8-bit CFB
    Cbcx,
    /// 8-bit cipher feedback
    Cfb8,
    /// Block-sized cipher feedback
    Cfbx,
    /// 8-bit output feedback
    Ofb8,
    /// Block-sized output feedback
    Ofbx,
    /// 8-bit cipher feedback with XOR-accumulated shift register
    Cfs8,
    /// Block-sized cipher feedback with XOR-accumulated register
    Cfsx,
    /// Electronic code book
    Ecbx,
    /// Double CBC with the legacy one-shot padding of a truncated final block
    Cts3,
}

impl Mode {
    /// Every supported mode, legacy variant last
    pub const ALL: [Mode; 10] = [
        Mode::Ctsx,
        Mode::Cbcx,
        Mode::Cfb8,
        Mode::Cfbx,
        Mode::Ofb8,
        Mode::Ofbx,
        Mode::Cfs8,
        Mode::Cfsx,
        Mode::Ecbx,
        Mode::Cts3,
    ];

    /// Short mode name as used in logs and error messages
    pub fn name(self) -> &'static str {
        match self {
            Mode::Ctsx => "CTSx",
            Mode::Cbcx => "CBCx",
            Mode::Cfb8 => "CFB8",
            Mode::Cfbx => "CFBx",
            Mode::Ofb8 => "OFB8",
            Mode::Ofbx => "OFBx",
            Mode::Cfs8 => "CFS8",
            Mode::Cfsx => "CFSx",
            Mode::Ecbx => "ECBx",
            Mode::Cts3 => "CTS3",
        }
    }

    /// Whether the final feedback state can serve as a MAC
    pub fn has_mac(self) -> bool {
        !matches!(self, Mode::Ecbx)
    }

    /// Whether a trailing partial block terminates the session
    pub fn pads_final_block(self) -> bool {
        matches!(self, Mode::Ctsx | Mode::Cbcx | Mode::Cts3)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lifecycle state of a cipher instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CipherState {
    /// Freshly constructed or protected; no key material present
    New,
    /// Key and IV installed, no data processed yet
    Initialized,
    /// At least one encode call since init or done
    Encoding,
    /// At least one decode call since init or done
    Decoding,
    /// A final partial block was consumed; only init may follow
    Padded,
    /// Finalized; the buffer holds the encrypted final feedback
    Done,
}

impl CipherState {
    /// Lower-case state name
    pub fn name(self) -> &'static str {
        match self {
            CipherState::New => "new",
            CipherState::Initialized => "initialized",
            CipherState::Encoding => "encoding",
            CipherState::Decoding => "decoding",
            CipherState::Padded => "padded",
            CipherState::Done => "done",
        }
    }
}

impl fmt::Display for CipherState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classification flags of a cipher primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CipherKind(u8);

impl CipherKind {
    pub const STREAM: CipherKind = CipherKind(0b0001);
    pub const BLOCK: CipherKind = CipherKind(0b0010);
    pub const SYMMETRIC: CipherKind = CipherKind(0b0100);
    pub const ASYMMETRIC: CipherKind = CipherKind(0b1000);

    /// Raw flag bits
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether every flag in `other` is set
    pub const fn contains(self, other: CipherKind) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for CipherKind {
    type Output = CipherKind;

    fn bitor(self, rhs: CipherKind) -> CipherKind {
        CipherKind(self.0 | rhs.0)
    }
}

/// Static sizing and classification of a cipher primitive
///
/// The engine derives the layout of an instance's single backing
/// allocation from these values; they never change after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CipherMetadata {
    /// Maximum key length in bytes; zero means unbounded
    pub key_size: usize,
    /// Natural transform granularity, 1 for stream ciphers
    pub block_size: usize,
    /// Size of the vector, feedback and buffer regions
    pub buffer_size: usize,
    /// Size of the primitive's private working state
    pub user_size: usize,
    /// Whether the private state is snapshotted after key setup
    pub user_must_be_saved: bool,
    /// Classification flags
    pub kind: CipherKind,
}

impl CipherMetadata {
    /// Check internal consistency of the sizes
    pub fn validate(&self) -> Result<()> {
        validate::parameter(
            self.block_size >= 1,
            "cipher metadata",
            "block size must be at least 1",
        )?;
        validate::parameter(
            self.buffer_size >= self.block_size,
            "cipher metadata",
            "buffer size must not be smaller than the block size",
        )?;
        validate::parameter(
            self.buffer_size % self.block_size == 0,
            "cipher metadata",
            "buffer size must be a whole number of blocks",
        )
    }

    /// Whether keys of any length are accepted
    pub fn unbounded_key(&self) -> bool {
        self.key_size == 0
    }

    /// Total bytes of the backing allocation:
    /// `3 * buffer_size + user_size (+ user_size when saved)`
    pub fn arena_size(&self) -> Result<usize> {
        let saved = if self.user_must_be_saved { self.user_size } else { 0 };
        self.buffer_size
            .checked_mul(3)
            .and_then(|n| n.checked_add(self.user_size))
            .and_then(|n| n.checked_add(saved))
            .ok_or(Error::Allocation {
                context: "cipher arena size",
                size: usize::MAX,
            })
    }
}
