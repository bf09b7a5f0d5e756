//! Error type definitions for cipher engine operations

use crate::types::{CipherState, Mode};

/// Primary error type for cipher engine operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The backing memory for a cipher instance could not be obtained
    #[error("{context}: allocation of {size} bytes failed")]
    Allocation {
        context: &'static str,
        size: usize,
    },

    /// An empty key was handed to an entry point that requires key material
    #[error("{context}: no key material supplied")]
    NoKeyMaterial {
        context: &'static str,
    },

    /// Key longer than the primitive accepts
    #[error("key too large: at most {max} bytes accepted, got {actual}")]
    KeyTooLarge {
        max: usize,
        actual: usize,
    },

    /// Initialization vector longer than the feedback register
    #[error("initialization vector too large: at most {max} bytes accepted, got {actual}")]
    IvTooLarge {
        max: usize,
        actual: usize,
    },

    /// Operation not permitted in the current lifecycle state
    #[error("{operation} is not permitted while the cipher is {state}")]
    InvalidState {
        operation: &'static str,
        state: CipherState,
    },

    /// The session already consumed a padded final block
    #[error("{operation} after the final padded block requires a new init")]
    AlreadyPadded {
        operation: &'static str,
    },

    /// MAC requested in a mode without a meaningful chaining tag
    #[error("no MAC is available in {mode} mode")]
    InvalidMacMode {
        mode: Mode,
    },

    /// Registry lookup miss
    #[error("cipher type not registered: {lookup}")]
    UnregisteredType {
        lookup: String,
    },

    /// Registry already holds the name or identity
    #[error("cipher {name} (identity {identity:#010x}) conflicts with an existing registration")]
    DuplicateRegistration {
        name: &'static str,
        identity: u32,
    },

    /// Capability queried on a type that never supplied it
    #[error("{type_name} does not supply {method}")]
    AbstractCall {
        type_name: &'static str,
        method: &'static str,
    },

    /// Message cannot be processed in the given mode at this length
    #[error("{mode}: message length {actual} is not a multiple of {block_size}")]
    InvalidMessageLength {
        mode: Mode,
        block_size: usize,
        actual: usize,
    },

    /// Invalid length error with context
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    #[error("{context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// Formatter or text conversion failure
    #[error("format error in {context}: {message}")]
    Format {
        context: &'static str,
        message: String,
    },
}

/// Result type for cipher engine operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create an InvalidParameter error
    pub fn param(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            context,
            message: message.into(),
        }
    }

    /// Shorthand to create a Format error
    pub fn format(context: &'static str, message: impl Into<String>) -> Self {
        Self::Format {
            context,
            message: message.into(),
        }
    }

    /// Whether the instance that produced this error is beyond recovery.
    ///
    /// Only allocation failures are fatal; everything else is cured by a
    /// fresh `init`.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Allocation { .. })
    }
}
