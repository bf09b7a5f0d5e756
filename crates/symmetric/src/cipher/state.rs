//! Lifecycle rules of a cipher instance
//!
//! `New -> Initialized -> {Encoding | Decoding} -> {Padded | Done}`. Init is
//! legal from anywhere, protect forces `New`, and encode and decode are
//! mutually exclusive between init (or done) and the next done.

use api::{CipherState, Error, Result};

use crate::modes::Step;

/// Direction of a transform call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Encode,
    Decode,
}

impl Direction {
    pub(crate) fn operation(self) -> &'static str {
        match self {
            Direction::Encode => "encode",
            Direction::Decode => "decode",
        }
    }

    fn active_state(self) -> CipherState {
        match self {
            Direction::Encode => CipherState::Encoding,
            Direction::Decode => CipherState::Decoding,
        }
    }
}

/// Reject a transform the current state does not admit
pub(crate) fn check_transform(state: CipherState, direction: Direction) -> Result<()> {
    match state {
        CipherState::Initialized | CipherState::Done => Ok(()),
        CipherState::Padded => Err(Error::AlreadyPadded {
            operation: direction.operation(),
        }),
        current if current == direction.active_state() => Ok(()),
        current => Err(Error::InvalidState {
            operation: direction.operation(),
            state: current,
        }),
    }
}

/// State after a successful transform
pub(crate) fn after_transform(direction: Direction, step: Step) -> CipherState {
    match step {
        Step::Continue => direction.active_state(),
        Step::Padded => CipherState::Padded,
    }
}

/// Whether a session is open and must be finalized before the mode changes
pub(crate) fn is_mid_stream(state: CipherState) -> bool {
    matches!(
        state,
        CipherState::Encoding | CipherState::Decoding | CipherState::Padded
    )
}
