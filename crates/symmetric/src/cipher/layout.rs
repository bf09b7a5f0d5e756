//! Backing memory of a cipher instance
//!
//! One allocation holds every byte of chaining and key state, in fixed
//! order: vector, feedback, buffer, user, and (when the primitive asks for
//! it) the saved copy of user. Views are computed once from the metadata
//! and never overlap.

use api::{CipherMetadata, Result};
use common::SecretVec;

/// Region sizes derived from [`CipherMetadata`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Layout {
    buffer_size: usize,
    user_size: usize,
    saved: bool,
    total: usize,
}

impl Layout {
    pub(crate) fn new(metadata: &CipherMetadata) -> Result<Self> {
        metadata.validate()?;
        Ok(Self {
            buffer_size: metadata.buffer_size,
            user_size: metadata.user_size,
            saved: metadata.user_must_be_saved,
            total: metadata.arena_size()?,
        })
    }

    pub(crate) fn total(&self) -> usize {
        self.total
    }
}

/// Mutable views into every region at once
pub(crate) struct Regions<'a> {
    pub vector: &'a mut [u8],
    pub feedback: &'a mut [u8],
    pub buffer: &'a mut [u8],
    pub user: &'a mut [u8],
    /// Empty unless the primitive's state is snapshotted
    pub saved: &'a mut [u8],
}

impl Regions<'_> {
    /// Snapshot user state, if the primitive wants one
    pub(crate) fn save_user(&mut self) {
        if !self.saved.is_empty() {
            self.saved.copy_from_slice(self.user);
        }
    }

    /// Restore user state from the snapshot, if there is one
    pub(crate) fn restore_user(&mut self) {
        if !self.saved.is_empty() {
            self.user.copy_from_slice(self.saved);
        }
    }
}

/// Single zeroizing allocation carved into [`Regions`]
pub(crate) struct Arena {
    layout: Layout,
    bytes: SecretVec,
}

impl Arena {
    /// Allocate the arena; exhaustion is reported, never aborted on
    pub(crate) fn allocate(layout: Layout) -> Result<Self> {
        Ok(Self {
            layout,
            bytes: SecretVec::try_zeroed(layout.total())?,
        })
    }

    pub(crate) fn regions(&mut self) -> Regions<'_> {
        let n = self.layout.buffer_size;
        let (vector, rest) = self.bytes.as_mut_slice().split_at_mut(n);
        let (feedback, rest) = rest.split_at_mut(n);
        let (buffer, rest) = rest.split_at_mut(n);
        let (user, saved) = rest.split_at_mut(self.layout.user_size);
        Regions {
            vector,
            feedback,
            buffer,
            user,
            saved,
        }
    }

    pub(crate) fn vector(&self) -> &[u8] {
        &self.bytes.as_slice()[..self.layout.buffer_size]
    }

    pub(crate) fn feedback(&self) -> &[u8] {
        let n = self.layout.buffer_size;
        &self.bytes.as_slice()[n..2 * n]
    }

    pub(crate) fn buffer(&self) -> &[u8] {
        let n = self.layout.buffer_size;
        &self.bytes.as_slice()[2 * n..3 * n]
    }

    /// Overwrite every region with zeros
    pub(crate) fn wipe(&mut self) {
        self.bytes.wipe();
    }

    #[cfg(test)]
    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.bytes.as_slice()
    }

    #[cfg(test)]
    pub(crate) fn user(&self) -> &[u8] {
        let start = 3 * self.layout.buffer_size;
        &self.bytes.as_slice()[start..start + self.layout.user_size]
    }
}
