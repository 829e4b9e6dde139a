//! Relocation-safe arena handles.
//!
//! A [`Handle`] encodes the physical location of an allocation within the
//! arena's backing buffer as (word offset, word length). It stays valid
//! across buffer relocation because it carries no address; it is resolved
//! to a slice in O(1) at each point of use.

use std::fmt;

/// Location of one allocation within an [`Arena`](crate::Arena).
///
/// A handle is meaningless without its owning arena and is invalidated by
/// [`Arena::reset`](crate::Arena::reset). Resolving a handle after a reset,
/// or against a different arena, is a caller bug and panics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct Handle {
    /// Word offset into the arena's backing buffer.
    pub(crate) offset: u32,
    /// Length of the allocation in 8-byte words.
    pub(crate) len: u32,
}

impl Handle {
    /// Create a new handle.
    pub(crate) fn new(offset: u32, len: u32) -> Self {
        Self { offset, len }
    }

    /// Length of the allocation in words.
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Whether this is a zero-length allocation.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Word offset of the allocation within the arena.
    pub fn offset(&self) -> usize {
        self.offset as usize
    }

    /// One-past-the-end word offset.
    pub(crate) fn end(&self) -> usize {
        self.offset as usize + self.len as usize
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handle(off={}, len={})", self.offset, self.len)
    }
}
