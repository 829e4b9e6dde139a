//! The arena allocator and its read/write split view.

use crate::config::ArenaConfig;
use crate::error::ArenaError;
use crate::handle::Handle;

/// A contiguous, growable memory region with bump allocation.
///
/// The backing buffer starts at `initial_words` and doubles (relocating its
/// contents) until an allocation fits or the `max_words` ceiling is hit.
/// Handles carry only offsets, so relocation never invalidates them — only
/// materialized slices go stale, and those cannot outlive their borrow of
/// the arena.
pub struct Arena {
    /// Backing storage. Always fully sized to the current capacity.
    data: Vec<u64>,
    /// Bump pointer: next free word.
    cursor: usize,
    /// Capacity ceiling in words.
    max_words: usize,
}

impl Arena {
    /// Create a new arena from a validated config.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if `initial_words` is zero or exceeds `max_words`.
    pub fn new(config: ArenaConfig) -> Result<Self, ArenaError> {
        if config.initial_words == 0 {
            return Err(ArenaError::InvalidConfig {
                reason: "initial_words must be at least 1",
            });
        }
        if config.initial_words > config.max_words {
            return Err(ArenaError::InvalidConfig {
                reason: "initial_words exceeds max_words",
            });
        }
        Ok(Self {
            data: vec![0; config.initial_words],
            cursor: 0,
            max_words: config.max_words,
        })
    }

    /// Create an arena with the default config.
    ///
    /// Default sizes always validate, so this cannot fail.
    pub fn with_defaults() -> Self {
        Self::new(ArenaConfig::default()).expect("default config is valid")
    }

    /// Bump-allocate `len` words, zero-initialized.
    ///
    /// Grows the backing buffer geometrically if needed, relocating existing
    /// contents. Previously issued handles remain valid; previously
    /// materialized slices do not exist past their borrow, so no stale
    /// address can survive the relocation.
    ///
    /// # Errors
    ///
    /// `OutOfMemory` if the request cannot be satisfied within the ceiling;
    /// `AllocationTooLarge` if `len` or the resulting offset overflows the
    /// handle's `u32` range.
    pub fn alloc(&mut self, len: usize) -> Result<Handle, ArenaError> {
        if len > u32::MAX as usize || self.cursor > (u32::MAX as usize).saturating_sub(len) {
            return Err(ArenaError::AllocationTooLarge { requested: len });
        }

        let needed = self.cursor + len;
        if needed > self.data.len() {
            self.grow_to(needed)?;
        }

        let offset = self.cursor as u32;
        // Zero the region: it may contain words from before a reset().
        self.data[self.cursor..needed].fill(0);
        self.cursor = needed;
        Ok(Handle::new(offset, len as u32))
    }

    /// Double the capacity until at least `needed` words fit.
    fn grow_to(&mut self, needed: usize) -> Result<(), ArenaError> {
        if needed > self.max_words {
            return Err(ArenaError::OutOfMemory {
                requested: needed - self.cursor,
                capacity: self.max_words,
            });
        }
        let mut new_cap = self.data.len().max(1);
        while new_cap < needed {
            new_cap = (new_cap * 2).min(self.max_words);
        }
        // Vec::resize relocates; offsets (and therefore handles) survive.
        self.data.resize(new_cap, 0);
        Ok(())
    }

    /// Resolve a handle to a shared word slice.
    ///
    /// Call this fresh at each point of use — never store the slice across
    /// an operation that might allocate.
    ///
    /// # Panics
    ///
    /// Panics if the handle does not lie within the allocated region
    /// (stale after `reset()`, or from another arena).
    pub fn words(&self, handle: Handle) -> &[u64] {
        assert!(
            handle.end() <= self.cursor,
            "stale or foreign handle: {handle} beyond cursor {}",
            self.cursor
        );
        &self.data[handle.offset()..handle.end()]
    }

    /// Resolve a handle to an exclusive word slice.
    ///
    /// # Panics
    ///
    /// Panics if the handle does not lie within the allocated region.
    pub fn words_mut(&mut self, handle: Handle) -> &mut [u64] {
        assert!(
            handle.end() <= self.cursor,
            "stale or foreign handle: {handle} beyond cursor {}",
            self.cursor
        );
        &mut self.data[handle.offset()..handle.end()]
    }

    /// Split the arena into a shared reader for everything outside `handle`
    /// and an exclusive slice for `handle` itself.
    ///
    /// This is how a kernel writes one output array while reading several
    /// input arrays from the same arena, race-free and without `unsafe`.
    /// Allocation is impossible while the split is alive (both views borrow
    /// the arena), which is exactly the "no growth inside the parallel
    /// region" rule.
    ///
    /// # Panics
    ///
    /// Panics if the handle does not lie within the allocated region.
    pub fn split_mut(&mut self, handle: Handle) -> (ArenaReader<'_>, &mut [u64]) {
        let start = handle.offset();
        let end = handle.end();
        assert!(
            end <= self.cursor,
            "stale or foreign handle: {handle} beyond cursor {}",
            self.cursor
        );
        let cursor = self.cursor;
        let (lo, rest) = self.data.split_at_mut(start);
        let (mid, hi) = rest.split_at_mut(end - start);
        let reader = ArenaReader {
            lo: &*lo,
            hi: &hi[..cursor - end],
            split_start: start,
            split_end: end,
        };
        (reader, mid)
    }

    /// Invalidate every previously issued handle and start allocating from
    /// the beginning again.
    ///
    /// Only safe between independent phases where no stale handle is still
    /// referenced. The backing memory is retained; regions are re-zeroed by
    /// the next `alloc()`.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Words currently allocated.
    pub fn used(&self) -> usize {
        self.cursor
    }

    /// Current capacity of the backing buffer in words.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Memory usage of the backing buffer in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.data.len() * std::mem::size_of::<u64>()
    }
}

/// Shared view of the arena with one region carved out for writing.
///
/// Produced by [`Arena::split_mut`]. Resolves read handles that do not
/// overlap the write region. `Sync`, so worker threads may resolve input
/// handles concurrently while the write slice is chunked among them.
pub struct ArenaReader<'a> {
    lo: &'a [u64],
    hi: &'a [u64],
    split_start: usize,
    split_end: usize,
}

impl ArenaReader<'_> {
    /// Resolve a read handle to a shared word slice.
    ///
    /// # Panics
    ///
    /// Panics if the handle overlaps the write region or lies outside the
    /// allocated area.
    pub fn words(&self, handle: Handle) -> &[u64] {
        let start = handle.offset();
        let end = handle.end();
        if end <= self.split_start {
            &self.lo[start..end]
        } else if start >= self.split_end {
            &self.hi[start - self.split_end..end - self.split_end]
        } else {
            panic!("handle {handle} overlaps the write region");
        }
    }
}
