//! Arena configuration parameters.

/// Configuration for the arena allocator.
///
/// Sizes are in 8-byte words. Validated at construction; immutable after.
#[derive(Clone, Debug)]
pub struct ArenaConfig {
    /// Initial capacity of the backing buffer in words.
    ///
    /// Default: 65_536 (512KB). Growth is geometric (doubling) from here.
    pub initial_words: usize,

    /// Hard capacity ceiling in words.
    ///
    /// Default: 268_435_456 (2GB at 8 bytes per word). An allocation that
    /// cannot be satisfied within this bound fails with
    /// [`ArenaError::OutOfMemory`](crate::ArenaError::OutOfMemory).
    pub max_words: usize,
}

impl ArenaConfig {
    /// Default initial capacity: 64K words (512KB).
    pub const DEFAULT_INITIAL_WORDS: usize = 65_536;

    /// Default capacity ceiling: 256M words (2GB).
    pub const DEFAULT_MAX_WORDS: usize = 268_435_456;

    /// Create a config with an explicit initial capacity and the default
    /// ceiling.
    pub fn with_initial(initial_words: usize) -> Self {
        Self {
            initial_words,
            max_words: Self::DEFAULT_MAX_WORDS,
        }
    }

    /// Initial capacity of the backing buffer in bytes.
    pub fn initial_bytes(&self) -> usize {
        self.initial_words * std::mem::size_of::<u64>()
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            initial_words: Self::DEFAULT_INITIAL_WORDS,
            max_words: Self::DEFAULT_MAX_WORDS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_initial_is_512kb() {
        let config = ArenaConfig::default();
        assert_eq!(config.initial_bytes(), 512 * 1024);
    }

    #[test]
    fn with_initial_keeps_default_ceiling() {
        let config = ArenaConfig::with_initial(128);
        assert_eq!(config.initial_words, 128);
        assert_eq!(config.max_words, ArenaConfig::DEFAULT_MAX_WORDS);
    }
}
