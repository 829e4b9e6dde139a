//! Execution strategy configuration.

/// Which executor implementation to use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExecMode {
    /// Single-threaded reference implementation.
    Sequential,
    /// Fixed-size worker pool.
    Threaded,
}

/// Row-partitioning policy for the threaded executor.
///
/// Static chunks are optimal for evenly distributed non-zeros; guided
/// scheduling trades a little coordination for balance when row lengths
/// are skewed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Schedule {
    /// One contiguous, near-equal chunk of rows per worker.
    Static,
    /// Workers claim shrinking chunks off a shared cursor; each claim is
    /// `remaining / (2 * workers)`, never below `min_chunk` rows.
    Guided {
        /// Smallest chunk a worker may claim. Must be at least 1.
        min_chunk: usize,
    },
}

impl Default for Schedule {
    fn default() -> Self {
        Self::Static
    }
}

/// Configuration selecting and sizing an executor.
#[derive(Clone, Copy, Debug)]
pub struct ExecConfig {
    /// Which implementation to run.
    pub mode: ExecMode,
    /// Worker thread count. `0` means auto-detect from
    /// `available_parallelism`, clamped to `[1, 64]`.
    pub threads: usize,
    /// Partitioning policy (threaded mode only).
    pub schedule: Schedule,
}

impl Default for ExecConfig {
    fn default() -> Self {
        Self {
            mode: ExecMode::Threaded,
            threads: 0,
            schedule: Schedule::Static,
        }
    }
}

impl ExecConfig {
    /// Resolve the actual worker count, applying auto-detection for `0`.
    ///
    /// Explicit values are clamped to `[1, 64]`.
    pub fn resolved_worker_count(&self) -> usize {
        match self.threads {
            0 => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4)
                .clamp(1, 64),
            n => n.clamp(1, 64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_threads_auto_detects() {
        let config = ExecConfig {
            threads: 0,
            ..Default::default()
        };
        let n = config.resolved_worker_count();
        assert!((1..=64).contains(&n));
    }

    #[test]
    fn explicit_threads_clamped() {
        let config = ExecConfig {
            threads: 1000,
            ..Default::default()
        };
        assert_eq!(config.resolved_worker_count(), 64);
    }

    #[test]
    fn default_schedule_is_static() {
        assert_eq!(Schedule::default(), Schedule::Static);
    }
}
