//! Benchmark configuration.

use std::path::PathBuf;

use spmv_kernel::ExecConfig;

use crate::error::BenchError;

/// Configuration for one benchmark invocation.
#[derive(Clone, Debug)]
pub struct BenchConfig {
    /// Path of the Matrix Market input file. Required.
    pub input: PathBuf,
    /// Executor selection and sizing.
    pub exec: ExecConfig,
    /// Untimed iterations before measurement. Default: 5.
    pub warmup_iters: u32,
    /// Timed iterations. Default: 10. Must be at least 1.
    pub runs: u32,
    /// Seed for the random input vector fill.
    pub seed: u64,
}

impl BenchConfig {
    /// Default warm-up iteration count.
    pub const DEFAULT_WARMUP_ITERS: u32 = 5;

    /// Default timed run count.
    pub const DEFAULT_RUNS: u32 = 10;

    /// Create a config for `input` with default counts, executor, and seed.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            exec: ExecConfig::default(),
            warmup_iters: Self::DEFAULT_WARMUP_ITERS,
            runs: Self::DEFAULT_RUNS,
            seed: 0,
        }
    }

    /// Check structural invariants before any work starts.
    pub fn validate(&self) -> Result<(), BenchError> {
        if self.input.as_os_str().is_empty() {
            return Err(BenchError::InvalidConfig {
                reason: "input path is required".into(),
            });
        }
        if self.runs == 0 {
            return Err(BenchError::InvalidConfig {
                reason: "run count must be at least 1".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_counts() {
        let config = BenchConfig::new("m.mtx");
        assert_eq!(config.warmup_iters, 5);
        assert_eq!(config.runs, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_runs_rejected() {
        let mut config = BenchConfig::new("m.mtx");
        config.runs = 0;
        assert!(matches!(
            config.validate(),
            Err(BenchError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn empty_input_rejected() {
        let config = BenchConfig::new("");
        assert!(matches!(
            config.validate(),
            Err(BenchError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn zero_warmup_is_allowed() {
        let mut config = BenchConfig::new("m.mtx");
        config.warmup_iters = 0;
        assert!(config.validate().is_ok());
    }
}
