//! Benchmark results, summary statistics, and the JSON report.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use spmv_arena::{Arena, Handle};

use crate::error::BenchError;

/// Summary statistics over a non-empty set of duration samples.
///
/// All fields are microseconds. `stddev` is the population standard
/// deviation (`sqrt(Σ(s - mean)² / n)`), not the sample one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stats {
    /// Arithmetic mean, truncated to whole microseconds.
    pub mean: u64,
    /// Population standard deviation, truncated to whole microseconds.
    pub stddev: u64,
    /// Smallest sample.
    pub min: u64,
    /// Largest sample.
    pub max: u64,
}

impl Stats {
    /// Reduce a non-empty sample set.
    ///
    /// # Panics
    ///
    /// Panics if `samples` is empty; the harness validates `runs >= 1`
    /// before any sample is taken.
    pub fn from_samples(samples: &[u64]) -> Self {
        assert!(!samples.is_empty(), "statistics need at least one sample");
        let n = samples.len() as u64;
        let sum: u64 = samples.iter().sum();
        let mean = sum / n;

        let mean_f = sum as f64 / n as f64;
        let variance = samples
            .iter()
            .map(|&s| {
                let d = s as f64 - mean_f;
                d * d
            })
            .sum::<f64>()
            / n as f64;

        Self {
            mean,
            stddev: variance.sqrt() as u64,
            min: *samples.iter().min().expect("non-empty"),
            max: *samples.iter().max().expect("non-empty"),
        }
    }
}

/// Results of one completed benchmark, with samples still arena-resident.
#[derive(Clone, Copy, Debug)]
pub struct BenchResults {
    /// Untimed iterations that preceded measurement.
    pub warmup_iters: u32,
    /// Number of timed runs; equals the sample count.
    pub runs: u32,
    /// Handle of the per-run duration array (microseconds, length `runs`).
    pub samples: Handle,
    /// Summary statistics over the samples.
    pub stats: Stats,
}

impl BenchResults {
    /// Materialize a standalone report by copying the samples out of the
    /// arena.
    pub fn report(&self, arena: &Arena) -> BenchReport {
        BenchReport {
            warmup_iters: self.warmup_iters,
            runs: self.runs,
            samples: arena.words(self.samples).to_vec(),
            mean: self.stats.mean,
            stddev: self.stats.stddev,
            min: self.stats.min,
            max: self.stats.max,
        }
    }
}

/// The serialized benchmark record.
///
/// Field names and nesting are an external contract consumed by plotting
/// tooling; durations are non-negative integer microseconds and
/// `samples.len() == runs`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchReport {
    /// Untimed iterations that preceded measurement.
    pub warmup_iters: u32,
    /// Number of timed runs.
    pub runs: u32,
    /// Per-run durations in microseconds, in run order.
    pub samples: Vec<u64>,
    /// Mean duration in microseconds.
    pub mean: u64,
    /// Population standard deviation in microseconds.
    pub stddev: u64,
    /// Fastest run in microseconds.
    pub min: u64,
    /// Slowest run in microseconds.
    pub max: u64,
}

/// Write a report as pretty-printed JSON.
///
/// Purely an I/O side effect; nothing is computed here.
pub fn save_report(report: &BenchReport, path: &Path) -> Result<(), BenchError> {
    let json = serde_json::to_string_pretty(report).map_err(|err| BenchError::Io {
        path: path.display().to_string(),
        reason: err.to_string(),
    })?;
    fs::write(path, json).map_err(|err| BenchError::Io {
        path: path.display().to_string(),
        reason: err.to_string(),
    })?;
    tracing::info!(path = %path.display(), "results saved");
    Ok(())
}
