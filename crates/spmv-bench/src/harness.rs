//! The benchmark harness and its phase machine.

use std::fmt;
use std::time::Instant;

use spmv_arena::Arena;
use spmv_kernel::{executor_for, SpmvExecutor};
use spmv_mat::{CsrMatrix, Vector};

use crate::config::BenchConfig;
use crate::error::BenchError;
use crate::results::{BenchResults, Stats};

/// Where a harness sits in its fixed lifecycle.
///
/// The only legal order is `Initialized` → `WarmedUp` → `Completed`; each
/// transition is driven by exactly one harness method and never repeats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Operands are built; nothing has executed yet.
    Initialized,
    /// Warm-up iterations are done; ready for timed runs.
    WarmedUp,
    /// Timed runs are done and statistics are available.
    Completed,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Initialized => "initialized",
            Self::WarmedUp => "warmed-up",
            Self::Completed => "completed",
        })
    }
}

/// A fully set-up benchmark: operands, executor, and iteration counts.
///
/// Construction does all the expensive setup (load, CSR conversion,
/// operand allocation) so that neither [`Harness::warmup`] nor
/// [`Harness::run`] allocates inside a timed region.
pub struct Harness {
    matrix: CsrMatrix,
    vector: Vector,
    result: Vector,
    executor: Box<dyn SpmvExecutor>,
    warmup_iters: u32,
    runs: u32,
    phase: Phase,
}

impl fmt::Debug for Harness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Harness")
            .field("executor", &self.executor.name())
            .field("warmup_iters", &self.warmup_iters)
            .field("runs", &self.runs)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

impl Harness {
    /// Build a harness from a validated configuration.
    ///
    /// Loads the Matrix Market file at `config.input`, converts it to CSR,
    /// allocates the input vector (filled from `config.seed`) and the
    /// zeroed result vector, and selects the executor.
    pub fn new(arena: &mut Arena, config: &BenchConfig) -> Result<Self, BenchError> {
        config.validate()?;

        let matrix = CsrMatrix::load(arena, &config.input)?;
        let vector = Vector::new(arena, matrix.cols(), matrix.kind())?;
        vector.fill_random(arena, config.seed);
        let result = Vector::new(arena, matrix.rows(), matrix.kind())?;
        let executor = executor_for(&config.exec);

        tracing::info!(
            input = %config.input.display(),
            rows = matrix.rows(),
            cols = matrix.cols(),
            nnz = matrix.nnz(),
            kind = %matrix.kind(),
            executor = executor.name(),
            "benchmark initialized"
        );

        Ok(Self {
            matrix,
            vector,
            result,
            executor,
            warmup_iters: config.warmup_iters,
            runs: config.runs,
            phase: Phase::Initialized,
        })
    }

    /// The current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The loaded matrix.
    pub fn matrix(&self) -> &CsrMatrix {
        &self.matrix
    }

    /// The result vector written by the most recent kernel invocation.
    pub fn result(&self) -> &Vector {
        &self.result
    }

    fn require(&self, expected: Phase) -> Result<(), BenchError> {
        if self.phase != expected {
            return Err(BenchError::Phase {
                expected,
                actual: self.phase,
            });
        }
        Ok(())
    }

    /// Run the untimed warm-up iterations.
    ///
    /// Legal only in `Initialized`; transitions to `WarmedUp`. With zero
    /// warm-up iterations configured this is just the phase transition.
    pub fn warmup(&mut self, arena: &mut Arena) -> Result<(), BenchError> {
        self.require(Phase::Initialized)?;

        for _ in 0..self.warmup_iters {
            self.executor
                .multiply(arena, &self.matrix, &self.vector, &self.result)?;
        }

        tracing::debug!(iters = self.warmup_iters, "warm-up complete");
        self.phase = Phase::WarmedUp;
        Ok(())
    }

    /// Run the timed iterations and reduce them to statistics.
    ///
    /// Legal only in `WarmedUp`; transitions to `Completed`. The sample
    /// array is allocated before the first timed run starts, so the timed
    /// region contains nothing but kernel invocations. Any kernel failure
    /// aborts the benchmark with no partial statistics.
    pub fn run(&mut self, arena: &mut Arena) -> Result<BenchResults, BenchError> {
        self.require(Phase::WarmedUp)?;

        let samples = arena.alloc(self.runs as usize)?;

        for i in 0..self.runs as usize {
            let start = Instant::now();
            self.executor
                .multiply(arena, &self.matrix, &self.vector, &self.result)?;
            let micros = start.elapsed().as_micros() as u64;
            arena.words_mut(samples)[i] = micros;
        }

        let stats = Stats::from_samples(arena.words(samples));
        tracing::info!(
            runs = self.runs,
            mean_us = stats.mean,
            stddev_us = stats.stddev,
            min_us = stats.min,
            max_us = stats.max,
            "benchmark complete"
        );

        self.phase = Phase::Completed;
        Ok(BenchResults {
            warmup_iters: self.warmup_iters,
            runs: self.runs,
            samples,
            stats,
        })
    }
}
