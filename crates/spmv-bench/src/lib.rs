//! Benchmark harness for the SpMV kernels.
//!
//! A [`Harness`] walks a fixed phase sequence: construction loads the
//! matrix, builds its CSR form, and allocates the operand vectors
//! (`Initialized`); [`Harness::warmup`] runs untimed iterations to
//! stabilize caches and thread-pool startup (`WarmedUp`); [`Harness::run`]
//! times the configured number of kernel invocations on a monotonic clock
//! and reduces them to summary statistics (`Completed`). Out-of-order
//! calls are phase errors, and any kernel failure aborts the whole
//! benchmark — there are no partial statistics and no retries.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod harness;
pub mod results;

pub use config::BenchConfig;
pub use error::BenchError;
pub use harness::{Harness, Phase};
pub use results::{save_report, BenchReport, BenchResults, Stats};
