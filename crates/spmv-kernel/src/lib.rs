//! Sparse matrix-vector multiply executors.
//!
//! The product `y = A * x` for a CSR matrix `A` is exposed through the
//! one-method [`SpmvExecutor`] trait. Two implementations exist with an
//! identical numeric contract:
//!
//! - [`SequentialExecutor`]: row-by-row on the calling thread,
//!   deterministic ascending-index summation.
//! - [`ThreadedExecutor`]: rows fanned out across a fixed worker pool
//!   under a configurable [`Schedule`], with a join barrier before
//!   `multiply` returns — callers never observe a partial product.
//!
//! Both are pure with respect to the matrix and input vector and write
//! only disjoint locations of the output. All operands must be fully
//! allocated before `multiply` is called; the executors never allocate
//! from the arena, so the backing buffer cannot relocate under a worker.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod executor;
pub mod sequential;
pub mod threaded;

mod rowsum;

pub use config::{ExecConfig, ExecMode, Schedule};
pub use error::MulError;
pub use executor::{executor_for, SpmvExecutor};
pub use sequential::SequentialExecutor;
pub use threaded::ThreadedExecutor;
