//! Sparse matrix-vector multiplication kernels and benchmark harness.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the sub-crates. For most users, adding `spmv` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use spmv::prelude::*;
//!
//! // Build a 3×3 diagonal matrix and multiply it by [1, 1, 1].
//! let mut arena = Arena::with_defaults();
//! let coo = CooMatrix::from_entries(
//!     &mut arena,
//!     3,
//!     3,
//!     &[(0usize, 0usize, 1.0f64), (1, 1, 2.0), (2, 2, 3.0)],
//! )
//! .unwrap();
//! let csr = CsrMatrix::from_coo(&mut arena, &coo).unwrap();
//!
//! let x = Vector::new(&mut arena, 3, ElemKind::Real).unwrap();
//! x.fill::<f64>(&mut arena, 1.0).unwrap();
//! let y = Vector::new(&mut arena, 3, ElemKind::Real).unwrap();
//!
//! let exec = executor_for(&ExecConfig::default());
//! exec.multiply(&mut arena, &csr, &x, &y).unwrap();
//! assert_eq!(y.to_vec::<f64>(&arena).unwrap(), vec![1.0, 2.0, 3.0]);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `spmv-core` | Element kinds, the scalar trait, access errors |
//! | [`arena`] | `spmv-arena` | The word arena, handles, configuration |
//! | [`mat`] | `spmv-mat` | COO/CSR matrices, vectors, Matrix Market loading |
//! | [`kernel`] | `spmv-kernel` | Sequential and threaded multiply executors |
//! | [`bench`] | `spmv-bench` | Benchmark harness, statistics, JSON reports |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Element kinds and the scalar trait (`spmv-core`).
pub use spmv_core as types;

/// Arena storage and relocation-safe handles (`spmv-arena`).
///
/// All matrix and vector payloads live here; see [`arena::Arena`] and
/// [`arena::Handle`].
pub use spmv_arena as arena;

/// Sparse matrices, vectors, and the Matrix Market loader (`spmv-mat`).
pub use spmv_mat as mat;

/// Multiply executors and scheduling (`spmv-kernel`).
///
/// [`kernel::SequentialExecutor`] is the deterministic reference;
/// [`kernel::ThreadedExecutor`] fans rows across a worker pool and is
/// bit-identical to it.
pub use spmv_kernel as kernel;

/// Benchmark harness, statistics, and reporting (`spmv-bench`).
pub use spmv_bench as bench;

/// Common imports for typical usage.
///
/// ```rust
/// use spmv::prelude::*;
/// ```
pub mod prelude {
    // Storage
    pub use spmv_arena::{Arena, ArenaConfig, Handle};

    // Element model
    pub use spmv_core::{ElemKind, Scalar};

    // Matrices and vectors
    pub use spmv_mat::{CooMatrix, CsrMatrix, Vector};

    // Kernels
    pub use spmv_kernel::{executor_for, ExecConfig, ExecMode, Schedule, SpmvExecutor};

    // Benchmarking
    pub use spmv_bench::{BenchConfig, BenchReport, Harness, Phase};

    // Errors
    pub use spmv_arena::ArenaError;
    pub use spmv_bench::BenchError;
    pub use spmv_core::AccessError;
    pub use spmv_kernel::MulError;
    pub use spmv_mat::{BuildError, LoadError};
}
