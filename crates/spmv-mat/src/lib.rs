//! Arena-resident numeric containers for the SpMV benchmark.
//!
//! A [`Vector`] is a fixed-length, homogeneously typed array. A
//! [`CooMatrix`] holds sparse entries as three parallel arrays of
//! (row, col, value) in file order. A [`CsrMatrix`] is derived from a COO
//! matrix by a counting-sort conversion and supports efficient row-major
//! traversal.
//!
//! All three hold only [`Handle`](spmv_arena::Handle)s into a shared
//! [`Arena`](spmv_arena::Arena); none owns memory, and every access
//! resolves its handle fresh.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coo;
pub mod csr;
pub mod error;
pub mod market;
pub mod vector;

pub use coo::CooMatrix;
pub use csr::CsrMatrix;
pub use error::{BuildError, LoadError};
pub use market::Header;
pub use vector::Vector;
