//! Core types shared across the SpMV benchmark crates.
//!
//! Matrices and vectors are arena-resident and homogeneously typed: every
//! element is either a real (`f64`) or an integer (`i64`), selected once at
//! construction and immutable afterwards. The arena itself stores untyped
//! 8-byte words; the [`Scalar`] trait transcodes between words and the two
//! element types so that every numeric algorithm is written once and
//! monomorphized twice.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod elem;
pub mod error;

pub use elem::{ElemKind, Scalar};
pub use error::AccessError;
