//! Reusable fixtures for kernel and harness tests.
//!
//! Small matrices with known products, a skewed matrix for scheduling
//! tests, and Matrix Market snippets for loader round-trips.

#![forbid(unsafe_code)]

pub mod fixtures;

pub use fixtures::*;
