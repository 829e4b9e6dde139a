//! Bump-allocated arena with relocation-safe handles.
//!
//! One [`Arena`] backs every dynamically sized object in the benchmark:
//! matrix index arrays, value arrays, vectors, and timing samples. Consumers
//! never hold addresses into the backing buffer — they hold [`Handle`]s
//! (offset + length) and resolve them through the arena at each point of
//! use. The backing buffer relocates when it grows, so a materialized slice
//! must never be cached across a call that might allocate; the borrow
//! checker enforces exactly that, because every resolve borrows the arena.
//!
//! There is no per-object free. The only deallocation events are
//! [`Arena::reset`] (between independent phases) and dropping the arena.
//!
//! All storage is `Vec<u64>` with zero-init — no `MaybeUninit`, no `unsafe`.
//! Element typing lives above the arena: see `spmv_core::Scalar`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arena;
pub mod config;
pub mod error;
pub mod handle;

pub use arena::{Arena, ArenaReader};
pub use config::ArenaConfig;
pub use error::ArenaError;
pub use handle::Handle;
