//! Harness error types.
//!
//! Every failure keeps its originating kind: a missing file surfaces as
//! the loader's I/O error, a dimension mismatch as the kernel's
//! incompatible-operands error, and so on, unchanged through the harness.

use std::error::Error;
use std::fmt;

use spmv_arena::ArenaError;
use spmv_kernel::MulError;
use spmv_mat::LoadError;

use crate::harness::Phase;

/// Errors from benchmark configuration, setup, or execution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BenchError {
    /// The configuration is structurally invalid.
    InvalidConfig {
        /// Description of the invalid field.
        reason: String,
    },
    /// Loading or converting the input matrix failed.
    Load(LoadError),
    /// Arena allocation failed.
    Alloc(ArenaError),
    /// A kernel invocation failed; the benchmark is aborted.
    Mul(MulError),
    /// An operation was called out of phase order.
    Phase {
        /// The phase the operation requires.
        expected: Phase,
        /// The harness's actual phase.
        actual: Phase,
    },
    /// Writing the results file failed.
    Io {
        /// Destination path.
        path: String,
        /// Description of the failure.
        reason: String,
    },
}

impl fmt::Display for BenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig { reason } => write!(f, "invalid benchmark config: {reason}"),
            Self::Load(err) => write!(f, "matrix load failed: {err}"),
            Self::Alloc(err) => write!(f, "allocation failed: {err}"),
            Self::Mul(err) => write!(f, "multiply failed: {err}"),
            Self::Phase { expected, actual } => {
                write!(f, "phase error: requires {expected}, harness is {actual}")
            }
            Self::Io { path, reason } => write!(f, "cannot write '{path}': {reason}"),
        }
    }
}

impl Error for BenchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Load(err) => Some(err),
            Self::Alloc(err) => Some(err),
            Self::Mul(err) => Some(err),
            _ => None,
        }
    }
}

impl From<LoadError> for BenchError {
    fn from(err: LoadError) -> Self {
        Self::Load(err)
    }
}

impl From<ArenaError> for BenchError {
    fn from(err: ArenaError) -> Self {
        Self::Alloc(err)
    }
}

impl From<MulError> for BenchError {
    fn from(err: MulError) -> Self {
        Self::Mul(err)
    }
}
