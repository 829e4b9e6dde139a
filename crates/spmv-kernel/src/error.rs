//! Kernel error types.

use std::error::Error;
use std::fmt;

/// Errors from a multiply invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MulError {
    /// Operand dimensions or element kinds do not line up.
    ///
    /// All preconditions are checked before any work starts; on this error
    /// the result vector is untouched.
    IncompatibleOperands {
        /// Description of the first mismatch found.
        reason: String,
    },
}

impl fmt::Display for MulError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncompatibleOperands { reason } => {
                write!(f, "incompatible operands: {reason}")
            }
        }
    }
}

impl Error for MulError {}
