//! Arena-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during arena operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// The arena cannot grow to satisfy the request.
    OutOfMemory {
        /// Number of words requested.
        requested: usize,
        /// Capacity ceiling in words.
        capacity: usize,
    },
    /// A single allocation exceeds the handle's addressable range.
    AllocationTooLarge {
        /// Number of words requested.
        requested: usize,
    },
    /// Configuration rejected at construction.
    InvalidConfig {
        /// Description of the invalid parameter.
        reason: &'static str,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfMemory {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "out of memory: requested {requested} words, arena ceiling {capacity} words"
                )
            }
            Self::AllocationTooLarge { requested } => {
                write!(f, "allocation of {requested} words exceeds handle range")
            }
            Self::InvalidConfig { reason } => {
                write!(f, "invalid arena config: {reason}")
            }
        }
    }
}

impl Error for ArenaError {}
