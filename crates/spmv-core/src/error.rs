//! Shared element-access error types.

use std::error::Error;
use std::fmt;

use crate::ElemKind;

/// Errors from bounds- and kind-checked element access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessError {
    /// Index outside the valid `[0, len)` range.
    OutOfBounds {
        /// The offending index.
        index: usize,
        /// Length of the container.
        len: usize,
    },
    /// Accessor element type does not match the container's tag.
    ///
    /// A real accessor on an integer container (or vice versa) is a
    /// contract violation, never a silent coercion.
    KindMismatch {
        /// The kind the accessor expected.
        expected: ElemKind,
        /// The container's actual kind.
        found: ElemKind,
    },
}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
            Self::KindMismatch { expected, found } => {
                write!(f, "element kind mismatch: accessor expects {expected}, container holds {found}")
            }
        }
    }
}

impl Error for AccessError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_message_names_index_and_len() {
        let err = AccessError::OutOfBounds { index: 7, len: 3 };
        assert_eq!(err.to_string(), "index 7 out of bounds for length 3");
    }

    #[test]
    fn kind_mismatch_message_names_both_kinds() {
        let err = AccessError::KindMismatch {
            expected: ElemKind::Real,
            found: ElemKind::Integer,
        };
        assert!(err.to_string().contains("real"));
        assert!(err.to_string().contains("integer"));
    }
}
