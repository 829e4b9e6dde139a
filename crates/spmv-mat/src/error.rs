//! Matrix construction and file-loading error types.

use std::error::Error;
use std::fmt;

use spmv_arena::ArenaError;

/// Errors while building a matrix from parsed entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BuildError {
    /// An entry's coordinates fall outside the declared dimensions.
    EntryOutOfBounds {
        /// Zero-based position of the entry in the input sequence.
        index: usize,
        /// The entry's row (0-indexed).
        row: usize,
        /// The entry's column (0-indexed).
        col: usize,
        /// Declared row count.
        rows: usize,
        /// Declared column count.
        cols: usize,
    },
    /// Arena allocation failed mid-build. The destination matrix must be
    /// discarded entirely; its fields are not guaranteed consistent.
    Alloc(ArenaError),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EntryOutOfBounds {
                index,
                row,
                col,
                rows,
                cols,
            } => {
                write!(
                    f,
                    "entry {index} at ({row}, {col}) outside {rows}x{cols} matrix"
                )
            }
            Self::Alloc(err) => write!(f, "allocation failed: {err}"),
        }
    }
}

impl Error for BuildError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Alloc(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ArenaError> for BuildError {
    fn from(err: ArenaError) -> Self {
        Self::Alloc(err)
    }
}

/// Errors while loading a matrix from a Matrix Market file.
///
/// `Io` and `InvalidFormat` are deliberately distinct so callers can tell
/// "file not found" from "content won't parse".
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadError {
    /// The underlying stream could not be opened or read.
    Io {
        /// Path of the file involved.
        path: String,
        /// Description of the I/O failure.
        reason: String,
    },
    /// The header or body does not parse as a supported Matrix Market file.
    InvalidFormat {
        /// One-based line number where parsing failed (0 = header missing).
        line: usize,
        /// Description of the problem.
        reason: String,
    },
    /// Parsed entries could not be assembled into a matrix.
    Build(BuildError),
}

impl LoadError {
    pub(crate) fn io(path: &std::path::Path, err: &std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            reason: err.to_string(),
        }
    }

    pub(crate) fn format(line: usize, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            line,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, reason } => write!(f, "cannot read '{path}': {reason}"),
            Self::InvalidFormat { line, reason } => {
                write!(f, "invalid matrix file format at line {line}: {reason}")
            }
            Self::Build(err) => write!(f, "matrix build failed: {err}"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Build(err) => Some(err),
            _ => None,
        }
    }
}

impl From<BuildError> for LoadError {
    fn from(err: BuildError) -> Self {
        Self::Build(err)
    }
}
