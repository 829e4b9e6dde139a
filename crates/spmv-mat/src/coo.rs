//! Coordinate-format (COO) sparse matrices.

use spmv_arena::{Arena, Handle};
use spmv_core::{ElemKind, Scalar};

use crate::error::BuildError;

/// A sparse matrix stored as three parallel arrays of (row, col, value).
///
/// Entries are kept exactly as supplied: file order, no sorting, no
/// deduplication. Duplicate (row, col) pairs are legal and accumulate
/// additively under multiplication after conversion to CSR.
#[derive(Clone, Copy, Debug)]
pub struct CooMatrix {
    rows: usize,
    cols: usize,
    nnz: usize,
    kind: ElemKind,
    row_idx: Handle,
    col_idx: Handle,
    values: Handle,
}

impl CooMatrix {
    /// Build a COO matrix from 0-indexed entries, copied verbatim.
    ///
    /// The three parallel arrays are allocated sized exactly `entries.len()`.
    /// Every coordinate is validated against the declared dimensions; the
    /// first violation aborts the build.
    pub fn from_entries<S: Scalar>(
        arena: &mut Arena,
        rows: usize,
        cols: usize,
        entries: &[(usize, usize, S)],
    ) -> Result<Self, BuildError> {
        let nnz = entries.len();
        for (index, &(row, col, _)) in entries.iter().enumerate() {
            if row >= rows || col >= cols {
                return Err(BuildError::EntryOutOfBounds {
                    index,
                    row,
                    col,
                    rows,
                    cols,
                });
            }
        }

        let row_idx = arena.alloc(nnz)?;
        let col_idx = arena.alloc(nnz)?;
        let values = arena.alloc(nnz)?;

        for (k, &(row, col, value)) in entries.iter().enumerate() {
            arena.words_mut(row_idx)[k] = row as u64;
            arena.words_mut(col_idx)[k] = col as u64;
            arena.words_mut(values)[k] = value.to_word();
        }

        tracing::debug!(rows, cols, nnz, kind = %S::KIND, "built COO matrix");

        Ok(Self {
            rows,
            cols,
            nnz,
            kind: S::KIND,
            row_idx,
            col_idx,
            values,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of stored entries (duplicates counted).
    pub fn nnz(&self) -> usize {
        self.nnz
    }

    /// The element kind tag.
    pub fn kind(&self) -> ElemKind {
        self.kind
    }

    /// Handle of the row-index array (length `nnz`).
    pub fn row_idx(&self) -> Handle {
        self.row_idx
    }

    /// Handle of the column-index array (length `nnz`).
    pub fn col_idx(&self) -> Handle {
        self.col_idx
    }

    /// Handle of the value array (length `nnz`).
    pub fn values(&self) -> Handle {
        self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_entries_copies_in_file_order() {
        let mut arena = Arena::with_defaults();
        let entries = [(2usize, 0usize, 3.0f64), (0, 1, 1.0), (1, 2, 2.0)];
        let coo = CooMatrix::from_entries(&mut arena, 3, 3, &entries).unwrap();

        assert_eq!(coo.nnz(), 3);
        assert_eq!(arena.words(coo.row_idx()), &[2, 0, 1]);
        assert_eq!(arena.words(coo.col_idx()), &[0, 1, 2]);
        assert_eq!(
            arena.words(coo.values())[0],
            3.0f64.to_bits(),
            "values stored as raw words in entry order"
        );
    }

    #[test]
    fn duplicates_are_kept() {
        let mut arena = Arena::with_defaults();
        let entries = [(0usize, 0usize, 1.0f64), (0, 0, 1.0)];
        let coo = CooMatrix::from_entries(&mut arena, 1, 1, &entries).unwrap();
        assert_eq!(coo.nnz(), 2);
    }

    #[test]
    fn entry_outside_dimensions_rejected() {
        let mut arena = Arena::with_defaults();
        let entries = [(0usize, 5usize, 1.0f64)];
        let err = CooMatrix::from_entries(&mut arena, 2, 2, &entries).unwrap_err();
        assert!(matches!(
            err,
            BuildError::EntryOutOfBounds { index: 0, col: 5, .. }
        ));
    }

    #[test]
    fn empty_matrix_allowed() {
        let mut arena = Arena::with_defaults();
        let coo = CooMatrix::from_entries::<i64>(&mut arena, 0, 0, &[]).unwrap();
        assert_eq!(coo.nnz(), 0);
        assert_eq!(coo.rows(), 0);
    }
}
