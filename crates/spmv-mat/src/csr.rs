//! Compressed-sparse-row (CSR) matrices and the COO→CSR conversion.

use std::path::Path;

use spmv_arena::{Arena, Handle};
use spmv_core::ElemKind;

use crate::coo::CooMatrix;
use crate::error::{BuildError, LoadError};
use crate::market;

/// A sparse matrix in compressed-sparse-row form.
///
/// `row_ptr` has length `rows + 1` with `row_ptr[0] == 0`,
/// `row_ptr[rows] == nnz`, and non-decreasing entries; row `i`'s non-zeros
/// occupy `col_idx[row_ptr[i]..row_ptr[i + 1]]`. Column indices within a
/// row are in source order, not sorted, and duplicates are preserved as
/// separate entries.
#[derive(Clone, Copy, Debug)]
pub struct CsrMatrix {
    rows: usize,
    cols: usize,
    nnz: usize,
    kind: ElemKind,
    row_ptr: Handle,
    col_idx: Handle,
    values: Handle,
}

impl CsrMatrix {
    /// Convert a COO matrix to CSR by counting sort.
    ///
    /// Three passes: tally entries per row into `row_ptr` (shifted by one),
    /// prefix-sum `row_ptr` in place, then scatter column indices and
    /// values to their row's slots behind an advancing per-row cursor. The
    /// cursor starts as a copy of the pre-scatter `row_ptr`; the tally and
    /// prefix sum alone would yield correct row boundaries but garbage
    /// column and value arrays.
    ///
    /// # Errors
    ///
    /// Allocation failure aborts the conversion; no partial matrix is
    /// returned and any words already written must be considered garbage.
    pub fn from_coo(arena: &mut Arena, src: &CooMatrix) -> Result<Self, BuildError> {
        let rows = src.rows();
        let nnz = src.nnz();

        let row_ptr = arena.alloc(rows + 1)?;

        // Pass 1: tally of entries per row, shifted by one.
        {
            let (reader, ptr) = arena.split_mut(row_ptr);
            for &r in reader.words(src.row_idx()) {
                ptr[r as usize + 1] += 1;
            }
        }

        // Pass 2: in-place prefix sum. Afterwards ptr[i] is the starting
        // offset of row i and ptr[rows] == nnz.
        {
            let ptr = arena.words_mut(row_ptr);
            for i in 0..rows {
                ptr[i + 1] += ptr[i];
            }
        }

        let col_idx = arena.alloc(nnz)?;
        let values = arena.alloc(nnz)?;

        // Pass 3: scatter, one array at a time so each pass has exactly one
        // write region. The cursor advances per placement.
        {
            let mut cursor = Self::cursor_from(arena, row_ptr, rows);
            let (reader, dst) = arena.split_mut(col_idx);
            let src_rows = reader.words(src.row_idx());
            let src_cols = reader.words(src.col_idx());
            for k in 0..nnz {
                let r = src_rows[k] as usize;
                dst[cursor[r]] = src_cols[k];
                cursor[r] += 1;
            }
        }
        {
            let mut cursor = Self::cursor_from(arena, row_ptr, rows);
            let (reader, dst) = arena.split_mut(values);
            let src_rows = reader.words(src.row_idx());
            let src_vals = reader.words(src.values());
            for k in 0..nnz {
                let r = src_rows[k] as usize;
                dst[cursor[r]] = src_vals[k];
                cursor[r] += 1;
            }
        }

        tracing::debug!(rows, cols = src.cols(), nnz, "converted COO to CSR");

        Ok(Self {
            rows,
            cols: src.cols(),
            nnz,
            kind: src.kind(),
            row_ptr,
            col_idx,
            values,
        })
    }

    /// Scratch copy of the pre-scatter row offsets.
    fn cursor_from(arena: &Arena, row_ptr: Handle, rows: usize) -> Vec<usize> {
        arena.words(row_ptr)[..rows]
            .iter()
            .map(|&w| w as usize)
            .collect()
    }

    /// Load a Matrix Market file and convert it to CSR in one step.
    pub fn load(arena: &mut Arena, path: &Path) -> Result<Self, LoadError> {
        let coo = market::load_coo(arena, path)?;
        Ok(Self::from_coo(arena, &coo)?)
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

    /// Handle of the row-offset array (length `rows + 1`).
    pub fn row_ptr(&self) -> Handle {
        self.row_ptr
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
    use proptest::prelude::*;

    fn build_csr(rows: usize, cols: usize, entries: &[(usize, usize, f64)]) -> (Arena, CsrMatrix) {
        let mut arena = Arena::with_defaults();
        let coo = CooMatrix::from_entries(&mut arena, rows, cols, entries).unwrap();
        let csr = CsrMatrix::from_coo(&mut arena, &coo).unwrap();
        (arena, csr)
    }

    #[test]
    fn row_ptr_laws_hold() {
        let (arena, csr) = build_csr(3, 3, &[(2, 0, 3.0), (0, 1, 1.0), (1, 2, 2.0), (2, 2, 4.0)]);
        let ptr = arena.words(csr.row_ptr());
        assert_eq!(ptr[0], 0);
        assert_eq!(ptr[3], 4);
        assert!(ptr.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn scatter_places_columns_and_values() {
        // Entries deliberately out of row order; the scatter must regroup
        // them by row, not merely count them.
        let (arena, csr) = build_csr(3, 3, &[(2, 0, 3.0), (0, 1, 1.0), (1, 2, 2.0)]);
        let ptr = arena.words(csr.row_ptr());
        let cols = arena.words(csr.col_idx());
        let vals = arena.words(csr.values());

        assert_eq!(&cols[ptr[0] as usize..ptr[1] as usize], &[1]);
        assert_eq!(&cols[ptr[1] as usize..ptr[2] as usize], &[2]);
        assert_eq!(&cols[ptr[2] as usize..ptr[3] as usize], &[0]);
        assert_eq!(vals[ptr[2] as usize], 3.0f64.to_bits());
    }

    #[test]
    fn duplicates_stay_separate_entries() {
        let (arena, csr) = build_csr(1, 1, &[(0, 0, 1.0), (0, 0, 1.0)]);
        assert_eq!(csr.nnz(), 2);
        let ptr = arena.words(csr.row_ptr());
        assert_eq!(ptr, &[0, 2]);
        assert_eq!(arena.words(csr.col_idx()), &[0, 0]);
    }

    #[test]
    fn empty_row_has_empty_slice() {
        let (arena, csr) = build_csr(3, 3, &[(0, 0, 1.0), (2, 2, 2.0)]);
        let ptr = arena.words(csr.row_ptr());
        assert_eq!(ptr[1], ptr[2], "row 1 holds no entries");
    }

    #[test]
    fn zero_row_matrix() {
        let (arena, csr) = build_csr(0, 0, &[]);
        assert_eq!(arena.words(csr.row_ptr()), &[0]);
        assert_eq!(csr.nnz(), 0);
    }

    #[test]
    fn conversion_preserves_kind() {
        let mut arena = Arena::with_defaults();
        let coo = CooMatrix::from_entries(&mut arena, 2, 2, &[(0usize, 0usize, 5i64)]).unwrap();
        let csr = CsrMatrix::from_coo(&mut arena, &coo).unwrap();
        assert_eq!(csr.kind(), ElemKind::Integer);
    }

    proptest! {
        #[test]
        fn per_row_counts_round_trip(
            entries in proptest::collection::vec((0usize..8, 0usize..8, -100.0f64..100.0), 0..64)
        ) {
            let (arena, csr) = build_csr(8, 8, &entries);
            let ptr = arena.words(csr.row_ptr());

            // row_ptr differences reproduce the original per-row counts.
            let mut counts = [0u64; 8];
            for &(r, _, _) in &entries {
                counts[r] += 1;
            }
            for i in 0..8 {
                prop_assert_eq!(ptr[i + 1] - ptr[i], counts[i]);
            }

            // Each row's slice holds exactly that row's columns as a multiset.
            let cols = arena.words(csr.col_idx());
            for i in 0..8 {
                let mut got: Vec<u64> =
                    cols[ptr[i] as usize..ptr[i + 1] as usize].to_vec();
                let mut want: Vec<u64> = entries
                    .iter()
                    .filter(|&&(r, _, _)| r == i)
                    .map(|&(_, c, _)| c as u64)
                    .collect();
                got.sort_unstable();
                want.sort_unstable();
                prop_assert_eq!(got, want);
            }
        }
    }
}
