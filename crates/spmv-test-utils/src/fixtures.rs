//! Matrix and vector fixture builders.

use spmv_arena::Arena;
use spmv_core::{ElemKind, Scalar};
use spmv_mat::{CooMatrix, CsrMatrix, Vector};

/// A 3×3 diagonal matrix with entries (0,0)=1, (1,1)=2, (2,2)=3.
///
/// Multiplied by `[1, 1, 1]` it yields `[1, 2, 3]`.
pub const DIAG3: &[(usize, usize, f64)] = &[(0, 0, 1.0), (1, 1, 2.0), (2, 2, 3.0)];

/// Matrix Market text for [`DIAG3`].
pub const DIAG3_MM: &str = "\
%%MatrixMarket matrix coordinate real general
3 3 3
1 1 1.0
2 2 2.0
3 3 3.0
";

/// Build a CSR matrix from 0-indexed entries in one call.
pub fn csr_from_entries<S: Scalar>(
    arena: &mut Arena,
    rows: usize,
    cols: usize,
    entries: &[(usize, usize, S)],
) -> CsrMatrix {
    let coo = CooMatrix::from_entries(arena, rows, cols, entries).expect("fixture entries valid");
    CsrMatrix::from_coo(arena, &coo).expect("fixture conversion succeeds")
}

/// A vector of the given length with every real element set to 1.0.
pub fn ones_vector(arena: &mut Arena, len: usize) -> Vector {
    let v = Vector::new(arena, len, ElemKind::Real).expect("fixture vector fits");
    v.fill::<f64>(arena, 1.0).expect("kind matches");
    v
}

/// A vector holding the reals `values`.
pub fn real_vector(arena: &mut Arena, values: &[f64]) -> Vector {
    let v = Vector::new(arena, values.len(), ElemKind::Real).expect("fixture vector fits");
    for (i, &x) in values.iter().enumerate() {
        v.set::<f64>(arena, i, x).expect("in bounds");
    }
    v
}

/// A vector holding the integers `values`.
pub fn int_vector(arena: &mut Arena, values: &[i64]) -> Vector {
    let v = Vector::new(arena, values.len(), ElemKind::Integer).expect("fixture vector fits");
    for (i, &x) in values.iter().enumerate() {
        v.set::<i64>(arena, i, x).expect("in bounds");
    }
    v
}

/// Entries for a matrix with a heavily skewed non-zero distribution: row 0
/// holds one entry per column, every other row holds a single diagonal
/// entry. Exercises load-balancing in scheduled kernels.
pub fn skewed_entries(rows: usize, cols: usize) -> Vec<(usize, usize, f64)> {
    let mut entries = Vec::new();
    for c in 0..cols {
        entries.push((0, c, (c + 1) as f64));
    }
    for r in 1..rows {
        entries.push((r, r % cols, 1.0));
    }
    entries
}

/// Dense reference product for real matrices, computed straightforwardly
/// from the raw entries.
pub fn dense_product(rows: usize, entries: &[(usize, usize, f64)], x: &[f64]) -> Vec<f64> {
    let mut out = vec![0.0; rows];
    for &(r, c, v) in entries {
        out[r] += v * x[c];
    }
    out
}
