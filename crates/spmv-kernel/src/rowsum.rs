//! Shared row-accumulation loop.
//!
//! Both executors funnel into [`accumulate_rows`]: decode words, multiply,
//! accumulate in ascending entry order, encode back. Monomorphized once per
//! element kind via [`Scalar`].

use spmv_core::{ElemKind, Scalar};

/// Raw word slices of one multiply's operands.
///
/// Copyable so worker closures can capture it by value.
#[derive(Clone, Copy)]
pub(crate) struct Operands<'a> {
    pub row_ptr: &'a [u64],
    pub col_idx: &'a [u64],
    pub values: &'a [u64],
    pub x: &'a [u64],
}

/// Compute output rows `rows.start..rows.end` into `out`.
///
/// `out[i - rows.start]` receives row `i`'s product. Summation order is
/// ascending entry index, so results are deterministic per row regardless
/// of which thread computes it. Rows with no entries produce exact zero.
pub(crate) fn accumulate_rows<S: Scalar>(
    ops: Operands<'_>,
    rows: std::ops::Range<usize>,
    out: &mut [u64],
) {
    debug_assert_eq!(out.len(), rows.len());
    for (slot, i) in out.iter_mut().zip(rows) {
        let start = ops.row_ptr[i] as usize;
        let end = ops.row_ptr[i + 1] as usize;
        let mut acc = S::ZERO;
        for k in start..end {
            let a = S::from_word(ops.values[k]);
            let b = S::from_word(ops.x[ops.col_idx[k] as usize]);
            acc = S::mul_add_acc(acc, a, b);
        }
        *slot = acc.to_word();
    }
}

/// Kind-dispatched wrapper around [`accumulate_rows`].
pub(crate) fn accumulate_rows_dyn(
    kind: ElemKind,
    ops: Operands<'_>,
    rows: std::ops::Range<usize>,
    out: &mut [u64],
) {
    match kind {
        ElemKind::Real => accumulate_rows::<f64>(ops, rows, out),
        ElemKind::Integer => accumulate_rows::<i64>(ops, rows, out),
    }
}
