//! Single-threaded reference executor.

use spmv_arena::Arena;
use spmv_mat::{CsrMatrix, Vector};

use crate::error::MulError;
use crate::executor::{check_operands, SpmvExecutor};
use crate::rowsum::{accumulate_rows_dyn, Operands};

/// Row-by-row SpMV on the calling thread.
///
/// Summation order is ascending entry index for every row, making this the
/// deterministic reference the threaded executor is tested against.
pub struct SequentialExecutor;

impl SpmvExecutor for SequentialExecutor {
    fn name(&self) -> &str {
        "sequential"
    }

    fn multiply(
        &self,
        arena: &mut Arena,
        matrix: &CsrMatrix,
        vector: &Vector,
        result: &Vector,
    ) -> Result<(), MulError> {
        check_operands(matrix, vector, result)?;

        let (reader, out) = arena.split_mut(result.handle());
        let ops = Operands {
            row_ptr: reader.words(matrix.row_ptr()),
            col_idx: reader.words(matrix.col_idx()),
            values: reader.words(matrix.values()),
            x: reader.words(vector.handle()),
        };
        accumulate_rows_dyn(matrix.kind(), ops, 0..matrix.rows(), out);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spmv_test_utils::{csr_from_entries, int_vector, ones_vector, real_vector, DIAG3};

    #[test]
    fn diagonal_times_ones() {
        let mut arena = Arena::with_defaults();
        let m = csr_from_entries(&mut arena, 3, 3, DIAG3);
        let x = ones_vector(&mut arena, 3);
        let y = ones_vector(&mut arena, 3);

        SequentialExecutor.multiply(&mut arena, &m, &x, &y).unwrap();
        assert_eq!(y.to_vec::<f64>(&arena).unwrap(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn duplicate_entries_sum_under_multiply() {
        let mut arena = Arena::with_defaults();
        let m = csr_from_entries(&mut arena, 1, 1, &[(0, 0, 1.0), (0, 0, 1.0)]);
        let x = ones_vector(&mut arena, 1);
        let y = ones_vector(&mut arena, 1);

        SequentialExecutor.multiply(&mut arena, &m, &x, &y).unwrap();
        assert_eq!(y.to_vec::<f64>(&arena).unwrap(), vec![2.0]);
    }

    #[test]
    fn all_zero_row_yields_exact_zero() {
        let mut arena = Arena::with_defaults();
        let m = csr_from_entries(&mut arena, 3, 3, &[(0, 0, 1.0), (2, 1, 4.0)]);
        let x = real_vector(&mut arena, &[1.0, 2.0, 3.0]);
        let y = ones_vector(&mut arena, 3);

        SequentialExecutor.multiply(&mut arena, &m, &x, &y).unwrap();
        let out = y.to_vec::<f64>(&arena).unwrap();
        assert_eq!(out, vec![1.0, 0.0, 8.0]);
    }

    #[test]
    fn integer_product_is_exact() {
        let mut arena = Arena::with_defaults();
        let m = csr_from_entries(&mut arena, 2, 2, &[(0usize, 1usize, 3i64), (1, 0, -2)]);
        let x = int_vector(&mut arena, &[10, 100]);
        let y = int_vector(&mut arena, &[0, 0]);

        SequentialExecutor.multiply(&mut arena, &m, &x, &y).unwrap();
        assert_eq!(y.to_vec::<i64>(&arena).unwrap(), vec![300, -20]);
    }

    #[test]
    fn zero_row_matrix_is_a_no_op() {
        let mut arena = Arena::with_defaults();
        let m = csr_from_entries::<f64>(&mut arena, 0, 0, &[]);
        let x = ones_vector(&mut arena, 0);
        let y = ones_vector(&mut arena, 0);
        SequentialExecutor.multiply(&mut arena, &m, &x, &y).unwrap();
    }

    #[test]
    fn failed_preconditions_leave_result_untouched() {
        let mut arena = Arena::with_defaults();
        let m = csr_from_entries(&mut arena, 3, 3, DIAG3);
        let x = ones_vector(&mut arena, 2); // incompatible
        let y = real_vector(&mut arena, &[9.0, 9.0, 9.0]);

        assert!(SequentialExecutor.multiply(&mut arena, &m, &x, &y).is_err());
        assert_eq!(y.to_vec::<f64>(&arena).unwrap(), vec![9.0, 9.0, 9.0]);
    }
}
