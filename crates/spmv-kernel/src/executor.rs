//! The executor trait, operand validation, and the registry.

use spmv_arena::Arena;
use spmv_mat::{CsrMatrix, Vector};

use crate::config::{ExecConfig, ExecMode};
use crate::error::MulError;
use crate::sequential::SequentialExecutor;
use crate::threaded::ThreadedExecutor;

/// An SpMV execution strategy.
///
/// Implementations compute `result = matrix * vector`, reading the matrix
/// and input vector and writing every element of the result exactly once.
pub trait SpmvExecutor: Send + Sync {
    /// Stable identifier for logs and reports.
    fn name(&self) -> &str;

    /// Compute `result = matrix * vector`.
    ///
    /// # Errors
    ///
    /// [`MulError::IncompatibleOperands`] if dimensions or element kinds
    /// mismatch; the result vector is untouched in that case.
    fn multiply(
        &self,
        arena: &mut Arena,
        matrix: &CsrMatrix,
        vector: &Vector,
        result: &Vector,
    ) -> Result<(), MulError>;
}

/// Select an executor from configuration.
pub fn executor_for(config: &ExecConfig) -> Box<dyn SpmvExecutor> {
    match config.mode {
        ExecMode::Sequential => Box::new(SequentialExecutor),
        ExecMode::Threaded => Box::new(ThreadedExecutor::new(
            config.resolved_worker_count(),
            config.schedule,
        )),
    }
}

/// Check every multiply precondition up front.
///
/// Reported as a single incompatible-operands error naming the first
/// mismatch; nothing is executed on failure.
pub(crate) fn check_operands(
    matrix: &CsrMatrix,
    vector: &Vector,
    result: &Vector,
) -> Result<(), MulError> {
    if matrix.cols() != vector.len() {
        return Err(incompatible(format!(
            "matrix has {} columns but vector has {} elements",
            matrix.cols(),
            vector.len()
        )));
    }
    if matrix.kind() != vector.kind() {
        return Err(incompatible(format!(
            "matrix holds {} elements but vector holds {}",
            matrix.kind(),
            vector.kind()
        )));
    }
    if result.len() != matrix.rows() {
        return Err(incompatible(format!(
            "matrix has {} rows but result has {} elements",
            matrix.rows(),
            result.len()
        )));
    }
    if result.kind() != matrix.kind() {
        return Err(incompatible(format!(
            "matrix holds {} elements but result holds {}",
            matrix.kind(),
            result.kind()
        )));
    }
    Ok(())
}

fn incompatible(reason: String) -> MulError {
    MulError::IncompatibleOperands { reason }
}
