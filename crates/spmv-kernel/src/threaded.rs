//! Worker-pool executor with static and guided row scheduling.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use spmv_arena::Arena;
use spmv_core::ElemKind;
use spmv_mat::{CsrMatrix, Vector};

use crate::config::Schedule;
use crate::error::MulError;
use crate::executor::{check_operands, SpmvExecutor};
use crate::rowsum::{accumulate_rows_dyn, Operands};

/// SpMV across a fixed-size pool of scoped worker threads.
///
/// Every invocation spawns `workers` scoped threads and joins them before
/// returning, so the caller never observes a partial product. Workers
/// never touch the arena allocator; all operands are resolved once, before
/// the fan-out, and the result region is handed out as disjoint slices.
pub struct ThreadedExecutor {
    workers: usize,
    schedule: Schedule,
}

impl ThreadedExecutor {
    /// Create an executor with an explicit worker count (minimum 1) and
    /// schedule.
    pub fn new(workers: usize, schedule: Schedule) -> Self {
        Self {
            workers: workers.max(1),
            schedule,
        }
    }

    /// The configured worker count.
    pub fn workers(&self) -> usize {
        self.workers
    }
}

impl SpmvExecutor for ThreadedExecutor {
    fn name(&self) -> &str {
        "threaded"
    }

    fn multiply(
        &self,
        arena: &mut Arena,
        matrix: &CsrMatrix,
        vector: &Vector,
        result: &Vector,
    ) -> Result<(), MulError> {
        check_operands(matrix, vector, result)?;

        let rows = matrix.rows();
        let kind = matrix.kind();
        let (reader, out) = arena.split_mut(result.handle());
        let ops = Operands {
            row_ptr: reader.words(matrix.row_ptr()),
            col_idx: reader.words(matrix.col_idx()),
            values: reader.words(matrix.values()),
            x: reader.words(vector.handle()),
        };

        // More workers than rows would just spawn idle threads.
        let workers = self.workers.min(rows).max(1);
        tracing::trace!(rows, workers, schedule = ?self.schedule, "dispatching multiply");
        match self.schedule {
            Schedule::Static => static_multiply(kind, ops, out, rows, workers),
            Schedule::Guided { min_chunk } => {
                guided_multiply(kind, ops, out, rows, workers, min_chunk.max(1));
            }
        }
        Ok(())
    }
}

/// One contiguous, near-equal chunk of rows per worker.
///
/// Each worker owns a disjoint `&mut` sub-slice of the result, so writes
/// are race-free by construction.
fn static_multiply(kind: ElemKind, ops: Operands<'_>, out: &mut [u64], rows: usize, workers: usize) {
    let base = rows / workers;
    let rem = rows % workers;

    thread::scope(|s| {
        let mut rest = out;
        let mut start = 0;
        for w in 0..workers {
            let count = base + usize::from(w < rem);
            let (chunk, tail) = rest.split_at_mut(count);
            rest = tail;
            let range = start..start + count;
            start += count;
            s.spawn(move || accumulate_rows_dyn(kind, ops, range, chunk));
        }
    });
}

/// Workers claim shrinking row chunks off a shared cursor and send each
/// finished block back over a channel; the calling thread scatters the
/// blocks after the join. Output values are identical to the static path —
/// every row is computed by exactly one claim.
fn guided_multiply(
    kind: ElemKind,
    ops: Operands<'_>,
    out: &mut [u64],
    rows: usize,
    workers: usize,
    min_chunk: usize,
) {
    let cursor = AtomicUsize::new(0);
    let (tx, rx) = crossbeam_channel::unbounded::<(usize, Vec<u64>)>();

    thread::scope(|s| {
        for _ in 0..workers {
            let tx = tx.clone();
            let cursor = &cursor;
            s.spawn(move || loop {
                let claimed = cursor.load(Ordering::Relaxed);
                let remaining = rows.saturating_sub(claimed);
                if remaining == 0 {
                    break;
                }
                let want = (remaining / (2 * workers)).max(min_chunk);
                let start = cursor.fetch_add(want, Ordering::Relaxed);
                if start >= rows {
                    break;
                }
                let end = (start + want).min(rows);
                let mut block = vec![0u64; end - start];
                accumulate_rows_dyn(kind, ops, start..end, &mut block);
                // The receiver outlives the scope; send cannot fail.
                let _ = tx.send((start, block));
            });
        }
    });
    drop(tx);

    for (start, block) in rx.try_iter() {
        out[start..start + block.len()].copy_from_slice(&block);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequential::SequentialExecutor;
    use proptest::prelude::*;
    use spmv_test_utils::{
        csr_from_entries, dense_product, int_vector, ones_vector, real_vector, skewed_entries,
        DIAG3,
    };

    fn multiply_both(
        entries: &[(usize, usize, f64)],
        rows: usize,
        cols: usize,
        x_vals: &[f64],
        schedule: Schedule,
        workers: usize,
    ) -> (Vec<f64>, Vec<f64>) {
        let mut arena = Arena::with_defaults();
        let m = csr_from_entries(&mut arena, rows, cols, entries);
        let x = real_vector(&mut arena, x_vals);
        let y_seq = ones_vector(&mut arena, rows);
        let y_par = ones_vector(&mut arena, rows);

        SequentialExecutor
            .multiply(&mut arena, &m, &x, &y_seq)
            .unwrap();
        ThreadedExecutor::new(workers, schedule)
            .multiply(&mut arena, &m, &x, &y_par)
            .unwrap();

        (
            y_seq.to_vec::<f64>(&arena).unwrap(),
            y_par.to_vec::<f64>(&arena).unwrap(),
        )
    }

    #[test]
    fn static_matches_sequential_on_diag() {
        let (seq, par) = multiply_both(DIAG3, 3, 3, &[1.0, 1.0, 1.0], Schedule::Static, 2);
        assert_eq!(seq, vec![1.0, 2.0, 3.0]);
        assert_eq!(par, seq);
    }

    #[test]
    fn guided_matches_sequential_on_skewed_matrix() {
        let entries = skewed_entries(64, 16);
        let x: Vec<f64> = (0..16).map(|i| i as f64 + 0.5).collect();
        let (seq, par) = multiply_both(
            &entries,
            64,
            16,
            &x,
            Schedule::Guided { min_chunk: 2 },
            4,
        );
        assert_eq!(par, seq, "per-row sums are order-identical, so bit-equal");
        assert_eq!(seq, dense_product(64, &entries, &x));
    }

    #[test]
    fn more_workers_than_rows() {
        let (seq, par) = multiply_both(DIAG3, 3, 3, &[2.0, 2.0, 2.0], Schedule::Static, 16);
        assert_eq!(par, seq);
    }

    #[test]
    fn single_row_matrix() {
        let entries = [(0usize, 0usize, 4.0), (0, 2, 1.0)];
        let (seq, par) = multiply_both(&entries, 1, 3, &[1.0, 0.0, 3.0], Schedule::Static, 4);
        assert_eq!(seq, vec![7.0]);
        assert_eq!(par, seq);
    }

    #[test]
    fn zero_row_matrix() {
        let (seq, par) = multiply_both(&[], 0, 0, &[], Schedule::Static, 4);
        assert!(seq.is_empty());
        assert!(par.is_empty());
    }

    #[test]
    fn rows_without_entries_are_zero_under_both_schedules() {
        let entries = [(0usize, 0usize, 1.0), (5, 0, 2.0)];
        for schedule in [Schedule::Static, Schedule::Guided { min_chunk: 1 }] {
            let (seq, par) = multiply_both(&entries, 6, 1, &[1.0], schedule, 3);
            assert_eq!(seq, vec![1.0, 0.0, 0.0, 0.0, 0.0, 2.0]);
            assert_eq!(par, seq);
        }
    }

    #[test]
    fn integer_results_bit_identical_across_executors() {
        let mut arena = Arena::with_defaults();
        let entries: Vec<(usize, usize, i64)> =
            (0..32).map(|i| (i % 8, i % 4, i as i64 - 16)).collect();
        let m = csr_from_entries(&mut arena, 8, 4, &entries);
        let x = int_vector(&mut arena, &[3, -1, 7, 11]);
        let y_seq = int_vector(&mut arena, &[0; 8]);
        let y_par = int_vector(&mut arena, &[0; 8]);

        SequentialExecutor
            .multiply(&mut arena, &m, &x, &y_seq)
            .unwrap();
        ThreadedExecutor::new(3, Schedule::Guided { min_chunk: 1 })
            .multiply(&mut arena, &m, &x, &y_par)
            .unwrap();

        assert_eq!(
            y_seq.to_vec::<i64>(&arena).unwrap(),
            y_par.to_vec::<i64>(&arena).unwrap()
        );
    }

    #[test]
    fn repeated_runs_are_deterministic() {
        let entries = skewed_entries(40, 10);
        let x: Vec<f64> = (0..10).map(|i| 1.0 / (i + 1) as f64).collect();
        let (_, first) = multiply_both(&entries, 40, 10, &x, Schedule::Guided { min_chunk: 1 }, 4);
        for _ in 0..5 {
            let (_, again) =
                multiply_both(&entries, 40, 10, &x, Schedule::Guided { min_chunk: 1 }, 4);
            assert_eq!(again, first);
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn threaded_matches_sequential(
            entries in proptest::collection::vec(
                (0usize..12, 0usize..6, -8.0f64..8.0),
                0..96,
            ),
            workers in 1usize..6,
            guided in proptest::bool::ANY,
        ) {
            let schedule = if guided {
                Schedule::Guided { min_chunk: 1 }
            } else {
                Schedule::Static
            };
            let x: Vec<f64> = (0..6).map(|i| i as f64 - 2.5).collect();
            let (seq, par) = multiply_both(&entries, 12, 6, &x, schedule, workers);
            // Per-row summation order is identical in both executors, so
            // even float results are bit-equal.
            prop_assert_eq!(seq, par);
        }
    }
}
