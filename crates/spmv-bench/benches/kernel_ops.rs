//! Criterion micro-benchmarks for the SpMV kernels.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use spmv_arena::{Arena, ArenaConfig};
use spmv_kernel::{ExecConfig, ExecMode, Schedule, SequentialExecutor, SpmvExecutor, ThreadedExecutor};
use spmv_mat::{CooMatrix, CsrMatrix, Vector};
use spmv_test_utils::skewed_entries;

const ROWS: usize = 4_096;
const COLS: usize = 4_096;

/// Build a skewed CSR matrix plus operand vectors in a fresh arena.
fn make_operands() -> (Arena, CsrMatrix, Vector, Vector) {
    let mut arena = Arena::new(ArenaConfig::with_initial(1 << 20)).unwrap();
    let entries = skewed_entries(ROWS, COLS);
    let coo = CooMatrix::from_entries(&mut arena, ROWS, COLS, &entries).unwrap();
    let csr = CsrMatrix::from_coo(&mut arena, &coo).unwrap();

    let x = Vector::new(&mut arena, COLS, csr.kind()).unwrap();
    x.fill_random(&mut arena, 42);
    let y = Vector::new(&mut arena, ROWS, csr.kind()).unwrap();
    (arena, csr, x, y)
}

fn bench_sequential(c: &mut Criterion) {
    let (mut arena, csr, x, y) = make_operands();
    let exec = SequentialExecutor;
    c.bench_function("spmv_sequential_4k", |b| {
        b.iter(|| {
            exec.multiply(&mut arena, &csr, &x, &y).unwrap();
            black_box(y.get::<f64>(&arena, 0).unwrap());
        });
    });
}

fn bench_threaded_static(c: &mut Criterion) {
    let (mut arena, csr, x, y) = make_operands();
    let workers = ExecConfig {
        mode: ExecMode::Threaded,
        threads: 0,
        schedule: Schedule::Static,
    }
    .resolved_worker_count();
    let exec = ThreadedExecutor::new(workers, Schedule::Static);
    c.bench_function("spmv_threaded_static_4k", |b| {
        b.iter(|| {
            exec.multiply(&mut arena, &csr, &x, &y).unwrap();
            black_box(y.get::<f64>(&arena, 0).unwrap());
        });
    });
}

fn bench_threaded_guided(c: &mut Criterion) {
    let (mut arena, csr, x, y) = make_operands();
    let workers = ExecConfig::default().resolved_worker_count();
    let exec = ThreadedExecutor::new(workers, Schedule::Guided { min_chunk: 16 });
    c.bench_function("spmv_threaded_guided_4k", |b| {
        b.iter(|| {
            exec.multiply(&mut arena, &csr, &x, &y).unwrap();
            black_box(y.get::<f64>(&arena, 0).unwrap());
        });
    });
}

criterion_group!(
    benches,
    bench_sequential,
    bench_threaded_static,
    bench_threaded_guided
);
criterion_main!(benches);
