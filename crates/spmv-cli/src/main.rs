//! Command-line front end for the SpMV benchmark harness.
//!
//! Loads a Matrix Market file, runs the configured warm-up and timed
//! iterations, prints summary statistics, and optionally saves the full
//! report as JSON. Any setup or kernel failure exits non-zero and leaves
//! no results file behind.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use spmv_arena::Arena;
use spmv_bench::{save_report, BenchConfig, Harness};
use spmv_kernel::{ExecConfig, ExecMode, Schedule};

/// Default minimum chunk for guided scheduling, in rows.
const GUIDED_MIN_CHUNK: usize = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ScheduleArg {
    /// Single-threaded reference executor.
    Sequential,
    /// Contiguous near-equal row chunks, one per worker.
    Static,
    /// Workers claim shrinking chunks off a shared cursor.
    Guided,
}

#[derive(Parser, Debug)]
#[command(name = "spmv-bench")]
#[command(about = "Benchmark sparse matrix-vector multiplication on a Matrix Market file")]
#[command(version)]
struct Cli {
    /// Matrix Market input file
    #[arg(short, long)]
    input: PathBuf,

    /// Worker thread count (0 = auto-detect)
    #[arg(short, long, default_value_t = 0)]
    threads: usize,

    /// Untimed warm-up iterations
    #[arg(short, long, default_value_t = BenchConfig::DEFAULT_WARMUP_ITERS)]
    warmup: u32,

    /// Timed iterations
    #[arg(short, long, default_value_t = BenchConfig::DEFAULT_RUNS)]
    runs: u32,

    /// Row-partitioning policy
    #[arg(long, value_enum, default_value_t = ScheduleArg::Static)]
    schedule: ScheduleArg,

    /// Seed for the random input vector
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Write the full report as JSON to this path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Increase log verbosity
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Log errors only
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn exec_config(&self) -> ExecConfig {
        match self.schedule {
            ScheduleArg::Sequential => ExecConfig {
                mode: ExecMode::Sequential,
                threads: 1,
                schedule: Schedule::Static,
            },
            ScheduleArg::Static => ExecConfig {
                mode: ExecMode::Threaded,
                threads: self.threads,
                schedule: Schedule::Static,
            },
            ScheduleArg::Guided => ExecConfig {
                mode: ExecMode::Threaded,
                threads: self.threads,
                schedule: Schedule::Guided {
                    min_chunk: GUIDED_MIN_CHUNK,
                },
            },
        }
    }
}

fn init_logging(cli: &Cli) {
    let default_level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut config = BenchConfig::new(cli.input.clone());
    config.exec = cli.exec_config();
    config.warmup_iters = cli.warmup;
    config.runs = cli.runs;
    config.seed = cli.seed;

    tracing::info!(
        input = %cli.input.display(),
        schedule = ?cli.schedule,
        threads = cli.threads,
        warmup = cli.warmup,
        runs = cli.runs,
        seed = cli.seed,
        "starting benchmark"
    );

    let mut arena = Arena::with_defaults();
    let mut harness = Harness::new(&mut arena, &config)
        .with_context(|| format!("cannot set up benchmark for '{}'", cli.input.display()))?;

    harness.warmup(&mut arena).context("warm-up failed")?;
    let results = harness.run(&mut arena).context("benchmark failed")?;
    let report = results.report(&arena);

    println!(
        "runs: {}  mean: {} us  stddev: {} us  min: {} us  max: {} us",
        report.runs, report.mean, report.stddev, report.min, report.max
    );

    if let Some(path) = &cli.output {
        save_report(&report, path)
            .with_context(|| format!("cannot save results to '{}'", path.display()))?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn argument_surface_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn schedule_flag_selects_executor_mode() {
        let cli = Cli::parse_from(["spmv-bench", "-i", "m.mtx", "--schedule", "sequential"]);
        assert_eq!(cli.exec_config().mode, ExecMode::Sequential);

        let cli = Cli::parse_from(["spmv-bench", "-i", "m.mtx", "--schedule", "guided", "-t", "8"]);
        let exec = cli.exec_config();
        assert_eq!(exec.mode, ExecMode::Threaded);
        assert_eq!(exec.threads, 8);
        assert!(matches!(exec.schedule, Schedule::Guided { .. }));
    }

    #[test]
    fn counts_default_to_documented_values() {
        let cli = Cli::parse_from(["spmv-bench", "-i", "m.mtx"]);
        assert_eq!(cli.warmup, BenchConfig::DEFAULT_WARMUP_ITERS);
        assert_eq!(cli.runs, BenchConfig::DEFAULT_RUNS);
        assert_eq!(cli.threads, 0);
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        let result = Cli::try_parse_from(["spmv-bench", "-i", "m.mtx", "-v", "-q"]);
        assert!(result.is_err());
    }
}
