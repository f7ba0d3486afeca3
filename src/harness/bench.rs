//! Benchmark mode: warm once, untimed, then
//! run the target `K` times under a monotonic clock, reporting runs/sec
//! and microseconds/run.
//!
//! A warmup-then-iterate loop: run the target once untimed, then `K`
//! times under `std::time::Instant`, reporting runs/sec and
//! microseconds/run.

use super::{run_test_suite, TestModule, TestStats};
use crate::vm::Vm;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

static ITERATIONS: AtomicUsize = AtomicUsize::new(0);

/// `enable_benchmark_mode(iterations)` — must be called before
/// the `run_*` entry point it's meant to time.
pub fn enable_benchmark_mode(iterations: usize) {
    ITERATIONS.store(iterations, Ordering::SeqCst);
}

pub fn benchmark_iterations() -> Option<usize> {
    let n = ITERATIONS.load(Ordering::SeqCst);
    if n > 0 {
        Some(n)
    } else {
        None
    }
}

/// Run every suite in `modules` once untimed, then `iterations` times
/// timed, printing a runs/sec and µs/run summary. Returns the process
/// exit code.
pub fn run_benchmark(vm: &mut Vm, modules: &[TestModule], iterations: usize) -> i32 {
    let mut warm_failed = false;
    for module in modules {
        for suite in module.suites {
            let stats = run_test_suite(vm, suite);
            warm_failed |= stats.fail > 0;
        }
    }

    let start = Instant::now();
    let mut total = TestStats::default();
    for _ in 0..iterations {
        for module in modules {
            for suite in module.suites {
                total.merge(run_test_suite(vm, suite));
            }
        }
    }
    let elapsed = start.elapsed();
    let runs_per_sec = iterations as f64 / elapsed.as_secs_f64().max(f64::EPSILON);
    let us_per_run = elapsed.as_micros() as f64 / iterations as f64;

    println!(
        "benchmark: {iterations} iterations in {elapsed:?} ({runs_per_sec:.1} runs/sec, {us_per_run:.2} us/run)"
    );

    if warm_failed || total.fail > 0 {
        1
    } else {
        0
    }
}
