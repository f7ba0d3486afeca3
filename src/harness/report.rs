//! The "break-me" mode: run every module sequentially,
//! then emit a structured markdown report at `docs/BREAK_ME_REPORT.md`.
//!
//! Trimmed to the fields a CI-consumable report actually needs;
//! ASCII-art banners and easter-egg sections stay out of scope.

use super::{run_test_suite, TestStats, MODULES};
use crate::vm::Vm;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

/// `run_break_me_tests` — exit code 0 on a clean pass, 1 if any
/// case failed or the report file could not be created.
pub fn run_break_me_tests() -> i32 {
    let mut vm = Vm::new();
    let start = Instant::now();
    let mut total = TestStats::default();
    for module in MODULES {
        for suite in module.suites {
            total.merge(run_test_suite(&mut vm, suite));
        }
    }
    let duration = start.elapsed();

    let report = render(&total, duration);
    match write_report(&report) {
        Ok(()) => {
            if total.fail > 0 {
                1
            } else {
                0
            }
        }
        Err(e) => {
            eprintln!("could not write break-me report: {e}");
            1
        }
    }
}

fn write_report(contents: &str) -> std::io::Result<()> {
    std::fs::create_dir_all("docs")?;
    std::fs::write("docs/BREAK_ME_REPORT.md", contents)
}

fn render(stats: &TestStats, duration: std::time::Duration) -> String {
    let generated = SystemTime::now()
    .duration_since(UNIX_EPOCH)
    .map(|d| d.as_secs())
    .unwrap_or(0);
    let throughput = stats.total() as f64 / duration.as_secs_f64().max(f64::EPSILON);
    let status = if stats.fail > 0 { "FAIL" } else { "PASS" };

    format!(
        "# StarForth Break-Me Report\n\n\
        - Name: StarForth\n\
        - Author: {}\n\
        - Date (unix epoch seconds): {generated}\n\
        - License: {}\n\
        - Status: {status}\n\n\
        ## Executive Summary\n\
        - Generated (unix epoch seconds): {generated}\n\
        - Mode: break-me\n\n\
        ## Performance\n\
        - Duration: {duration:?}\n\
        - Total tests: {}\n\
        - Pass: {}\n\
        - Fail: {}\n\
        - Skip: {}\n\
        - Throughput: {throughput:.1} tests/sec\n\n\
        ## System\n\
        - Architecture: {}\n\
        - Standard: FORTH-79 plus StarForth extensions\n\
        - Cell size: {} bytes\n\
        - Stack size: {} cells\n\
        - Memory size: {} bytes\n",
        env!("CARGO_PKG_AUTHORS"),
        env!("CARGO_PKG_LICENSE"),
        stats.total(),
        stats.pass,
        stats.fail,
        stats.skip,
        std::env::consts::ARCH,
        std::mem::size_of::<crate::cell::Cell>(),
        crate::vm::STACK_SIZE,
        crate::vm::VM_MEMORY_SIZE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_includes_every_required_field() {
        let stats = TestStats {
            pass: 10,
            fail: 1,
            skip: 2,
        };
        let text = render(&stats, std::time::Duration::from_millis(500));
        for needle in [
            "Name:",
            "Author:",
            "Date",
            "License:",
            "Status: FAIL",
            "Mode: break-me",
            "Generated",
            "Duration",
            "Total tests: 13",
            "Pass: 10",
            "Fail: 1",
            "Skip: 2",
            "Throughput",
            "Architecture",
            "Standard:",
            "Cell size",
            "Stack size",
            "Memory size",
        ] {
            assert!(text.contains(needle), "missing {needle:?} in report:\n{text}");
        }
    }
}
