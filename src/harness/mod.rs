//! The FORTH-level regression test harness, a first-class
//! part of the shipped binary's CLI surface, not a `cargo
//! test` target.
//!
//! A `WordTestSuite` is an array of `TestCase`s, each a
//! name/input/description/kind/should_error/implemented tuple;
//! `&'static [TestCase]`'s length stands in for the sentinel-terminated
//! arrays a C test harness would use.

mod bench;
pub mod modules;
mod report;
pub mod suites;

pub use bench::{benchmark_iterations, enable_benchmark_mode};
pub use modules::MODULES;
pub use report::run_break_me_tests;

use crate::cell::Cell;
use crate::interpreter::interpret;
use crate::vm::Vm;
use std::sync::atomic::{AtomicBool, Ordering};

/// Classifies a `TestCase` the way `test_common.h`'s `TestCaseType` does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestKind {
    Normal,
    EdgeCase,
    ErrorCase,
}

pub struct TestCase {
    pub name: &'static str,
    pub input: &'static str,
    pub description: &'static str,
    pub kind: TestKind,
    pub should_error: bool,
    /// Interactive/unimplemented cases are skipped rather than run.
    pub implemented: bool,
}

pub struct WordTestSuite {
    pub word: &'static str,
    pub cases: &'static [TestCase],
}

pub struct TestModule {
    pub name: &'static str,
    pub suites: &'static [WordTestSuite],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Pass,
    Fail,
    Skip,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TestStats {
    pub pass: usize,
    pub fail: usize,
    pub skip: usize,
}

impl TestStats {
    pub fn total(&self) -> usize {
        self.pass + self.fail + self.skip
    }

    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Pass => self.pass += 1,
            Outcome::Fail => self.fail += 1,
            Outcome::Skip => self.skip += 1,
        }
    }

    fn merge(&mut self, other: TestStats) {
        self.pass += other.pass;
        self.fail += other.fail;
        self.skip += other.skip;
    }
}

/// `global_test_stats`'s `fail_fast` companion: settable
/// once from the CLI, read by every `run_single_test` call thereafter.
static FAIL_FAST: AtomicBool = AtomicBool::new(false);

pub fn set_fail_fast(enabled: bool) {
    FAIL_FAST.store(enabled, Ordering::SeqCst);
}

pub fn assert_stack_depth(vm: &Vm, n: usize) -> bool {
    vm.data_stack.depth() == n
}

pub fn assert_stack_top(vm: &Vm, v: Cell) -> bool {
    vm.data_stack.depth() > 0 && vm.data_stack.peek(0) == Ok(v)
}

pub fn assert_vm_error(vm: &Vm, expect_error: bool) -> bool {
    vm.error.is_some() == expect_error
}

/// Run one test case, restoring VM state unconditionally afterward.
pub fn run_single_test(vm: &mut Vm, word_name: &str, case: &TestCase) -> Outcome {
    if !case.implemented {
        return Outcome::Skip;
    }
    vm.error = None;
    interpret(vm, case.input);
    let outcome = match (case.should_error, vm.error.is_some()) {
        (true, true) => Outcome::Pass,
        (true, false) => Outcome::Fail,
        (false, true) => Outcome::Fail,
        (false, false) => Outcome::Pass,
    };
    // Unconditional restore — stronger than any
    // snapshot on purpose, since stress cases may corrupt higher regions.
    let saved = vm.save_vm_state();
    vm.restore_vm_state(saved);

    if outcome == Outcome::Fail && FAIL_FAST.load(Ordering::SeqCst) {
        dump_and_exit(vm, word_name, case);
    }
    outcome
}

fn dump_and_exit(vm: &Vm, word_name: &str, case: &TestCase) -> ! {
    eprintln!("=== FAIL-FAST: {word_name} / {} ===", case.name);
    eprintln!(" input: {}", case.input);
    eprintln!(" description: {}", case.description);
    eprintln!(" should_error: {}", case.should_error);
    eprintln!(" vm.error: {:?}", vm.error);
    eprintln!(" data stack depth: {}", vm.data_stack.depth());
    eprintln!(" return stack depth: {}", vm.return_stack.depth());
    std::process::exit(1);
}

/// Run every case in a single word's test suite, restoring dictionary
/// state afterward.
pub fn run_test_suite(vm: &mut Vm, suite: &WordTestSuite) -> TestStats {
    let snapshot = vm.save_dict_state();
    let mut stats = TestStats::default();
    for case in suite.cases {
        let outcome = run_single_test(vm, suite.word, case);
        stats.record(outcome);
    }
    vm.restore_dict_state(snapshot);
    stats
}

fn run_module(vm: &mut Vm, module: &TestModule) -> TestStats {
    println!("--- {} ---", module.name);
    let mut stats = TestStats::default();
    for suite in module.suites {
        stats.merge(run_test_suite(vm, suite));
    }
    println!(
        "{}: {} pass, {} fail, {} skip",
        module.name, stats.pass, stats.fail, stats.skip
    );
    stats
}

/// Run every registered module in POST order; switches to benchmark
/// mode if iterations were requested.
pub fn run_all_tests() -> i32 {
    let mut vm = Vm::new();
    if let Some(iterations) = benchmark_iterations() {
        return bench::run_benchmark(&mut vm, MODULES, iterations);
    }
    let mut total = TestStats::default();
    for module in MODULES {
        total.merge(run_module(&mut vm, module));
    }
    print_summary(&total);
    if total.fail > 0 {
        1
    } else {
        0
    }
}

/// Run a single named module's test suites.
pub fn run_module_tests(name: &str) -> i32 {
    let mut vm = Vm::new();
    let Some(module) = MODULES.iter().find(|m| m.name.eq_ignore_ascii_case(name)) else {
        eprintln!("no such test module: {name}");
        return 1;
    };
    if let Some(iterations) = benchmark_iterations() {
        return bench::run_benchmark(&mut vm, std::slice::from_ref(module), iterations);
    }
    let stats = run_module(&mut vm, module);
    print_summary(&stats);
    if stats.fail > 0 {
        1
    } else {
        0
    }
}

/// `run_word_tests(name)` — searches every registered suite for
/// a matching word name, across all modules.
pub fn run_word_tests(name: &str) -> i32 {
    let mut vm = Vm::new();
    let mut stats = TestStats::default();
    let mut found = false;
    for module in MODULES {
        for suite in module.suites {
            if suite.word.eq_ignore_ascii_case(name) {
                found = true;
                println!("--- {} / {} ---", module.name, suite.word);
                stats.merge(run_test_suite(&mut vm, suite));
            }
        }
    }
    if !found {
        eprintln!("no test suite registered for word: {name}");
        return 1;
    }
    print_summary(&stats);
    if stats.fail > 0 {
        1
    } else {
        0
    }
}

fn print_summary(stats: &TestStats) {
    println!(
        "=== {} total: {} pass, {} fail, {} skip ===",
        stats.total(),
        stats.pass,
        stats.fail,
        stats.skip
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case(input: &'static str, should_error: bool) -> TestCase {
        TestCase {
            name: "case",
            input,
            description: "",
            kind: TestKind::Normal,
            should_error,
            implemented: true,
        }
    }

    #[test]
    fn passing_case_reports_pass() {
        let mut vm = Vm::new();
        let c = case("1 1 +", false);
        assert_eq!(run_single_test(&mut vm, "+", &c), Outcome::Pass);
    }

    #[test]
    fn unexpected_error_reports_fail() {
        let mut vm = Vm::new();
        let c = case("1 0 /", false);
        assert_eq!(run_single_test(&mut vm, "/", &c), Outcome::Fail);
    }

    #[test]
    fn expected_error_reports_pass() {
        let mut vm = Vm::new();
        let c = case("1 0 /", true);
        assert_eq!(run_single_test(&mut vm, "/", &c), Outcome::Pass);
    }

    #[test]
    fn unimplemented_case_is_skipped() {
        let mut vm = Vm::new();
        let mut c = case("KEY", false);
        c.implemented = false;
        assert_eq!(run_single_test(&mut vm, "KEY", &c), Outcome::Skip);
    }

    #[test]
    fn run_single_test_leaves_the_vm_clean_after_a_stress_case() {
        let mut vm = Vm::new();
        let c = case("1 2 3 4 5", false);
        run_single_test(&mut vm, "dummy", &c);
        assert_eq!(vm.data_stack.depth(), 0);
        assert_eq!(vm.error, None);
    }
}
