//! StarForth's CLI entry point: dispatches to the test
//! harness's `run_all_tests`/`run_module_tests`/`run_word_tests`/
//! `run_break_me_tests` entry points, or falls into an interactive
//! read-interpret-print loop over stdin.

use starforth::config::{Action, Config};
use starforth::harness;
use starforth::interpreter::interpret;
use starforth::vm::Vm;
use std::io::{self, BufRead, Write};

fn main() {
    let mut config = Config::new();
    config.process_args();

    if let Some(iterations) = config.benchmark_iterations {
        harness::enable_benchmark_mode(iterations);
    }
    if config.fail_fast {
        harness::set_fail_fast(true);
    }

    let exit_code = match &config.action {
        Action::RunAllTests => harness::run_all_tests(),
        Action::RunModule(name) => harness::run_module_tests(name),
        Action::RunWord(name) => harness::run_word_tests(name),
        Action::BreakMe => harness::run_break_me_tests(),
        Action::Repl => run_repl(&config),
    };

    std::process::exit(exit_code);
}

/// The interactive shell: loads `--file` (if given), then reads lines
/// from stdin until `BYE` or end-of-input, printing `ok` after every
/// clean line the way a classic FORTH shell does.
fn run_repl(config: &Config) -> i32 {
    let mut vm = Vm::new();
    vm.msg.set_level(config.debug_level);

    if !config.loaded_file.is_empty() {
        match std::fs::read_to_string(&config.loaded_file) {
            Ok(source) => {
                interpret(&mut vm, &source);
                report_error(&mut vm);
            }
            Err(e) => {
                eprintln!("could not read {}: {e}", config.loaded_file);
                return 1;
            }
        }
    }

    if vm.bye_requested {
        return 0;
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        interpret(&mut vm, &line);
        report_error(&mut vm);
        if vm.bye_requested {
            break;
        }
        print!("ok ");
        let _ = io::stdout().flush();
    }
    println!();
    0
}

/// Translate a pending `vm.error` to a human-readable message, print
/// it, and clear it so the next line starts fresh.
fn report_error(vm: &mut Vm) {
    if let Some(err) = vm.error {
        eprintln!("error: {err}");
        vm.error = None;
    }
}
