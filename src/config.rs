//! System configuration and command-line processing, module "Configuration / CLI".
//!
//! A `Config` struct built with `clap::Command`, populated by
//! `process_args`, covering the harness entry points (`--module`,
//! `--word`, `--benchmark`, `--break-me`, `--fail-fast`) alongside
//! `--debuglevel`/`--file`/`--no-core`.

use crate::messages::DebugLevel;
use clap::{arg, Command};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DEFAULT_CORE: [&str; 3] = ["./corelib.fs", "~/.starforth/corelib.fs", "src/forth/corelib.fs"];

/// What the CLI asked the process to do, once `--file`/harness flags
/// are resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// `run_all_tests`.
    RunAllTests,
    /// `run_module_tests(name)`.
    RunModule(String),
    /// `run_word_tests(name)`.
    RunWord(String),
    /// `run_break_me_tests`.
    BreakMe,
    /// Load `--file`, then fall into the interactive REPL unless the
    /// file itself requested `BYE`.
    Repl,
}

pub struct Config {
    pub debug_level: DebugLevel,
    pub loaded_file: String,
    pub core_file: String,
    pub no_core: bool,
    pub fail_fast: bool,
    pub benchmark_iterations: Option<usize>,
    pub action: Action,
}

impl Config {
    pub fn new() -> Config {
        Config {
            debug_level: DebugLevel::Warning,
            loaded_file: String::new(),
            core_file: DEFAULT_CORE[0].to_owned(),
            no_core: false,
            fail_fast: false,
            benchmark_iterations: None,
            action: Action::Repl,
        }
    }

    /// `process_args` — the CLI surface: `--debuglevel`, `--file`,
    /// `--module NAME`, `--word NAME`, `--benchmark N`, `--break-me`,
    /// `--fail-fast`, `--no-core`.
    pub fn process_args(&mut self) -> &Config {
        let arguments = Command::new("starforth")
        .version(VERSION)
        .author("Robert A. James")
        .about("A FORTH-79 virtual machine runtime with a block-oriented dictionary")
        .arg(
            arg!(--debuglevel <VALUE>)
            .required(false)
            .value_parser(["error", "warning", "info", "test", "debug"]),
        )
        .arg(arg!(-f --file <VALUE>).required(false))
        .arg(arg!(-l --library <VALUE>).required(false))
        .arg(arg!(-n --nocore).required(false))
        .arg(arg!(--module <NAME>).required(false))
        .arg(arg!(--word <NAME>).required(false))
        .arg(arg!(--benchmark <N>).required(false))
        .arg(arg!(--"break-me").required(false))
        .arg(arg!(--"fail-fast").required(false))
        .get_matches();

        if let Some(level) = arguments.get_one::<String>("debuglevel") {
            self.debug_level = match level.as_str() {
                "error" => DebugLevel::Error,
                "info" => DebugLevel::Info,
                "test" => DebugLevel::Test,
                "debug" => DebugLevel::Debug,
                _ => DebugLevel::Warning,
            };
        }

        if let Some(lib) = arguments.get_one::<String>("library") {
            self.core_file = lib.to_string();
        }

        if arguments.get_flag("nocore") {
            self.no_core = true;
        }

        if let Some(file) = arguments.get_one::<String>("file") {
            self.loaded_file = file.clone();
        }

        if arguments.get_flag("fail-fast") {
            self.fail_fast = true;
        }

        if let Some(n) = arguments.get_one::<String>("benchmark") {
            self.benchmark_iterations = n.parse::<usize>().ok();
        }

        self.action = if arguments.get_flag("break-me") {
            Action::BreakMe
        } else if let Some(name) = arguments.get_one::<String>("word") {
            Action::RunWord(name.clone())
        } else if let Some(name) = arguments.get_one::<String>("module") {
            Action::RunModule(name.clone())
        } else if self.benchmark_iterations.is_some() {
            Action::RunAllTests
        } else {
            Action::Repl
        };

        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_the_repl() {
        let config = Config::new();
        assert_eq!(config.action, Action::Repl);
        assert_eq!(config.debug_level, DebugLevel::Warning);
        assert!(!config.fail_fast);
    }
}
