//! The fixed POST module order:
//! earlier modules form a power-on self-test that later modules assume
//! already passes.

use super::TestModule;
use super::suites;

pub const MODULES: &[TestModule] = &[
    suites::stack_words::MODULE,
    suites::return_stack_words::MODULE,
    suites::memory_words::MODULE,
    suites::arithmetic::MODULE,
    suites::logical::MODULE,
    suites::mixed_arithmetic::MODULE,
    suites::double::MODULE,
    suites::format::MODULE,
    suites::string_words::MODULE,
    suites::io::MODULE,
    suites::block_words::MODULE,
    suites::dictionary_words::MODULE,
    suites::dictionary_manip::MODULE,
    suites::vocabulary_words::MODULE,
    suites::system_words::MODULE,
    suites::defining::MODULE,
    suites::control::MODULE,
    suites::starforth_ext::MODULE,
];
