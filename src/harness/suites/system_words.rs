//! Test cases for the system word group.

use crate::harness::{TestCase, TestKind, TestModule, WordTestSuite};

const ABORT: &[TestCase] = &[TestCase {
    name: "clears_stacks",
    input: "1 2 3 ABORT",
    description: "clears both stacks and returns to interpret mode",
    kind: TestKind::Normal,
    should_error: false,
    implemented: true,
}];

const BYE: &[TestCase] = &[TestCase {
    name: "sets_exit_flag",
    input: "BYE",
    description: "requests process exit without raising an error",
    kind: TestKind::Normal,
    should_error: false,
    implemented: true,
}];

const COLD: &[TestCase] = &[TestCase {
    name: "removes_user_words",
    input: ": FOO 42 ; COLD",
    description: "restores the dictionary to its post-registration snapshot",
    kind: TestKind::Normal,
    should_error: false,
    implemented: true,
}];

const QUIT: &[TestCase] = &[TestCase {
    name: "resets_without_printing_ok",
    input: "1 2 QUIT",
    description: "resets both stacks and re-enters interpret mode",
    kind: TestKind::Normal,
    should_error: false,
    implemented: true,
}];

const WARM: &[TestCase] = &[TestCase {
    name: "keeps_user_words",
    input: ": FOO 42 ; WARM FOO",
    description: "clears stacks but leaves user-defined words intact",
    kind: TestKind::Normal,
    should_error: false,
    implemented: true,
}];

const ABORT_QUOTE: &[TestCase] = &[
    TestCase {
        name: "false_flag_continues",
        input: ": CHECK 0 ABORT\" should not abort\" 99 ; CHECK",
        description: "does not abort when the flag is false, execution continues",
        kind: TestKind::Normal,
        should_error: false,
        implemented: true,
    },
    TestCase {
        name: "true_flag_aborts",
        input: ": CHECK -1 ABORT\" boom\" 99 ; CHECK",
        description: "aborts and prints the message when the flag is true",
        kind: TestKind::EdgeCase,
        should_error: false,
        implemented: true,
    },
];

pub const SUITES: &[WordTestSuite] = &[
    WordTestSuite { word: "ABORT", cases: ABORT },
    WordTestSuite { word: "BYE", cases: BYE },
    WordTestSuite { word: "COLD", cases: COLD },
    WordTestSuite { word: "QUIT", cases: QUIT },
    WordTestSuite { word: "WARM", cases: WARM },
    WordTestSuite { word: "ABORT\"", cases: ABORT_QUOTE },
];

pub const MODULE: TestModule = TestModule {
    name: "System",
    suites: SUITES,
};
