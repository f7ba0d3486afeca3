//! Test cases for the I/O word group.

use crate::harness::{TestCase, TestKind, TestModule, WordTestSuite};

const DOT: &[TestCase] = &[
    TestCase {
        name: "basic",
        input: "42 .",
        description: "prints a cell followed by a space",
        kind: TestKind::Normal,
        should_error: false,
        implemented: true,
    },
    TestCase {
        name: "empty_stack",
        input: ".",
        description: "underflows on an empty stack",
        kind: TestKind::ErrorCase,
        should_error: true,
        implemented: true,
    },
];

const CR_SPACE: &[TestCase] = &[TestCase {
    name: "basic",
    input: "CR SPACE 3 SPACES",
    description: "CR/SPACE/SPACES never touch the data stack",
    kind: TestKind::Normal,
    should_error: false,
    implemented: true,
}];

const EMIT: &[TestCase] = &[TestCase {
    name: "basic",
    input: "65 EMIT",
    description: "writes one character to the terminal",
    kind: TestKind::Normal,
    should_error: false,
    implemented: true,
}];

const TYPE: &[TestCase] = &[TestCase {
    name: "basic",
    input: "HERE 0 TYPE",
    description: "types a zero-length range without error",
    kind: TestKind::EdgeCase,
    should_error: false,
    implemented: true,
}];

const KEY: &[TestCase] = &[TestCase {
    name: "interactive",
    input: "KEY",
    description: "blocking terminal read, exercised outside the harness",
    kind: TestKind::EdgeCase,
    should_error: false,
    implemented: false,
}];

const EXPECT: &[TestCase] = &[TestCase {
    name: "interactive",
    input: "HERE 80 EXPECT",
    description: "blocking line read, exercised outside the harness",
    kind: TestKind::EdgeCase,
    should_error: false,
    implemented: false,
}];

const WORD: &[TestCase] = &[TestCase {
    name: "packs_counted_string",
    input: "32 WORD HELLO",
    description: "parses a blank-delimited token into a counted string",
    kind: TestKind::Normal,
    should_error: false,
    implemented: true,
}];

pub const SUITES: &[WordTestSuite] = &[
    WordTestSuite { word: ".", cases: DOT },
    WordTestSuite { word: "CR SPACE SPACES", cases: CR_SPACE },
    WordTestSuite { word: "EMIT", cases: EMIT },
    WordTestSuite { word: "TYPE", cases: TYPE },
    WordTestSuite { word: "KEY", cases: KEY },
    WordTestSuite { word: "EXPECT", cases: EXPECT },
    WordTestSuite { word: "WORD", cases: WORD },
];

pub const MODULE: TestModule = TestModule {
    name: "I/O",
    suites: SUITES,
};
