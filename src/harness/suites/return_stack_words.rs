//! Test cases for the return-stack transfer word group.

use crate::harness::{TestCase, TestKind, TestModule, WordTestSuite};

const TO_R: &[TestCase] = &[
    TestCase {
        name: "round_trip",
        input: "5 >R R>",
        description: "moving a cell to the return stack and back is a no-op",
        kind: TestKind::Normal,
        should_error: false,
        implemented: true,
    },
    TestCase {
        name: "empty_stack",
        input: ">R",
        description: "underflows the data stack when empty",
        kind: TestKind::ErrorCase,
        should_error: true,
        implemented: true,
    },
];

const R_FETCH: &[TestCase] = &[TestCase {
    name: "basic",
    input: "5 >R R@ R>",
    description: "copies the top of the return stack without popping it",
    kind: TestKind::Normal,
    should_error: false,
    implemented: true,
}];

pub const SUITES: &[WordTestSuite] = &[
    WordTestSuite { word: ">R", cases: TO_R },
    WordTestSuite { word: "R@", cases: R_FETCH },
];

pub const MODULE: TestModule = TestModule {
    name: "Return Stack",
    suites: SUITES,
};
