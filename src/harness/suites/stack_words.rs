//! Test cases for the data-stack word group.

use crate::harness::{TestCase, TestKind, TestModule, WordTestSuite};

const DUP: &[TestCase] = &[
    TestCase {
        name: "basic",
        input: "5 DUP",
        description: "duplicates the top cell",
        kind: TestKind::Normal,
        should_error: false,
        implemented: true,
    },
    TestCase {
        name: "negative",
        input: "-42 DUP",
        description: "duplicates a negative cell",
        kind: TestKind::Normal,
        should_error: false,
        implemented: true,
    },
    TestCase {
        name: "empty_stack",
        input: "DUP",
        description: "underflows on an empty stack",
        kind: TestKind::ErrorCase,
        should_error: true,
        implemented: true,
    },
];

const DROP: &[TestCase] = &[
    TestCase {
        name: "basic",
        input: "5 7 DROP",
        description: "drops the top cell, leaving the one below",
        kind: TestKind::Normal,
        should_error: false,
        implemented: true,
    },
    TestCase {
        name: "empty_stack",
        input: "DROP",
        description: "underflows on an empty stack",
        kind: TestKind::ErrorCase,
        should_error: true,
        implemented: true,
    },
];

const SWAP: &[TestCase] = &[
    TestCase {
        name: "basic",
        input: "1 2 SWAP",
        description: "exchanges the top two cells",
        kind: TestKind::Normal,
        should_error: false,
        implemented: true,
    },
    TestCase {
        name: "one_item",
        input: "1 SWAP",
        description: "underflows with only one cell",
        kind: TestKind::ErrorCase,
        should_error: true,
        implemented: true,
    },
];

const OVER: &[TestCase] = &[TestCase {
    name: "basic",
    input: "1 2 OVER",
    description: "copies the second cell to the top",
    kind: TestKind::Normal,
    should_error: false,
    implemented: true,
}];

const ROT: &[TestCase] = &[TestCase {
    name: "basic",
    input: "1 2 3 ROT",
    description: "rotates the third cell to the top",
    kind: TestKind::Normal,
    should_error: false,
    implemented: true,
}];

const PICK: &[TestCase] = &[TestCase {
    name: "zero_is_dup",
    input: "7 0 PICK",
    description: "0 PICK behaves like DUP",
    kind: TestKind::EdgeCase,
    should_error: false,
    implemented: true,
}];

const ROLL: &[TestCase] = &[TestCase {
    name: "basic",
    input: "1 2 3 2 ROLL",
    description: "rolls the third cell to the top",
    kind: TestKind::Normal,
    should_error: false,
    implemented: true,
}];

const DEPTH: &[TestCase] = &[TestCase {
    name: "after_pushes",
    input: "1 2 3 DEPTH",
    description: "reports the number of cells pushed",
    kind: TestKind::Normal,
    should_error: false,
    implemented: true,
}];

pub const SUITES: &[WordTestSuite] = &[
    WordTestSuite { word: "DUP", cases: DUP },
    WordTestSuite { word: "DROP", cases: DROP },
    WordTestSuite { word: "SWAP", cases: SWAP },
    WordTestSuite { word: "OVER", cases: OVER },
    WordTestSuite { word: "ROT", cases: ROT },
    WordTestSuite { word: "PICK", cases: PICK },
    WordTestSuite { word: "ROLL", cases: ROLL },
    WordTestSuite { word: "DEPTH", cases: DEPTH },
];

pub const MODULE: TestModule = TestModule {
    name: "Stack",
    suites: SUITES,
};
