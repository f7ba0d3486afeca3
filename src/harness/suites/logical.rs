//! Test cases for the logical/comparison word group.

use crate::harness::{TestCase, TestKind, TestModule, WordTestSuite};

const EQ: &[TestCase] = &[
    TestCase {
        name: "true_case",
        input: "5 5 =",
        description: "equal cells leave the all-bits-set true flag",
        kind: TestKind::Normal,
        should_error: false,
        implemented: true,
    },
    TestCase {
        name: "false_case",
        input: "5 6 =",
        description: "unequal cells leave 0",
        kind: TestKind::Normal,
        should_error: false,
        implemented: true,
    },
];

const AND_OR_XOR: &[TestCase] = &[
    TestCase {
        name: "and_masks_bits",
        input: "6 3 AND",
        description: "bitwise AND",
        kind: TestKind::Normal,
        should_error: false,
        implemented: true,
    },
    TestCase {
        name: "xor_of_self_is_zero",
        input: "42 42 XOR",
        description: "XOR-ing a value with itself is zero",
        kind: TestKind::EdgeCase,
        should_error: false,
        implemented: true,
    },
];

const NOT: &[TestCase] = &[TestCase {
    name: "inverts_true",
    input: "-1 NOT",
    description: "NOT inverts a true flag to 0",
    kind: TestKind::Normal,
    should_error: false,
    implemented: true,
}];

pub const SUITES: &[WordTestSuite] = &[
    WordTestSuite { word: "=", cases: EQ },
    WordTestSuite { word: "AND OR XOR", cases: AND_OR_XOR },
    WordTestSuite { word: "NOT", cases: NOT },
];

pub const MODULE: TestModule = TestModule {
    name: "Logical",
    suites: SUITES,
};
