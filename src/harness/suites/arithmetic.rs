//! Test cases for the arithmetic word group.

use crate::harness::{TestCase, TestKind, TestModule, WordTestSuite};

const PLUS: &[TestCase] = &[
    TestCase {
        name: "basic",
        input: "2 3 +",
        description: "adds two positive cells",
        kind: TestKind::Normal,
        should_error: false,
        implemented: true,
    },
    TestCase {
        name: "overflow_wraps",
        input: "9223372036854775807 1 +",
        description: "signed overflow wraps rather than erroring",
        kind: TestKind::EdgeCase,
        should_error: false,
        implemented: true,
    },
];

const DIV: &[TestCase] = &[
    TestCase {
        name: "truncates_toward_zero",
        input: "-7 2 /",
        description: "division truncates toward zero",
        kind: TestKind::Normal,
        should_error: false,
        implemented: true,
    },
    TestCase {
        name: "by_zero",
        input: "1 0 /",
        description: "division by zero sets DivisionByZero",
        kind: TestKind::ErrorCase,
        should_error: true,
        implemented: true,
    },
];

const MOD: &[TestCase] = &[TestCase {
        name: "sign_follows_divisor",
        input: "-7 2 MOD",
        description: "MOD's sign matches the divisor",
        kind: TestKind::Normal,
        should_error: false,
        implemented: true,
}];

const ABS: &[TestCase] = &[TestCase {
        name: "min_cell_is_itself",
        input: "-9223372036854775808 ABS",
        description: "ABS of MIN_CELL returns MIN_CELL",
        kind: TestKind::EdgeCase,
        should_error: false,
        implemented: true,
}];

pub const SUITES: &[WordTestSuite] = &[
    WordTestSuite { word: "+", cases: PLUS },
    WordTestSuite { word: "/", cases: DIV },
    WordTestSuite { word: "MOD", cases: MOD },
    WordTestSuite { word: "ABS", cases: ABS },
];

pub const MODULE: TestModule = TestModule {
    name: "Arithmetic",
    suites: SUITES,
};
