//! Test cases for the double-precision word group.

use crate::harness::{TestCase, TestKind, TestModule, WordTestSuite};

const D_PLUS: &[TestCase] = &[TestCase {
    name: "basic",
    input: "1 0 2 0 D+",
    description: "adds two double-cell quantities",
    kind: TestKind::Normal,
    should_error: false,
    implemented: true,
}];

const D_MINUS: &[TestCase] = &[TestCase {
    name: "basic",
    input: "5 0 2 0 D-",
    description: "subtracts two double-cell quantities",
    kind: TestKind::Normal,
    should_error: false,
    implemented: true,
}];

const DNEGATE: &[TestCase] = &[TestCase {
    name: "basic",
    input: "5 0 DNEGATE",
    description: "negates a double-cell quantity",
    kind: TestKind::Normal,
    should_error: false,
    implemented: true,
}];

const DABS: &[TestCase] = &[TestCase {
    name: "negative",
    input: "5 0 DNEGATE DABS",
    description: "absolute value of a negative double",
    kind: TestKind::Normal,
    should_error: false,
    implemented: true,
}];

const D_EQ: &[TestCase] = &[TestCase {
    name: "equal",
    input: "3 0 3 0 D=",
    description: "true when both doubles are equal",
    kind: TestKind::Normal,
    should_error: false,
    implemented: true,
}];

const S_TO_D: &[TestCase] = &[TestCase {
    name: "positive",
    input: "5 S>D",
    description: "widens a single cell to a double, sign-extended",
    kind: TestKind::Normal,
    should_error: false,
    implemented: true,
}];

pub const SUITES: &[WordTestSuite] = &[
    WordTestSuite { word: "D+", cases: D_PLUS },
    WordTestSuite { word: "D-", cases: D_MINUS },
    WordTestSuite { word: "DNEGATE", cases: DNEGATE },
    WordTestSuite { word: "DABS", cases: DABS },
    WordTestSuite { word: "D=", cases: D_EQ },
    WordTestSuite { word: "S>D", cases: S_TO_D },
];

pub const MODULE: TestModule = TestModule {
    name: "Double",
    suites: SUITES,
};
