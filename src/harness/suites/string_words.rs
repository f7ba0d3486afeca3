//! Test cases for the string-handling word group.

use crate::harness::{TestCase, TestKind, TestModule, WordTestSuite};

const CMOVE: &[TestCase] = &[
    TestCase {
        name: "basic",
        input: "HERE HERE 1+ 4 CMOVE",
        description: "copies a byte range low-to-high",
        kind: TestKind::Normal,
        should_error: false,
        implemented: true,
    },
    TestCase {
        name: "too_few_args",
        input: "HERE 5 CMOVE",
        description: "underflows with only two operands on the stack",
        kind: TestKind::ErrorCase,
        should_error: true,
        implemented: true,
    },
];

const COUNT: &[TestCase] = &[TestCase {
    name: "basic",
    input: "HERE 3 C, COUNT",
    description: "unpacks a length-prefixed string at HERE",
    kind: TestKind::Normal,
    should_error: false,
    implemented: true,
}];

const COMPARE: &[TestCase] = &[TestCase {
    name: "empty_vs_empty",
    input: "HERE 0 HERE 0 COMPARE",
    description: "two empty strings compare equal",
    kind: TestKind::EdgeCase,
    should_error: false,
    implemented: true,
}];

const SCAN: &[TestCase] = &[TestCase {
    name: "not_found",
    input: "HERE 0 65 SCAN",
    description: "scanning an empty range leaves it unchanged",
    kind: TestKind::EdgeCase,
    should_error: false,
    implemented: true,
}];

const SKIP: &[TestCase] = &[TestCase {
    name: "empty_range",
    input: "HERE 0 65 SKIP",
    description: "skipping over an empty range leaves it unchanged",
    kind: TestKind::EdgeCase,
    should_error: false,
    implemented: true,
}];

const SEARCH: &[TestCase] = &[TestCase {
    name: "empty_needle",
    input: "HERE 4 HERE 0 SEARCH",
    description: "an empty needle is always found, true flag",
    kind: TestKind::EdgeCase,
    should_error: false,
    implemented: true,
}];

pub const SUITES: &[WordTestSuite] = &[
    WordTestSuite { word: "CMOVE", cases: CMOVE },
    WordTestSuite { word: "COUNT", cases: COUNT },
    WordTestSuite { word: "COMPARE", cases: COMPARE },
    WordTestSuite { word: "SCAN", cases: SCAN },
    WordTestSuite { word: "SKIP", cases: SKIP },
    WordTestSuite { word: "SEARCH", cases: SEARCH },
];

pub const MODULE: TestModule = TestModule {
    name: "String",
    suites: SUITES,
};
