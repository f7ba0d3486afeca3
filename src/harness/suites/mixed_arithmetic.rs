//! Test cases for the mixed single/double arithmetic word group.

use crate::harness::{TestCase, TestKind, TestModule, WordTestSuite};

const M_STAR: &[TestCase] = &[TestCase {
    name: "widens_to_double",
    input: "2000000000 2 M*",
    description: "two large singles multiply into a double without overflowing",
    kind: TestKind::EdgeCase,
    should_error: false,
    implemented: true,
}];

const STAR_SLASH: &[TestCase] = &[
    TestCase {
        name: "scales_via_double_intermediate",
        input: "1000000000 3 2 */",
        description: "*/'s double-precision intermediate avoids overflow",
        kind: TestKind::EdgeCase,
        should_error: false,
        implemented: true,
    },
    TestCase {
        name: "by_zero",
        input: "1 1 0 */",
        description: "division by zero sets DivisionByZero",
        kind: TestKind::ErrorCase,
        should_error: true,
        implemented: true,
    },
];

pub const SUITES: &[WordTestSuite] = &[
    WordTestSuite { word: "M*", cases: M_STAR },
    WordTestSuite { word: "*/", cases: STAR_SLASH },
];

pub const MODULE: TestModule = TestModule {
    name: "Mixed Arithmetic",
    suites: SUITES,
};
