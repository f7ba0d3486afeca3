//! Test cases for the memory-access word group.

use crate::harness::{TestCase, TestKind, TestModule, WordTestSuite};

const FETCH_STORE: &[TestCase] = &[
    TestCase {
        name: "round_trip",
        input: "HERE 42 OVER ! @",
        description: "storing then fetching the same address returns the stored value",
        kind: TestKind::Normal,
        should_error: false,
        implemented: true,
    },
    TestCase {
        name: "out_of_bounds",
        input: "99999999 @",
        description: "fetching outside the memory region is an error",
        kind: TestKind::ErrorCase,
        should_error: true,
        implemented: true,
    },
];

const COMMA: &[TestCase] = &[TestCase {
    name: "allocates_one_cell",
    input: "HERE 7 , CELL+ HERE =",
    description: ", advances HERE by exactly one cell",
    kind: TestKind::Normal,
    should_error: false,
    implemented: true,
}];

const ALLOT: &[TestCase] = &[TestCase {
    name: "advances_here",
    input: "HERE 16 ALLOT HERE SWAP - 16 =",
    description: "ALLOT advances HERE by the requested byte count",
    kind: TestKind::Normal,
    should_error: false,
    implemented: true,
}];

const FILL: &[TestCase] = &[TestCase {
    name: "fills_with_byte",
    input: "HERE 4 ALLOT HERE 4 65 FILL HERE C@",
    description: "FILL writes the given byte across the whole region",
    kind: TestKind::Normal,
    should_error: false,
    implemented: true,
}];

pub const SUITES: &[WordTestSuite] = &[
    WordTestSuite { word: "@ !", cases: FETCH_STORE },
    WordTestSuite { word: ",", cases: COMMA },
    WordTestSuite { word: "ALLOT", cases: ALLOT },
    WordTestSuite { word: "FILL", cases: FILL },
];

pub const MODULE: TestModule = TestModule {
    name: "Memory",
    suites: SUITES,
};
