//! Test cases for the defining-word group.

use crate::harness::{TestCase, TestKind, TestModule, WordTestSuite};

const COLON_SEMICOLON: &[TestCase] = &[
    TestCase {
        name: "basic_definition",
        input: ": SQUARE DUP * ; 5 SQUARE",
        description: "defines a colon word and executes it",
        kind: TestKind::Normal,
        should_error: false,
        implemented: true,
    },
    TestCase {
        name: "semicolon_outside_definition",
        input: ";",
        description: "; outside a definition is a compile-time error",
        kind: TestKind::ErrorCase,
        should_error: true,
        implemented: true,
    },
    TestCase {
        name: "nested_colon_rejected",
        input: ": OUTER : INNER ;",
        description: "a nested : inside a definition is rejected",
        kind: TestKind::ErrorCase,
        should_error: true,
        implemented: true,
    },
];

const VARIABLE: &[TestCase] = &[TestCase {
    name: "holds_a_mutable_cell",
    input: "VARIABLE V1 42 V1 ! V1 @",
    description: "VARIABLE allocates one cell, initialized to zero",
    kind: TestKind::Normal,
    should_error: false,
    implemented: true,
}];

const CONSTANT: &[TestCase] = &[TestCase {
    name: "pushes_bound_value",
    input: "42 CONSTANT ANSWER ANSWER",
    description: "CONSTANT binds a value permanently to a new word",
    kind: TestKind::Normal,
    should_error: false,
    implemented: true,
}];

const DOES: &[TestCase] = &[TestCase {
    name: "custom_runtime_behavior",
    input: ": CONST CREATE , DOES> @ ; 5 CONST FIVE FIVE",
    description: "DOES> replaces the runtime of the most recent CREATEd word",
    kind: TestKind::Normal,
    should_error: false,
    implemented: true,
}];

const BRACKETS: &[TestCase] = &[TestCase {
    name: "interpret_inside_a_definition",
    input: ": FOO 1 [ 2 2 + ] DROP ; 5 FOO",
    description: "[ drops to interpret mode so 2 2 + runs immediately; ] resumes compiling DROP into FOO",
    kind: TestKind::Normal,
    should_error: false,
    implemented: true,
}];

pub const SUITES: &[WordTestSuite] = &[
    WordTestSuite { word: ": ;", cases: COLON_SEMICOLON },
    WordTestSuite { word: "VARIABLE", cases: VARIABLE },
    WordTestSuite { word: "CONSTANT", cases: CONSTANT },
    WordTestSuite { word: "DOES>", cases: DOES },
    WordTestSuite { word: "[ ]", cases: BRACKETS },
];

pub const MODULE: TestModule = TestModule {
    name: "Defining",
    suites: SUITES,
};
