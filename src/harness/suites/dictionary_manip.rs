//! Test cases for the dictionary-manipulation word group.

use crate::harness::{TestCase, TestKind, TestModule, WordTestSuite};

const CREATE: &[TestCase] = &[TestCase {
    name: "executes_to_its_body",
    input: "CREATE FOO FOO",
    description: "a CREATEd word pushes its parameter-field address",
    kind: TestKind::Normal,
    should_error: false,
    implemented: true,
}];

const FORGET: &[TestCase] = &[
    TestCase {
        name: "removes_and_rewinds",
        input: "CREATE FOO FORGET FOO",
        description: "removes the word and rewinds HERE to its creation point",
        kind: TestKind::Normal,
        should_error: false,
        implemented: true,
    },
    TestCase {
        name: "unknown_word",
        input: "FORGET NOSUCHWORD",
        description: "sets WordNotFound for an unknown name",
        kind: TestKind::ErrorCase,
        should_error: true,
        implemented: true,
    },
    TestCase {
        name: "refuses_system_words",
        input: "FORGET DUP",
        description: "refuses to forget a system-origin entry",
        kind: TestKind::ErrorCase,
        should_error: true,
        implemented: true,
    },
];

const IMMEDIATE: &[TestCase] = &[TestCase {
    name: "marks_latest",
    input: ": FOO 1 ; IMMEDIATE",
    description: "toggles IMMEDIATE on the most recent definition",
    kind: TestKind::Normal,
    should_error: false,
    implemented: true,
}];

const SMUDGE: &[TestCase] = &[TestCase {
    name: "toggles_visibility",
    input: ": FOO 1 ; SMUDGE",
    description: "toggles the smudge bit on the most recent definition",
    kind: TestKind::Normal,
    should_error: false,
    implemented: true,
}];

const HIDDEN: &[TestCase] = &[TestCase {
    name: "hides_a_named_word",
    input: "CREATE FOO HIDDEN FOO",
    description: "permanently hides a named word from FIND",
    kind: TestKind::Normal,
    should_error: false,
    implemented: true,
}];

pub const SUITES: &[WordTestSuite] = &[
    WordTestSuite { word: "CREATE", cases: CREATE },
    WordTestSuite { word: "FORGET", cases: FORGET },
    WordTestSuite { word: "IMMEDIATE", cases: IMMEDIATE },
    WordTestSuite { word: "SMUDGE", cases: SMUDGE },
    WordTestSuite { word: "HIDDEN", cases: HIDDEN },
];

pub const MODULE: TestModule = TestModule {
    name: "Dictionary Manipulation",
    suites: SUITES,
};
