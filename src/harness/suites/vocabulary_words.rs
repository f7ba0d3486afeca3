//! Test cases for the vocabulary search-order word group.

use crate::harness::{TestCase, TestKind, TestModule, WordTestSuite};

const VOCABULARY: &[TestCase] = &[TestCase {
    name: "defines_and_selects",
    input: "VOCABULARY EXTRA EXTRA",
    description: "defines a new vocabulary and executing its name selects it",
    kind: TestKind::Normal,
    should_error: false,
    implemented: true,
}];

const DEFINITIONS: &[TestCase] = &[TestCase {
    name: "sets_current_to_context",
    input: "VOCABULARY EXTRA EXTRA DEFINITIONS FORTH",
    description: "DEFINITIONS makes CURRENT follow CONTEXT",
    kind: TestKind::Normal,
    should_error: false,
    implemented: true,
}];

const FORTH: &[TestCase] = &[TestCase {
    name: "selects_root",
    input: "VOCABULARY EXTRA EXTRA FORTH",
    description: "FORTH re-selects the root vocabulary",
    kind: TestKind::Normal,
    should_error: false,
    implemented: true,
}];

const CONTEXT_CURRENT: &[TestCase] = &[TestCase {
    name: "basic",
    input: "CONTEXT CURRENT",
    description: "CONTEXT and CURRENT report the active vocabulary selection",
    kind: TestKind::Normal,
    should_error: false,
    implemented: true,
}];

const ORDER: &[TestCase] = &[TestCase {
    name: "basic",
    input: "ORDER",
    description: "lists the active search order",
    kind: TestKind::Normal,
    should_error: false,
    implemented: true,
}];

pub const SUITES: &[WordTestSuite] = &[
    WordTestSuite { word: "VOCABULARY", cases: VOCABULARY },
    WordTestSuite { word: "DEFINITIONS", cases: DEFINITIONS },
    WordTestSuite { word: "FORTH", cases: FORTH },
    WordTestSuite { word: "CONTEXT CURRENT", cases: CONTEXT_CURRENT },
    WordTestSuite { word: "ORDER", cases: ORDER },
];

pub const MODULE: TestModule = TestModule {
    name: "Vocabulary",
    suites: SUITES,
};
