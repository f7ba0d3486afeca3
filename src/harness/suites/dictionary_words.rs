//! Test cases for the dictionary-lookup word group.

use crate::harness::{TestCase, TestKind, TestModule, WordTestSuite};

const FIND: &[TestCase] = &[
    TestCase {
        name: "found",
        input: "32 WORD DUP FIND",
        description: "FIND locates an unknown token's counted string, leaving 0",
        kind: TestKind::Normal,
        should_error: false,
        implemented: true,
    },
];

const TICK: &[TestCase] = &[
    TestCase {
        name: "known_word",
        input: "' DUP",
        description: "resolves a known word to its execution token",
        kind: TestKind::Normal,
        should_error: false,
        implemented: true,
    },
    TestCase {
        name: "unknown_word",
        input: "' NOSUCHWORD",
        description: "sets WordNotFound for an unknown name",
        kind: TestKind::ErrorCase,
        should_error: true,
        implemented: true,
    },
];

const TO_BODY: &[TestCase] = &[TestCase {
    name: "basic",
    input: "CREATE FOO ' FOO >BODY",
    description: "leaves the parameter-field address of a CREATEd word",
    kind: TestKind::Normal,
    should_error: false,
    implemented: true,
}];

const WORDS: &[TestCase] = &[TestCase {
    name: "basic",
    input: "WORDS",
    description: "lists every visible dictionary entry, newest first",
    kind: TestKind::Normal,
    should_error: false,
    implemented: true,
}];

const LATEST: &[TestCase] = &[TestCase {
    name: "basic",
    input: "CREATE FOO LATEST",
    description: "exposes the most recently defined entry",
    kind: TestKind::Normal,
    should_error: false,
    implemented: true,
}];

const SP: &[TestCase] = &[
    TestCase {
        name: "fetch",
        input: "1 2 3 SP@",
        description: "SP@ reports the current data stack depth",
        kind: TestKind::Normal,
        should_error: false,
        implemented: true,
    },
    TestCase {
        name: "store_truncates",
        input: "1 2 3 4 1 SP!",
        description: "SP! truncates the stack to the given depth",
        kind: TestKind::Normal,
        should_error: false,
        implemented: true,
    },
];

pub const SUITES: &[WordTestSuite] = &[
    WordTestSuite { word: "FIND", cases: FIND },
    WordTestSuite { word: "'", cases: TICK },
    WordTestSuite { word: ">BODY", cases: TO_BODY },
    WordTestSuite { word: "WORDS", cases: WORDS },
    WordTestSuite { word: "LATEST", cases: LATEST },
    WordTestSuite { word: "SP! SP@", cases: SP },
];

pub const MODULE: TestModule = TestModule {
    name: "Dictionary",
    suites: SUITES,
};
