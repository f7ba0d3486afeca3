//! Test cases for the block-storage word group.

use crate::harness::{TestCase, TestKind, TestModule, WordTestSuite};

const BLOCK: &[TestCase] = &[
    TestCase {
        name: "basic",
        input: "1 BLOCK",
        description: "maps block 1 into a buffer and returns its address",
        kind: TestKind::Normal,
        should_error: false,
        implemented: true,
    },
    TestCase {
        name: "zero_is_invalid",
        input: "0 BLOCK",
        description: "block 0 sets InvalidBlock",
        kind: TestKind::ErrorCase,
        should_error: true,
        implemented: true,
    },
    TestCase {
        name: "out_of_range",
        input: "999999 BLOCK",
        description: "a block beyond the configured range sets InvalidBlock",
        kind: TestKind::ErrorCase,
        should_error: true,
        implemented: true,
    },
];

const BUFFER: &[TestCase] = &[TestCase {
    name: "basic",
    input: "2 BUFFER",
    description: "reserves a buffer for block 2 without reading its contents",
    kind: TestKind::Normal,
    should_error: false,
    implemented: true,
}];

const UPDATE: &[TestCase] = &[TestCase {
    name: "after_block",
    input: "1 BLOCK DROP UPDATE",
    description: "marks the most recently accessed block dirty",
    kind: TestKind::Normal,
    should_error: false,
    implemented: true,
}];

const SAVE_BUFFERS: &[TestCase] = &[TestCase {
    name: "basic",
    input: "1 BLOCK DROP UPDATE SAVE-BUFFERS",
    description: "flushes every dirty buffer",
    kind: TestKind::Normal,
    should_error: false,
    implemented: true,
}];

const EMPTY_BUFFERS: &[TestCase] = &[TestCase {
    name: "basic",
    input: "1 BLOCK DROP EMPTY-BUFFERS",
    description: "invalidates all buffers, discarding unsaved changes",
    kind: TestKind::Normal,
    should_error: false,
    implemented: true,
}];

const FLUSH: &[TestCase] = &[TestCase {
    name: "basic",
    input: "1 BLOCK DROP UPDATE FLUSH",
    description: "SAVE-BUFFERS followed by EMPTY-BUFFERS",
    kind: TestKind::Normal,
    should_error: false,
    implemented: true,
}];

const LOAD: &[TestCase] = &[TestCase {
    name: "empty_block",
    input: "3 LOAD",
    description: "interprets an empty block as a no-op",
    kind: TestKind::Normal,
    should_error: false,
    implemented: true,
}];

const LIST: &[TestCase] = &[TestCase {
    name: "sets_scr",
    input: "4 LIST",
    description: "displays block 4 and sets SCR to 4",
    kind: TestKind::Normal,
    should_error: false,
    implemented: true,
}];

const SCR: &[TestCase] = &[TestCase {
    name: "basic",
    input: "SCR @",
    description: "SCR is a variable holding the last listed/loaded block",
    kind: TestKind::Normal,
    should_error: false,
    implemented: true,
}];

const THRU: &[TestCase] = &[
    TestCase {
        name: "basic",
        input: "1 3 THRU",
        description: "loads every block in the forward range",
        kind: TestKind::Normal,
        should_error: false,
        implemented: true,
    },
    TestCase {
        name: "reversed_endpoints",
        input: "3 1 THRU",
        description: "reversed endpoints load the same range, auto-swapped",
        kind: TestKind::EdgeCase,
        should_error: false,
        implemented: true,
    },
];

pub const SUITES: &[WordTestSuite] = &[
    WordTestSuite { word: "BLOCK", cases: BLOCK },
    WordTestSuite { word: "BUFFER", cases: BUFFER },
    WordTestSuite { word: "UPDATE", cases: UPDATE },
    WordTestSuite { word: "SAVE-BUFFERS", cases: SAVE_BUFFERS },
    WordTestSuite { word: "EMPTY-BUFFERS", cases: EMPTY_BUFFERS },
    WordTestSuite { word: "FLUSH", cases: FLUSH },
    WordTestSuite { word: "LOAD", cases: LOAD },
    WordTestSuite { word: "LIST", cases: LIST },
    WordTestSuite { word: "SCR", cases: SCR },
    WordTestSuite { word: "THRU", cases: THRU },
];

pub const MODULE: TestModule = TestModule {
    name: "Block",
    suites: SUITES,
};
