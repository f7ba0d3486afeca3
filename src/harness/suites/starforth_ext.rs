//! Test cases for the StarForth extension word group.

use crate::harness::{TestCase, TestKind, TestModule, WordTestSuite};

const ENTROPY: &[TestCase] = &[TestCase {
    name: "tracks_execution_count",
    input: ": TESTWORD 1 1 + DROP ; TESTWORD TESTWORD TESTWORD ' TESTWORD ENTROPY@",
    description: "ENTROPY@ reports how many times a word has executed",
    kind: TestKind::Normal,
    should_error: false,
    implemented: true,
}];

const ENTROPY_STORE: &[TestCase] = &[TestCase {
    name: "overwrites_the_counter",
    input: ": ENTSET ; 42 ' ENTSET ENTROPY! ' ENTSET ENTROPY@",
    description: "ENTROPY! sets a word's execution count directly",
    kind: TestKind::Normal,
    should_error: false,
    implemented: true,
}];

const WORD_ENTROPY: &[TestCase] = &[TestCase {
    name: "basic",
    input: "WORD-ENTROPY",
    description: "prints every dictionary entry's execution count",
    kind: TestKind::Normal,
    should_error: false,
    implemented: true,
}];

const RESET_ENTROPY: &[TestCase] = &[TestCase {
    name: "zeroes_all_counters",
    input: "DUP RESET-ENTROPY",
    description: "zeroes every word's execution count",
    kind: TestKind::Normal,
    should_error: true,
    implemented: true,
}];

const TOP_WORDS: &[TestCase] = &[TestCase {
    name: "basic",
    input: "5 TOP-WORDS",
    description: "prints the n most frequently executed words",
    kind: TestKind::Normal,
    should_error: false,
    implemented: true,
}];

const CAPSULE_COUNT: &[TestCase] = &[TestCase {
    name: "hosted_build_has_none",
    input: "CAPSULE-COUNT",
    description: "a hosted build has no capsule directory, so the count is 0",
    kind: TestKind::EdgeCase,
    should_error: false,
    implemented: true,
}];

const CAPSULE_FETCH: &[TestCase] = &[TestCase {
    name: "every_index_is_null",
    input: "0 CAPSULE@",
    description: "every index is out of bounds in a hosted build",
    kind: TestKind::EdgeCase,
    should_error: false,
    implemented: true,
}];

const CAPSULE_DESCRIBE: &[TestCase] = &[TestCase {
    name: "basic",
    input: "0 CAPSULE@ DUP CAPSULE-FLAGS@ SWAP DUP CAPSULE-LEN@ SWAP CAPSULE-HASH@",
    description: "CAPSULE-FLAGS@/LEN@/HASH@ all read a null descriptor as zero",
    kind: TestKind::EdgeCase,
    should_error: false,
    implemented: true,
}];

const CAPSULE_BIRTH: &[TestCase] = &[TestCase {
    name: "invalid_id",
    input: "0 CAPSULE-BIRTH",
    description: "no capsule is ever bootable, so birth always fails",
    kind: TestKind::EdgeCase,
    should_error: false,
    implemented: true,
}];

const CAPSULE_RUN: &[TestCase] = &[TestCase {
    name: "basic",
    input: "0 CAPSULE-RUN",
    description: "running a null descriptor is a no-op in a hosted build",
    kind: TestKind::EdgeCase,
    should_error: false,
    implemented: true,
}];

const CAPSULE_TEST: &[TestCase] = &[TestCase {
    name: "basic",
    input: "CAPSULE-TEST",
    description: "prints a diagnostic noting the capsule system is absent",
    kind: TestKind::Normal,
    should_error: false,
    implemented: true,
}];

const MAMA_VM_ID: &[TestCase] = &[TestCase {
    name: "root_is_zero",
    input: "MAMA-VM-ID",
    description: "the root VM's id is always 0",
    kind: TestKind::Normal,
    should_error: false,
    implemented: true,
}];

const VM_COUNT: &[TestCase] = &[TestCase {
    name: "exactly_one",
    input: "VM-COUNT",
    description: "a hosted build runs exactly one VM",
    kind: TestKind::Normal,
    should_error: false,
    implemented: true,
}];

pub const SUITES: &[WordTestSuite] = &[
    WordTestSuite { word: "ENTROPY@", cases: ENTROPY },
    WordTestSuite { word: "ENTROPY!", cases: ENTROPY_STORE },
    WordTestSuite { word: "WORD-ENTROPY", cases: WORD_ENTROPY },
    WordTestSuite { word: "RESET-ENTROPY", cases: RESET_ENTROPY },
    WordTestSuite { word: "TOP-WORDS", cases: TOP_WORDS },
    WordTestSuite { word: "CAPSULE-COUNT", cases: CAPSULE_COUNT },
    WordTestSuite { word: "CAPSULE@", cases: CAPSULE_FETCH },
    WordTestSuite { word: "CAPSULE-FLAGS@ CAPSULE-LEN@ CAPSULE-HASH@", cases: CAPSULE_DESCRIBE },
    WordTestSuite { word: "CAPSULE-BIRTH", cases: CAPSULE_BIRTH },
    WordTestSuite { word: "CAPSULE-RUN", cases: CAPSULE_RUN },
    WordTestSuite { word: "CAPSULE-TEST", cases: CAPSULE_TEST },
    WordTestSuite { word: "MAMA-VM-ID", cases: MAMA_VM_ID },
    WordTestSuite { word: "VM-COUNT", cases: VM_COUNT },
];

pub const MODULE: TestModule = TestModule {
    name: "StarForth Extensions",
    suites: SUITES,
};
