//! Test cases for the control-flow word group.

use crate::harness::{TestCase, TestKind, TestModule, WordTestSuite};

const IF_ELSE_THEN: &[TestCase] = &[
    TestCase {
        name: "true_branch",
        input: ": T 0< IF -1 ELSE 1 THEN ; -5 T",
        description: "takes the IF branch on a true flag",
        kind: TestKind::Normal,
        should_error: false,
        implemented: true,
    },
    TestCase {
        name: "else_without_if",
        input: ": BAD ELSE ;",
        description: "ELSE without a matching IF is a compile-time error",
        kind: TestKind::ErrorCase,
        should_error: true,
        implemented: true,
    },
    TestCase {
        name: "then_without_if",
        input: ": BAD THEN ;",
        description: "THEN without a matching IF is a compile-time error",
        kind: TestKind::ErrorCase,
        should_error: true,
        implemented: true,
    },
];

const BEGIN_UNTIL: &[TestCase] = &[
    TestCase {
        name: "loops_to_flag",
        input: ": COUNT-UP 0 BEGIN 1+ DUP 5 = UNTIL ; COUNT-UP",
        description: "loops until the flag becomes true",
        kind: TestKind::Normal,
        should_error: false,
        implemented: true,
    },
    TestCase {
        name: "until_without_begin",
        input: ": BAD UNTIL ;",
        description: "UNTIL without a matching BEGIN is a compile-time error",
        kind: TestKind::ErrorCase,
        should_error: true,
        implemented: true,
    },
];

const BEGIN_WHILE_REPEAT: &[TestCase] = &[
    TestCase {
        name: "loops_while_true",
        input: ": COUNT-DOWN BEGIN DUP 0 > WHILE 1- REPEAT ; 5 COUNT-DOWN",
        description: "loops while the condition holds",
        kind: TestKind::Normal,
        should_error: false,
        implemented: true,
    },
    TestCase {
        name: "repeat_without_while",
        input: ": BAD BEGIN REPEAT ;",
        description: "REPEAT without a matching WHILE is a compile-time error",
        kind: TestKind::ErrorCase,
        should_error: true,
        implemented: true,
    },
];

const DO_LOOP: &[TestCase] = &[
    TestCase {
        name: "basic_iteration",
        input: ": TEST 5 0 DO I LOOP ; TEST",
        description: "iterates I from start to limit-1",
        kind: TestKind::Normal,
        should_error: false,
        implemented: true,
    },
    TestCase {
        name: "empty_range",
        input: ": TEST 0 0 DO I LOOP ; TEST",
        description: "an empty DO range executes zero iterations",
        kind: TestKind::EdgeCase,
        should_error: false,
        implemented: true,
    },
    TestCase {
        name: "loop_without_do",
        input: ": BAD LOOP ;",
        description: "LOOP without a matching DO is a compile-time error",
        kind: TestKind::ErrorCase,
        should_error: true,
        implemented: true,
    },
];

const QDO_LOOP: &[TestCase] = &[TestCase {
    name: "equal_endpoints_skip",
    input: ": TEST 0 0 ?DO I LOOP ; TEST",
    description: "?DO with equal endpoints executes zero iterations",
    kind: TestKind::EdgeCase,
    should_error: false,
    implemented: true,
}];

const PLUS_LOOP: &[TestCase] = &[TestCase {
    name: "steps_by_two",
    input: ": TEST 10 0 DO I 2 +LOOP ; TEST",
    description: "+LOOP advances the index by the given step each iteration",
    kind: TestKind::Normal,
    should_error: false,
    implemented: true,
}];

const I_J: &[TestCase] = &[TestCase {
    name: "nested_loops",
    input: ": TEST 2 0 DO 2 0 DO J I LOOP LOOP ; TEST",
    description: "I reads the innermost index, J the next loop out",
    kind: TestKind::Normal,
    should_error: false,
    implemented: true,
}];

pub const SUITES: &[WordTestSuite] = &[
    WordTestSuite { word: "IF ELSE THEN", cases: IF_ELSE_THEN },
    WordTestSuite { word: "BEGIN UNTIL", cases: BEGIN_UNTIL },
    WordTestSuite { word: "BEGIN WHILE REPEAT", cases: BEGIN_WHILE_REPEAT },
    WordTestSuite { word: "DO LOOP", cases: DO_LOOP },
    WordTestSuite { word: "?DO LOOP", cases: QDO_LOOP },
    WordTestSuite { word: "+LOOP", cases: PLUS_LOOP },
    WordTestSuite { word: "I J", cases: I_J },
];

pub const MODULE: TestModule = TestModule {
    name: "Control",
    suites: SUITES,
};
