//! Test cases for the number-formatting word group.

use crate::harness::{TestCase, TestKind, TestModule, WordTestSuite};

const BASE: &[TestCase] = &[TestCase {
    name: "is_a_variable",
    input: "16 BASE !",
    description: "BASE behaves like an ordinary memory variable",
    kind: TestKind::Normal,
    should_error: false,
    implemented: true,
}];

const DECIMAL_HEX_OCTAL: &[TestCase] = &[
    TestCase {
        name: "hex",
        input: "HEX 255 .",
        description: "HEX sets radix 16 for output",
        kind: TestKind::Normal,
        should_error: false,
        implemented: true,
    },
    TestCase {
        name: "decimal_restores",
        input: "HEX DECIMAL 255 .",
        description: "DECIMAL restores radix 10",
        kind: TestKind::Normal,
        should_error: false,
        implemented: true,
    },
    TestCase {
        name: "octal",
        input: "OCTAL 8 .",
        description: "OCTAL sets radix 8 for output",
        kind: TestKind::Normal,
        should_error: false,
        implemented: true,
    },
];

const PICTURED: &[TestCase] = &[
    TestCase {
        name: "basic_conversion",
        input: "1234 0 <# #S #>",
        description: "builds the decimal text of a double right-to-left",
        kind: TestKind::Normal,
        should_error: false,
        implemented: true,
    },
    TestCase {
        name: "signed",
        input: "-1234 DUP >R ABS 0 <# #S R> SIGN #>",
        description: "SIGN prepends a minus when the saved original was negative",
        kind: TestKind::Normal,
        should_error: false,
        implemented: true,
    },
];

pub const SUITES: &[WordTestSuite] = &[
    WordTestSuite { word: "BASE", cases: BASE },
    WordTestSuite { word: "DECIMAL HEX OCTAL", cases: DECIMAL_HEX_OCTAL },
    WordTestSuite { word: "<# # #S SIGN HOLD #>", cases: PICTURED },
];

pub const MODULE: TestModule = TestModule {
    name: "Format",
    suites: SUITES,
};
