//! The VM's error taxonomy.
//!
//! Errors are recorded on the VM, not thrown: every primitive returns a
//! `Result<(), VmError>`, and the interpreter loop stores a failing
//! result into `vm.error` rather than unwinding. Each variant is a
//! stable, distinct code for the test harness's `assert_vm_error`.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VmError {
    #[error("data stack underflow")]
    StackUnderflow,
    #[error("data stack overflow")]
    DataStackOverflow,
    #[error("return stack underflow")]
    ReturnStackUnderflow,
    #[error("return stack overflow")]
    ReturnStackOverflow,
    #[error("division by zero")]
    DivisionByZero,
    #[error("misaligned cell access")]
    Misaligned,
    #[error("memory access out of bounds")]
    OutOfBounds,
    #[error("dictionary full")]
    DictionaryFull,
    #[error("word not found")]
    WordNotFound,
    #[error("invalid block number")]
    InvalidBlock,
    #[error("compiler error")]
    CompilerError,
    #[error("pictured numeric output overflow")]
    NumericOverflow,
    #[error("parse error")]
    ParseError,
    #[error("aborted")]
    Aborted,
}

impl VmError {
    /// The stable non-zero integer code external callers (and the test
    /// harness's `assert_vm_error`) observe. `0` is reserved for "no error"
    /// and is never returned by this method.
    pub fn code(self) -> i32 {
        match self {
            VmError::StackUnderflow => 1,
            VmError::DataStackOverflow => 2,
            VmError::ReturnStackUnderflow => 3,
            VmError::ReturnStackOverflow => 4,
            VmError::DivisionByZero => 5,
            VmError::Misaligned => 6,
            VmError::OutOfBounds => 7,
            VmError::DictionaryFull => 8,
            VmError::WordNotFound => 9,
            VmError::InvalidBlock => 10,
            VmError::CompilerError => 11,
            VmError::NumericOverflow => 12,
            VmError::ParseError => 13,
            VmError::Aborted => 14,
        }
    }
}

pub type VmResult<T> = Result<T, VmError>;
