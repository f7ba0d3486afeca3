//! Dictionary construction and visibility words, module
//! "Dictionary Manipulation Words".
//!
//! `CREATE` lays down a bare header other defining words (`VARIABLE`,
//! `CONSTANT`, `DOES>`, in `defining.rs`) build on top of; `FORGET`
//! rewinds both the dictionary chain and `HERE`.

use super::register_word as reg;
use crate::dictionary::WordCode;
use crate::error::{VmError, VmResult};
use crate::vm::Vm;

pub fn register(vm: &mut Vm) {
    reg(vm, "CREATE", "( \"name\" -- )", create);
    reg(vm, "FORGET", "( \"name\" -- )", forget);
    reg(vm, "IMMEDIATE", "( -- )", immediate);
    reg(vm, "SMUDGE", "( -- )", smudge);
    reg(vm, "HIDDEN", "( \"name\" -- )", hidden);
}

/// `CREATE <name>` — lay down a header whose parameter field starts at
/// the current `HERE`; executing the new word pushes that address.
fn create(vm: &mut Vm) -> VmResult<()> {
    let name = vm.input.next_token().ok_or(VmError::ParseError)?;
    let here_before = vm.here();
    let pfa = vm.here();
    let handle = vm.dict.create(&name, WordCode::DataWord, pfa, here_before);
    vm.vocab.record_head(handle);
    Ok(())
}

/// `FORGET <name>` — remove `name` and everything defined after it,
/// rewinding `HERE` to the value recorded at its creation.
fn forget(vm: &mut Vm) -> VmResult<()> {
    let name = vm.input.next_token().ok_or(VmError::ParseError)?;
    let here_before = vm.dict.forget(&name)?;
    vm.memory.set_here(here_before);
    Ok(())
}

/// `IMMEDIATE` — mark the most recent definition as immediate.
fn immediate(vm: &mut Vm) -> VmResult<()> {
    vm.dict.immediate();
    Ok(())
}

/// `SMUDGE` — toggle the smudge bit on the most recent definition,
/// classically used to hide a colon definition from `FIND` while its
/// own body is still being compiled.
fn smudge(vm: &mut Vm) -> VmResult<()> {
    if let Some(handle) = vm.dict.latest() {
        if vm.dict.entry(handle).flags.contains(crate::dictionary::Flags::SMUDGE) {
            vm.dict.unsmudge(handle);
        } else {
            vm.dict.smudge(handle);
        }
    }
    Ok(())
}

/// `HIDDEN <name>` — a StarForth extension: permanently hide a named
/// word from `FIND` without removing it (contrast `FORGET`, which
/// deletes; `SMUDGE`, which only ever affects the latest word).
fn hidden(vm: &mut Vm) -> VmResult<()> {
    let name = vm.input.next_token().ok_or(VmError::ParseError)?;
    let handle = vm.find(&name).ok_or(VmError::WordNotFound)?;
    vm.dict.hide(handle);
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::interpreter::interpret;
    use crate::vm::Vm;

    #[test]
    fn create_then_execute_pushes_its_body_address() {
        let mut vm = Vm::new();
        interpret(&mut vm, "CREATE FOO FOO");
        assert_eq!(vm.error, None, "{:?}", vm.error);
        let handle = vm.find("FOO").unwrap();
        assert_eq!(vm.data_stack.pop().unwrap() as usize, vm.dict.entry(handle).param_field);
    }

    #[test]
    fn forget_removes_the_word_and_rewinds_here() {
        let mut vm = Vm::new();
        let before = vm.here();
        interpret(&mut vm, "CREATE FOO 1, 2, FORGET FOO");
        assert_eq!(vm.error, None, "{:?}", vm.error);
        assert_eq!(vm.here(), before);
        assert!(vm.find("FOO").is_none());
    }

    #[test]
    fn forget_on_system_word_is_a_compiler_error() {
        let mut vm = Vm::new();
        interpret(&mut vm, "FORGET DUP");
        assert_eq!(vm.error, Some(crate::error::VmError::CompilerError));
    }

    #[test]
    fn hidden_word_is_invisible_to_find() {
        let mut vm = Vm::new();
        interpret(&mut vm, "CREATE FOO HIDDEN FOO");
        assert_eq!(vm.error, None, "{:?}", vm.error);
        assert!(vm.find("FOO").is_none());
    }
}
