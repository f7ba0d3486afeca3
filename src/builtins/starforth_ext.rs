//! StarForth extension words,
//! plus the Mama FORTH capsule vocabulary.
//!
//! `vm.execute` already bumps `DictEntry::entropy` on every call, so
//! the entropy words only need to read/reset/report it.
//!
//! The capsule system is normally `#ifdef __STARKERNEL__`-gated: a
//! freestanding kernel build hosts a directory of bootable capsules and
//! a birth protocol for spawning child VMs. This crate is a hosted
//! build with no kernel, no capsule directory, and no child VMs to
//! birth, so the words are registered for vocabulary completeness but
//! return degenerate, deterministic values (0 capsules, 0/-1 for
//! invalid lookups, one VM, id 0) rather than an error — recorded as
//! an Open Question decision in DESIGN.md.

use super::register_word as reg;
use crate::cell::Cell;
use crate::error::{VmError, VmResult};
use crate::vm::Vm;

pub fn register(vm: &mut Vm) {
    reg(vm, "ENTROPY@", "( xt -- n )", entropy_fetch);
    reg(vm, "ENTROPY!", "( n xt -- )", entropy_store);
    reg(vm, "WORD-ENTROPY", "( -- )", word_entropy);
    reg(vm, "RESET-ENTROPY", "( -- )", reset_entropy);
    reg(vm, "TOP-WORDS", "( n -- )", top_words);

    reg(vm, "CAPSULE-COUNT", "( -- n )", capsule_count);
    reg(vm, "CAPSULE@", "( idx -- addr )", capsule_fetch);
    reg(vm, "CAPSULE-FLAGS@", "( addr -- flags )", capsule_flags);
    reg(vm, "CAPSULE-LEN@", "( addr -- len )", capsule_len);
    reg(vm, "CAPSULE-HASH@", "( addr -- hash )", capsule_hash);
    reg(vm, "CAPSULE-BIRTH", "( id -- vm-id )", capsule_birth);
    reg(vm, "CAPSULE-RUN", "( addr -- )", capsule_run);
    reg(vm, "CAPSULE-TEST", "( -- )", capsule_test);
    reg(vm, "MAMA-VM-ID", "( -- n )", mama_vm_id);
    reg(vm, "VM-COUNT", "( -- n )", vm_count);
}

fn handle_arg(vm: &mut Vm) -> VmResult<usize> {
    let xt = vm.data_stack.pop()?;
    if xt < 0 || xt as usize >= vm.dict.len() {
        return Err(VmError::OutOfBounds);
    }
    Ok(xt as usize)
}

/// `ENTROPY@ ( xt -- n )` — the execution count of the word `xt` names.
fn entropy_fetch(vm: &mut Vm) -> VmResult<()> {
    let handle = handle_arg(vm)?;
    let n = vm.dict.entry(handle).entropy;
    vm.data_stack.push(n)
}

/// `ENTROPY! ( n xt -- )` — overwrite a word's execution count.
fn entropy_store(vm: &mut Vm) -> VmResult<()> {
    let handle = handle_arg(vm)?;
    let n = vm.data_stack.pop()?;
    vm.dict.entry_mut(handle).entropy = n;
    Ok(())
}

/// `WORD-ENTROPY` — print every dictionary entry's execution count.
/// Leaves the stack untouched.
fn word_entropy(vm: &mut Vm) -> VmResult<()> {
    println!("--- word entropy ---");
    for handle in 0..vm.dict.len() {
        let entry = vm.dict.entry(handle);
        if entry.entropy > 0 {
            println!("{:>8} {}", entry.entropy, entry.name);
        }
    }
    Ok(())
}

/// `RESET-ENTROPY` — zero every word's execution count.
fn reset_entropy(vm: &mut Vm) -> VmResult<()> {
    for handle in 0..vm.dict.len() {
        vm.dict.entry_mut(handle).entropy = 0;
    }
    Ok(())
}

/// `TOP-WORDS ( n -- )` — print the `n` most frequently executed words,
/// most-called first. `n <= 0` prints nothing.
fn top_words(vm: &mut Vm) -> VmResult<()> {
    let n = vm.data_stack.pop()?;
    if n <= 0 {
        return Ok(());
    }
    let mut ranked: Vec<(Cell, &str)> = (0..vm.dict.len())
    .map(|h| vm.dict.entry(h))
    .map(|e| (e.entropy, e.name.as_str()))
    .collect();
    ranked.sort_by(|a, b| b.0.cmp(&a.0));
    for (count, name) in ranked.into_iter().take(n as usize) {
        println!("{count:>8} {name}");
    }
    Ok(())
}

/// `CAPSULE-COUNT ( -- n )` — hosted build: no capsule directory exists.
fn capsule_count(vm: &mut Vm) -> VmResult<()> {
    vm.data_stack.push(0)
}

/// `CAPSULE@ ( idx -- addr )` — hosted build: every index is out of
/// bounds, so this always leaves `0` (a null descriptor address).
fn capsule_fetch(vm: &mut Vm) -> VmResult<()> {
    vm.data_stack.pop()?;
    vm.data_stack.push(0)
}

fn capsule_flags(vm: &mut Vm) -> VmResult<()> {
    vm.data_stack.pop()?;
    vm.data_stack.push(0)
}

fn capsule_len(vm: &mut Vm) -> VmResult<()> {
    vm.data_stack.pop()?;
    vm.data_stack.push(0)
}

fn capsule_hash(vm: &mut Vm) -> VmResult<()> {
    vm.data_stack.pop()?;
    vm.data_stack.push(0)
}

/// `CAPSULE-BIRTH ( id -- vm-id )` — hosted build: no capsule is ever
/// bootable, so every id is invalid.
fn capsule_birth(vm: &mut Vm) -> VmResult<()> {
    vm.data_stack.pop()?;
    vm.data_stack.push(-1)
}

fn capsule_run(vm: &mut Vm) -> VmResult<()> {
    vm.data_stack.pop()?;
    Ok(())
}

/// `CAPSULE-TEST` — print a diagnostic noting the capsule system isn't
/// present in this build.
fn capsule_test(_vm: &mut Vm) -> VmResult<()> {
    println!("capsule system not available (hosted build)");
    Ok(())
}

/// `MAMA-VM-ID ( -- n )` — the root VM is always id 0.
fn mama_vm_id(vm: &mut Vm) -> VmResult<()> {
    vm.data_stack.push(0)
}

/// `VM-COUNT ( -- n )` — hosted build runs exactly one VM.
fn vm_count(vm: &mut Vm) -> VmResult<()> {
    vm.data_stack.push(1)
}

#[cfg(test)]
mod tests {
    use crate::interpreter::interpret;
    use crate::vm::Vm;

    #[test]
    fn entropy_tracks_execution_count() {
        let mut vm = Vm::new();
        interpret(&mut vm, ": TESTWORD 1 1 + DROP ; TESTWORD TESTWORD TESTWORD ' TESTWORD ENTROPY@");
        assert_eq!(vm.error, None, "{:?}", vm.error);
        assert_eq!(vm.data_stack.pop().unwrap(), 3);
    }

    #[test]
    fn entropy_store_overwrites_the_counter() {
        let mut vm = Vm::new();
        interpret(&mut vm, ": ENTSET ; 42 ' ENTSET ENTROPY! ' ENTSET ENTROPY@");
        assert_eq!(vm.error, None, "{:?}", vm.error);
        assert_eq!(vm.data_stack.pop().unwrap(), 42);
    }

    #[test]
    fn reset_entropy_zeroes_every_counter() {
        let mut vm = Vm::new();
        interpret(&mut vm, ": RESETTEST 1 DROP ; RESETTEST RESETTEST RESET-ENTROPY ' RESETTEST ENTROPY@");
        assert_eq!(vm.error, None, "{:?}", vm.error);
        assert_eq!(vm.data_stack.pop().unwrap(), 0);
    }

    #[test]
    fn capsule_words_report_an_empty_hosted_directory() {
        let mut vm = Vm::new();
        interpret(&mut vm, "CAPSULE-COUNT");
        assert_eq!(vm.data_stack.pop().unwrap(), 0);
        interpret(&mut vm, "9999 CAPSULE-BIRTH");
        assert_eq!(vm.data_stack.pop().unwrap(), -1);
        interpret(&mut vm, "VM-COUNT");
        assert_eq!(vm.data_stack.pop().unwrap(), 1);
    }
}
