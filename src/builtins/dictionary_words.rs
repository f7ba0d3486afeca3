//! Dictionary lookup and inspection words, module
//! "Dictionary Words".
//!
//! `SP@`/`SP!` use the data stack's index-of-depth as a stand-in for a
//! raw stack-pointer address, since this crate's `Stack` is a `Vec`,
//! not a region of `Memory`.

use super::register_word as reg;
use crate::cell::Cell;
use crate::dictionary::to_body;
use crate::error::{VmError, VmResult};
use crate::vm::Vm;

pub fn register(vm: &mut Vm) {
    reg(vm, "FIND", "( c-addr -- c-addr 0 | xt 1 | xt -1 )", find);
    reg(vm, "'", "( \"name\" -- xt )", tick);
    reg(vm, ">BODY", "( xt -- addr )", to_body_word);
    reg(vm, "WORDS", "( -- )", words);
    reg(vm, "LATEST", "( -- xt )", latest);
    reg(vm, "SP!", "( n -- )", sp_store);
    reg(vm, "SP@", "( -- n )", sp_fetch);
}

/// `FIND` — look up the counted string at `c-addr`. Per ANS/FORTH-79
/// convention: not found leaves the address and `0`; found leaves the
/// execution token and `1` (non-immediate) or `-1` (immediate).
fn find(vm: &mut Vm) -> VmResult<()> {
    let addr = vm.data_stack.pop()?;
    let len = vm.memory.fetch_byte(addr as usize)?;
    let bytes = vm.memory.read_bytes(addr as usize + 1, len as usize)?;
    let name = String::from_utf8_lossy(bytes).into_owned();
    match vm.find(&name) {
        Some(handle) => {
            vm.data_stack.push(handle as Cell)?;
            vm.data_stack.push(if vm.dict.is_immediate(handle) { -1 } else { 1 })
        }
        None => {
            vm.data_stack.push(addr)?;
            vm.data_stack.push(0)
        }
    }
}

/// `'` — parse the next name token and leave its execution token.
fn tick(vm: &mut Vm) -> VmResult<()> {
    let name = vm.input.next_token().ok_or(VmError::ParseError)?;
    let handle = vm.find(&name).ok_or(VmError::WordNotFound)?;
    vm.data_stack.push(handle as Cell)
}

fn to_body_word(vm: &mut Vm) -> VmResult<()> {
    let xt = vm.data_stack.pop()?;
    let addr = to_body(&vm.dict, xt as usize);
    vm.data_stack.push(addr)
}

/// `WORDS` — list every visible dictionary entry, most recent first.
fn words(vm: &mut Vm) -> VmResult<()> {
    for name in vm.dict.names().collect::<Vec<_>>().into_iter().rev() {
        print!("{name} ");
    }
    println!();
    Ok(())
}

fn latest(vm: &mut Vm) -> VmResult<()> {
    let handle = vm.dict.latest().ok_or(VmError::WordNotFound)?;
    vm.data_stack.push(handle as Cell)
}

fn sp_store(vm: &mut Vm) -> VmResult<()> {
    let n = vm.data_stack.pop()?;
    if n < 0 {
        return Err(VmError::StackUnderflow);
    }
    vm.data_stack.set_depth(n as usize)
}

fn sp_fetch(vm: &mut Vm) -> VmResult<()> {
    let depth = vm.data_stack.depth() as Cell;
    vm.data_stack.push(depth)
}

#[cfg(test)]
mod tests {
    use crate::interpreter::interpret;
    use crate::vm::Vm;

    #[test]
    fn tick_resolves_a_known_word() {
        let mut vm = Vm::new();
        interpret(&mut vm, "' DUP");
        assert_eq!(vm.error, None, "{:?}", vm.error);
        let xt = vm.data_stack.pop().unwrap();
        assert_eq!(vm.find("DUP"), Some(xt as usize));
    }

    #[test]
    fn tick_on_unknown_word_sets_word_not_found() {
        let mut vm = Vm::new();
        interpret(&mut vm, "' NOSUCHWORD");
        assert_eq!(vm.error, Some(crate::error::VmError::WordNotFound));
    }

    #[test]
    fn sp_fetch_reports_current_depth() {
        let mut vm = Vm::new();
        interpret(&mut vm, "1 2 3 SP@");
        assert_eq!(vm.data_stack.pop().unwrap(), 3);
    }

    #[test]
    fn sp_store_truncates_the_stack() {
        let mut vm = Vm::new();
        interpret(&mut vm, "1 2 3 4 1 SP!");
        assert_eq!(vm.error, None, "{:?}", vm.error);
        assert_eq!(vm.data_stack.depth(), 1);
        assert_eq!(vm.data_stack.pop().unwrap(), 1);
    }
}
