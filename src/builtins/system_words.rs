//! System control words, module
//! "System Words".
//!
//! `ABORT"` compiles its message as an inline `OP_STRLIT` guarded by a branch
//! around the raw bytes, the same pattern the compiler already uses for
//! skipping over `?DO`'s forward address.

use super::register_word as reg_plain;
use crate::cell::{Cell, OP_BRANCH, OP_STRLIT};
use crate::error::{VmError, VmResult};
use crate::vm::{Mode, Vm};

pub fn register(vm: &mut Vm) {
    reg_plain(vm, "(ABORT\"-RUN)", "( flag addr len -- )", abort_quote_run);
    reg_plain(vm, "ABORT", "( -- )", abort);
    reg_plain(vm, "BYE", "( -- )", bye);
    reg_plain(vm, "COLD", "( -- )", cold);
    reg_plain(vm, "QUIT", "( -- )", quit);
    reg_plain(vm, "WARM", "( -- )", warm);
    super::register_immediate_word(vm, "ABORT\"", "( flag \"ccc<quote>\" -- )", abort_quote);
}

fn abort(vm: &mut Vm) -> VmResult<()> {
    vm.abort();
    Ok(())
}

fn bye(vm: &mut Vm) -> VmResult<()> {
    vm.bye_requested = true;
    Ok(())
}

/// `COLD` — restore the dictionary and `HERE` to the snapshot taken
/// right after the builtin vocabulary finished registering, and reset
/// every other piece of VM state to its cold-start value.
fn cold(vm: &mut Vm) -> VmResult<()> {
    let snapshot = vm.cold_snapshot;
    vm.restore_dict_state(snapshot);
    let saved = vm.save_vm_state();
    vm.restore_vm_state(saved);
    vm.set_base(10);
    vm.set_scr(0);
    vm.set_span(0);
    vm.blocks.empty_buffers();
    vm.current_block = None;
    vm.abort_requested = false;
    Ok(())
}

fn quit(vm: &mut Vm) -> VmResult<()> {
    vm.quit();
    Ok(())
}

/// `WARM` — a soft reset: clears the stacks and any pending error but,
/// unlike `COLD`, leaves user-defined words in the dictionary.
fn warm(vm: &mut Vm) -> VmResult<()> {
    vm.quit();
    vm.error = None;
    vm.abort_requested = false;
    Ok(())
}

/// `ABORT" ccc"` — immediate; compiles the quoted text as an inline
/// string literal, skipped over at runtime by an unconditional branch,
/// followed by a call to `(ABORT"-RUN)`.
fn abort_quote(vm: &mut Vm) -> VmResult<()> {
    let text = vm.input.parse_delimited(b'"');
    if !matches!(vm.mode, Mode::Compile) {
        return Err(VmError::CompilerError);
    }
    let skip_operand_addr = {
        vm.memory.comma(OP_BRANCH)?;
        vm.memory.comma(0)?
    };
    let start = vm.here();
    for b in text.bytes() {
        vm.memory.comma_byte(b as Cell)?;
    }
    let len = text.len();
    vm.memory.store_cell(skip_operand_addr, vm.here() as Cell)?;
    vm.memory.comma(OP_STRLIT)?;
    vm.memory.comma(start as Cell)?;
    vm.memory.comma(len as Cell)?;
    let handle = vm.find("(ABORT\"-RUN)").ok_or(VmError::CompilerError)?;
    vm.memory.comma(handle as Cell)?;
    Ok(())
}

fn abort_quote_run(vm: &mut Vm) -> VmResult<()> {
    let len = vm.data_stack.pop()? as usize;
    let addr = vm.data_stack.pop()? as usize;
    let flag = vm.data_stack.pop()?;
    if flag != 0 {
        let bytes = vm.memory.read_bytes(addr, len)?.to_vec();
        println!("{}", String::from_utf8_lossy(&bytes));
        vm.abort();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::interpreter::interpret;
    use crate::vm::Vm;

    #[test]
    fn bye_sets_the_exit_flag() {
        let mut vm = Vm::new();
        interpret(&mut vm, "BYE");
        assert!(vm.bye_requested);
    }

    #[test]
    fn cold_removes_user_defined_words() {
        let mut vm = Vm::new();
        interpret(&mut vm, ": FOO 42 ;");
        assert!(vm.find("FOO").is_some());
        interpret(&mut vm, "COLD");
        assert_eq!(vm.error, None, "{:?}", vm.error);
        assert!(vm.find("FOO").is_none());
        assert!(vm.find("DUP").is_some());
    }

    #[test]
    fn abort_quote_fires_only_when_flag_is_true() {
        let mut vm = Vm::new();
        interpret(&mut vm, ": CHECK 0 ABORT\" should not abort\" 99 ; CHECK");
        assert_eq!(vm.error, None, "{:?}", vm.error);
        assert_eq!(vm.data_stack.pop().unwrap(), 99);
    }

    #[test]
    fn abort_quote_aborts_on_true_flag() {
        let mut vm = Vm::new();
        interpret(&mut vm, ": CHECK -1 ABORT\" boom\" 99 ; CHECK");
        assert_eq!(vm.data_stack.depth(), 0);
    }
}
