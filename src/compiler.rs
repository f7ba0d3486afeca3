//! Colon compilation and control-flow compiling.
//!
//! Compiles `IF … ELSE? … THEN`, `BEGIN … UNTIL`,
//! `BEGIN … WHILE … REPEAT`, and the `DO … LOOP` family into the
//! threaded-cell format `cell.rs` defines, using [`CtrlMark`](crate::vm::CtrlMark)
//! as a bounded compile-time stack.

use crate::cell::{Cell, OP_BRANCH, OP_BRANCH0, OP_DO, OP_DOES, OP_EXIT, OP_LOOP, OP_PLUS_LOOP, OP_QDO};
use crate::dictionary::WordCode;
use crate::error::{VmError, VmResult};
use crate::vm::{CtrlMark, Mode, Vm};

/// `:` — read a name (already done by the caller), create a colon entry,
/// enter compile mode.
pub fn colon_start(vm: &mut Vm, name: &str) -> VmResult<()> {
    if vm.compiling_word.is_some() {
        return Err(VmError::CompilerError);
    }
    let here_before = vm.here();
    let start = vm.here();
    let handle = vm.dict.create(name, WordCode::Colon { start }, start, here_before);
    vm.dict.smudge(handle);
    vm.vocab.record_head(handle);
    vm.compiling_word = Some(handle);
    vm.mode = Mode::Compile;
    Ok(())
}

/// `;` — emit `EXIT`, leave compile mode. Fails if a control-flow
/// construct is still open, or outside a definition.
pub fn colon_end(vm: &mut Vm) -> VmResult<()> {
    let handle = vm.compiling_word.ok_or(VmError::CompilerError)?;
    if !vm.control_stack.is_empty() {
        vm.control_stack.clear();
        return Err(VmError::CompilerError);
    }
    vm.memory.comma(OP_EXIT)?;
    vm.dict.unsmudge(handle);
    vm.compiling_word = None;
    vm.mode = Mode::Interpret;
    Ok(())
}

/// Compile a call to an already-resolved dictionary handle into the
/// word currently being defined.
pub fn compile_call(vm: &mut Vm, handle: usize) -> VmResult<()> {
    vm.memory.comma(handle as Cell)?;
    Ok(())
}

pub fn compile_literal(vm: &mut Vm, value: Cell) -> VmResult<()> {
    vm.memory.comma(crate::cell::OP_LITERAL)?;
    vm.memory.comma(value)?;
    Ok(())
}

fn reserve_branch(vm: &mut Vm, op: Cell) -> VmResult<usize> {
    vm.memory.comma(op)?;
    let operand_addr = vm.memory.comma(0)?;
    Ok(operand_addr)
}

fn patch(vm: &mut Vm, operand_addr: usize, target: usize) -> VmResult<()> {
    vm.memory.store_cell(operand_addr, target as Cell)
}

/// `IF` — compile a conditional forward branch.
pub fn compile_if(vm: &mut Vm) -> VmResult<()> {
    let addr = reserve_branch(vm, OP_BRANCH0)?;
    vm.control_stack.push(CtrlMark::Orig(addr));
    Ok(())
}

/// `ELSE` — compile an unconditional forward branch, patch `IF`.
pub fn compile_else(vm: &mut Vm) -> VmResult<()> {
    match vm.control_stack.pop() {
        Some(CtrlMark::Orig(if_addr)) => {
            let else_addr = reserve_branch(vm, OP_BRANCH)?;
            patch(vm, if_addr, vm.here())?;
            vm.control_stack.push(CtrlMark::Orig(else_addr));
            Ok(())
        }
        other => {
            if let Some(m) = other {
                vm.control_stack.push(m);
            }
            Err(VmError::CompilerError)
        }
    }
}

/// `THEN` — patch the pending forward branch to here.
pub fn compile_then(vm: &mut Vm) -> VmResult<()> {
    match vm.control_stack.pop() {
        Some(CtrlMark::Orig(addr)) => patch(vm, addr, vm.here()),
        other => {
            if let Some(m) = other {
                vm.control_stack.push(m);
            }
            Err(VmError::CompilerError)
        }
    }
}

/// `BEGIN` — mark a backward-branch destination.
pub fn compile_begin(vm: &mut Vm) -> VmResult<()> {
    vm.control_stack.push(CtrlMark::Dest(vm.here()));
    Ok(())
}

/// `UNTIL` — compile a conditional backward branch to `BEGIN`.
pub fn compile_until(vm: &mut Vm) -> VmResult<()> {
    match vm.control_stack.pop() {
        Some(CtrlMark::Dest(dest)) => {
            vm.memory.comma(OP_BRANCH0)?;
            vm.memory.comma(dest as Cell)?;
            Ok(())
        }
        other => {
            if let Some(m) = other {
                vm.control_stack.push(m);
            }
            Err(VmError::CompilerError)
        }
    }
}

/// `WHILE` — compile a forward conditional branch; hold its origin atop
/// the `BEGIN` destination still below it.
pub fn compile_while(vm: &mut Vm) -> VmResult<()> {
    if !matches!(vm.control_stack.last(), Some(CtrlMark::Dest(_))) {
        return Err(VmError::CompilerError);
    }
    let addr = reserve_branch(vm, OP_BRANCH0)?;
    vm.control_stack.push(CtrlMark::Orig(addr));
    Ok(())
}

/// `REPEAT` — unconditional backward branch to `BEGIN`, patch `WHILE`.
pub fn compile_repeat(vm: &mut Vm) -> VmResult<()> {
    let while_addr = match vm.control_stack.pop() {
        Some(CtrlMark::Orig(addr)) => addr,
        other => {
            if let Some(m) = other {
                vm.control_stack.push(m);
            }
            return Err(VmError::CompilerError);
        }
    };
    let begin_addr = match vm.control_stack.pop() {
        Some(CtrlMark::Dest(addr)) => addr,
        other => {
            if let Some(m) = other {
                vm.control_stack.push(m);
            }
            return Err(VmError::CompilerError);
        }
    };
    vm.memory.comma(OP_BRANCH)?;
    vm.memory.comma(begin_addr as Cell)?;
    patch(vm, while_addr, vm.here())
}

/// `DO` — compile the loop header marker; `LOOP` branches back here.
pub fn compile_do(vm: &mut Vm) -> VmResult<()> {
    vm.memory.comma(OP_DO)?;
    vm.control_stack.push(CtrlMark::Dest(vm.here()));
    Ok(())
}

/// `?DO` — as `DO`, plus a compiled forward skip for `limit = start`.
pub fn compile_qdo(vm: &mut Vm) -> VmResult<()> {
    vm.memory.comma(OP_QDO)?;
    let skip_addr = vm.memory.comma(0)?;
    vm.control_stack.push(CtrlMark::QDo(vm.here(), skip_addr));
    Ok(())
}

/// `LOOP` — compile the unit-step iteration and backward branch.
pub fn compile_loop(vm: &mut Vm) -> VmResult<()> {
    finish_loop(vm, OP_LOOP)
}

/// `+LOOP` — compile the signed-step iteration and backward branch.
pub fn compile_plus_loop(vm: &mut Vm) -> VmResult<()> {
    finish_loop(vm, OP_PLUS_LOOP)
}

fn finish_loop(vm: &mut Vm, op: Cell) -> VmResult<()> {
    match vm.control_stack.pop() {
        Some(CtrlMark::Dest(dest)) => {
            vm.memory.comma(op)?;
            vm.memory.comma(dest as Cell)?;
            Ok(())
        }
        Some(CtrlMark::QDo(dest, skip_addr)) => {
            vm.memory.comma(op)?;
            vm.memory.comma(dest as Cell)?;
            patch(vm, skip_addr, vm.here())
        }
        other => {
            if let Some(m) = other {
                vm.control_stack.push(m);
            }
            Err(VmError::CompilerError)
        }
    }
}

/// `DOES>` — compile the marker that, the next time the most-recently
/// `CREATE`d word's runtime code is patched, resumes at the cell right
/// after this marker.
pub fn compile_does(vm: &mut Vm) -> VmResult<()> {
    vm.memory.comma(OP_DOES)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vm::Vm;

    fn compile_word(vm: &mut Vm, name: &str, body: impl FnOnce(&mut Vm) -> VmResult<()>) -> usize {
        colon_start(vm, name).unwrap();
        body(vm).unwrap();
        colon_end(vm).unwrap();
        vm.find(name).unwrap()
    }

    #[test]
    fn if_then_patches_forward_branch() {
        let mut vm = Vm::new();
        let handle = compile_word(&mut vm, "T", |vm| {
                compile_literal(vm, 1)?;
                compile_if(vm)?;
                compile_literal(vm, 42)?;
                compile_then(vm)
        });
        vm.execute(handle).unwrap();
        assert_eq!(vm.data_stack.pop().unwrap(), 42);
    }

    #[test]
    fn if_else_then_takes_else_branch_on_false() {
        let mut vm = Vm::new();
        let handle = compile_word(&mut vm, "T", |vm| {
                compile_literal(vm, 0)?;
                compile_if(vm)?;
                compile_literal(vm, 1)?;
                compile_else(vm)?;
                compile_literal(vm, 2)?;
                compile_then(vm)
        });
        vm.execute(handle).unwrap();
        assert_eq!(vm.data_stack.pop().unwrap(), 2);
    }

    #[test]
    fn unmatched_then_is_compiler_error() {
        let mut vm = Vm::new();
        colon_start(&mut vm, "T").unwrap();
        assert_eq!(compile_then(&mut vm), Err(VmError::CompilerError));
    }
}
