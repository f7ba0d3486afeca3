//! Control-flow words, module
//! "Control Words".
//!
//! Every compiling word here is a thin wrapper around the matching
//! `compiler::compile_*` function, which does the actual branch
//! reservation/patching against `vm.control_stack`. `I`/`J` are the
//! only two ordinary (non-immediate) words in this file — they read
//! the loop index/limit pair `DO` pushed onto the return stack.

use super::register_immediate_word as reg_imm;
use super::register_word as reg;
use crate::compiler;
use crate::error::VmResult;
use crate::vm::Vm;

pub fn register(vm: &mut Vm) {
    reg_imm(vm, "IF", "( flag -- )", if_word);
    reg_imm(vm, "ELSE", "( -- )", else_word);
    reg_imm(vm, "THEN", "( -- )", then_word);
    reg_imm(vm, "BEGIN", "( -- )", begin_word);
    reg_imm(vm, "UNTIL", "( flag -- )", until_word);
    reg_imm(vm, "WHILE", "( flag -- )", while_word);
    reg_imm(vm, "REPEAT", "( -- )", repeat_word);
    reg_imm(vm, "DO", "( limit start -- )", do_word);
    reg_imm(vm, "?DO", "( limit start -- )", qdo_word);
    reg_imm(vm, "LOOP", "( -- )", loop_word);
    reg_imm(vm, "+LOOP", "( n -- )", plus_loop_word);
    reg(vm, "I", "( -- n )", i_word);
    reg(vm, "J", "( -- n )", j_word);
}

fn if_word(vm: &mut Vm) -> VmResult<()> {
    compiler::compile_if(vm)
}

fn else_word(vm: &mut Vm) -> VmResult<()> {
    compiler::compile_else(vm)
}

fn then_word(vm: &mut Vm) -> VmResult<()> {
    compiler::compile_then(vm)
}

fn begin_word(vm: &mut Vm) -> VmResult<()> {
    compiler::compile_begin(vm)
}

fn until_word(vm: &mut Vm) -> VmResult<()> {
    compiler::compile_until(vm)
}

fn while_word(vm: &mut Vm) -> VmResult<()> {
    compiler::compile_while(vm)
}

fn repeat_word(vm: &mut Vm) -> VmResult<()> {
    compiler::compile_repeat(vm)
}

fn do_word(vm: &mut Vm) -> VmResult<()> {
    compiler::compile_do(vm)
}

fn qdo_word(vm: &mut Vm) -> VmResult<()> {
    compiler::compile_qdo(vm)
}

fn loop_word(vm: &mut Vm) -> VmResult<()> {
    compiler::compile_loop(vm)
}

fn plus_loop_word(vm: &mut Vm) -> VmResult<()> {
    compiler::compile_plus_loop(vm)
}

/// `I` — the innermost loop's current index.
fn i_word(vm: &mut Vm) -> VmResult<()> {
    let idx = vm.loop_index()?;
    vm.data_stack.push(idx)
}

/// `J` — the index of the loop one level outside the innermost `DO`.
fn j_word(vm: &mut Vm) -> VmResult<()> {
    let idx = vm.loop_index_outer()?;
    vm.data_stack.push(idx)
}

#[cfg(test)]
mod tests {
    use crate::interpreter::interpret;
    use crate::vm::Vm;

    #[test]
    fn if_else_then_picks_the_right_branch() {
        let mut vm = Vm::new();
        interpret(&mut vm, ": SIGN DUP 0< IF DROP -1 ELSE 0> IF 1 ELSE 0 THEN THEN ; -5 SIGN");
        assert_eq!(vm.error, None, "{:?}", vm.error);
        assert_eq!(vm.data_stack.pop().unwrap(), -1);
    }

    #[test]
    fn begin_until_loops_until_flag_true() {
        let mut vm = Vm::new();
        interpret(&mut vm, ": COUNT-UP 0 BEGIN 1+ DUP 5 = UNTIL ; COUNT-UP");
        assert_eq!(vm.error, None, "{:?}", vm.error);
        assert_eq!(vm.data_stack.pop().unwrap(), 5);
    }

    #[test]
    fn begin_while_repeat_accumulates() {
        let mut vm = Vm::new();
        interpret(&mut vm, ": SUM-TO 0 SWAP BEGIN DUP 0> WHILE DUP ROT + SWAP 1- REPEAT DROP ; 4 SUM-TO");
        assert_eq!(vm.error, None, "{:?}", vm.error);
        assert_eq!(vm.data_stack.pop().unwrap(), 10);
    }

    #[test]
    fn do_loop_runs_the_correct_number_of_times() {
        let mut vm = Vm::new();
        interpret(&mut vm, ": COUNT 0 5 0 DO 1+ LOOP ; COUNT");
        assert_eq!(vm.error, None, "{:?}", vm.error);
        assert_eq!(vm.data_stack.pop().unwrap(), 5);
    }

    #[test]
    fn qdo_skips_entirely_when_limit_equals_start() {
        let mut vm = Vm::new();
        interpret(&mut vm, ": COUNT 0 3 3 ?DO 1+ LOOP ; COUNT");
        assert_eq!(vm.error, None, "{:?}", vm.error);
        assert_eq!(vm.data_stack.pop().unwrap(), 0);
    }

    #[test]
    fn i_reports_the_current_loop_index() {
        let mut vm = Vm::new();
        interpret(&mut vm, ": SUM-IDX 0 5 0 DO I + LOOP ; SUM-IDX");
        assert_eq!(vm.error, None, "{:?}", vm.error);
        assert_eq!(vm.data_stack.pop().unwrap(), 0 + 1 + 2 + 3 + 4);
    }

    #[test]
    fn j_reports_the_outer_loop_index() {
        let mut vm = Vm::new();
        interpret(&mut vm, ": NEST 0 2 0 DO 2 0 DO J + LOOP LOOP ; NEST");
        assert_eq!(vm.error, None, "{:?}", vm.error);
        // outer index 0 twice, outer index 1 twice: 0+0+1+1
        assert_eq!(vm.data_stack.pop().unwrap(), 2);
    }

    #[test]
    fn plus_loop_honors_a_custom_step() {
        let mut vm = Vm::new();
        interpret(&mut vm, ": EVENS 0 10 0 DO I + 2 +LOOP ; EVENS");
        assert_eq!(vm.error, None, "{:?}", vm.error);
        assert_eq!(vm.data_stack.pop().unwrap(), 0 + 2 + 4 + 6 + 8);
    }
}
