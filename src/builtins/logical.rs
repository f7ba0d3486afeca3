//! Comparison and bitwise-logic words, module "Logical Words".
//!
//! FORTH-79 booleans are all-bits-set (-1) for true and all-bits-clear
//! (0) for false.

use super::register_word as reg;
use crate::cell::Cell;
use crate::error::VmResult;
use crate::vm::Vm;

const TRUE: Cell = -1;
const FALSE: Cell = 0;

fn bool_cell(b: bool) -> Cell {
    if b {
        TRUE
    } else {
        FALSE
    }
}

pub fn register(vm: &mut Vm) {
    reg(vm, "=", "( a b -- flag )", eq);
    reg(vm, "<>", "( a b -- flag )", ne);
    reg(vm, "<", "( a b -- flag )", lt);
    reg(vm, ">", "( a b -- flag )", gt);
    reg(vm, "0=", "( n -- flag )", zero_eq);
    reg(vm, "0<", "( n -- flag )", zero_lt);
    reg(vm, "0>", "( n -- flag )", zero_gt);
    reg(vm, "AND", "( a b -- a&b )", and);
    reg(vm, "OR", "( a b -- a|b )", or);
    reg(vm, "XOR", "( a b -- a^b )", xor);
    reg(vm, "NOT", "( flag -- !flag )", not);
}

fn eq(vm: &mut Vm) -> VmResult<()> {
    let b = vm.data_stack.pop()?;
    let a = vm.data_stack.pop()?;
    vm.data_stack.push(bool_cell(a == b))
}

fn ne(vm: &mut Vm) -> VmResult<()> {
    let b = vm.data_stack.pop()?;
    let a = vm.data_stack.pop()?;
    vm.data_stack.push(bool_cell(a != b))
}

fn lt(vm: &mut Vm) -> VmResult<()> {
    let b = vm.data_stack.pop()?;
    let a = vm.data_stack.pop()?;
    vm.data_stack.push(bool_cell(a < b))
}

fn gt(vm: &mut Vm) -> VmResult<()> {
    let b = vm.data_stack.pop()?;
    let a = vm.data_stack.pop()?;
    vm.data_stack.push(bool_cell(a > b))
}

fn zero_eq(vm: &mut Vm) -> VmResult<()> {
    let n = vm.data_stack.pop()?;
    vm.data_stack.push(bool_cell(n == 0))
}

fn zero_lt(vm: &mut Vm) -> VmResult<()> {
    let n = vm.data_stack.pop()?;
    vm.data_stack.push(bool_cell(n < 0))
}

fn zero_gt(vm: &mut Vm) -> VmResult<()> {
    let n = vm.data_stack.pop()?;
    vm.data_stack.push(bool_cell(n > 0))
}

fn and(vm: &mut Vm) -> VmResult<()> {
    let b = vm.data_stack.pop()?;
    let a = vm.data_stack.pop()?;
    vm.data_stack.push(a & b)
}

fn or(vm: &mut Vm) -> VmResult<()> {
    let b = vm.data_stack.pop()?;
    let a = vm.data_stack.pop()?;
    vm.data_stack.push(a | b)
}

fn xor(vm: &mut Vm) -> VmResult<()> {
    let b = vm.data_stack.pop()?;
    let a = vm.data_stack.pop()?;
    vm.data_stack.push(a ^ b)
}

fn not(vm: &mut Vm) -> VmResult<()> {
    let n = vm.data_stack.pop()?;
    vm.data_stack.push(bool_cell(n == FALSE))
}

#[cfg(test)]
mod tests {
    use crate::interpreter::interpret;
    use crate::vm::Vm;

    #[test]
    fn equality_and_ordering() {
        let mut vm = Vm::new();
        interpret(&mut vm, "3 3 = 3 4 < 4 3 >");
        assert_eq!(vm.data_stack.pop().unwrap(), -1);
        assert_eq!(vm.data_stack.pop().unwrap(), -1);
        assert_eq!(vm.data_stack.pop().unwrap(), -1);
    }

    #[test]
    fn zero_comparisons() {
        let mut vm = Vm::new();
        interpret(&mut vm, "0 0= -5 0< 5 0>");
        assert_eq!(vm.data_stack.pop().unwrap(), -1);
        assert_eq!(vm.data_stack.pop().unwrap(), -1);
        assert_eq!(vm.data_stack.pop().unwrap(), -1);
    }

    #[test]
    fn bitwise_ops() {
        let mut vm = Vm::new();
        interpret(&mut vm, "12 10 AND 12 10 OR 12 10 XOR");
        assert_eq!(vm.data_stack.pop().unwrap(), 12 ^ 10);
        assert_eq!(vm.data_stack.pop().unwrap(), 12 | 10);
        assert_eq!(vm.data_stack.pop().unwrap(), 12 & 10);
    }
}
