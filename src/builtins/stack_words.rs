//! Data-stack manipulation words, module "Stack Words".
//!
//! `DUP DROP SWAP OVER ROT DEPTH PICK ROLL`, each with a normal/edge/error
//! suite in `harness::suites::stack_words`.

use super::register_word as reg;
use crate::cell::Cell;
use crate::error::VmResult;
use crate::vm::Vm;

pub fn register(vm: &mut Vm) {
    reg(vm, "DUP", "( n -- n n )", dup);
    reg(vm, "DROP", "( n -- )", drop_);
    reg(vm, "SWAP", "( a b -- b a )", swap);
    reg(vm, "OVER", "( a b -- a b a )", over);
    reg(vm, "ROT", "( a b c -- b c a )", rot);
    reg(vm, "DEPTH", "( -- n )", depth);
    reg(vm, "PICK", "(... n --... x )", pick);
    reg(vm, "ROLL", "(... n --... x )", roll);
    reg(vm, "2DROP", "( a b -- )", two_drop);
    reg(vm, "2DUP", "( a b -- a b a b )", two_dup);
    reg(vm, "2OVER", "( a b c d -- a b c d a b )", two_over);
    reg(vm, "2SWAP", "( a b c d -- c d a b )", two_swap);
    reg(vm, "2ROT", "( a b c d e f -- c d e f a b )", two_rot);
}

fn dup(vm: &mut Vm) -> VmResult<()> {
    let top = vm.data_stack.peek(0)?;
    vm.data_stack.push(top)
}

fn drop_(vm: &mut Vm) -> VmResult<()> {
    vm.data_stack.pop().map(|_| ())
}

fn swap(vm: &mut Vm) -> VmResult<()> {
    let a = vm.data_stack.pop()?;
    let b = vm.data_stack.pop()?;
    vm.data_stack.push(a)?;
    vm.data_stack.push(b)
}

fn over(vm: &mut Vm) -> VmResult<()> {
    let x = vm.data_stack.peek(1)?;
    vm.data_stack.push(x)
}

fn rot(vm: &mut Vm) -> VmResult<()> {
    let c = vm.data_stack.pop()?;
    let b = vm.data_stack.pop()?;
    let a = vm.data_stack.pop()?;
    vm.data_stack.push(b)?;
    vm.data_stack.push(c)?;
    vm.data_stack.push(a)
}

fn depth(vm: &mut Vm) -> VmResult<()> {
    let n = vm.data_stack.depth() as Cell;
    vm.data_stack.push(n)
}

fn pick(vm: &mut Vm) -> VmResult<()> {
    let n = vm.data_stack.pop()?;
    let value = vm.data_stack.peek(n as usize)?;
    vm.data_stack.push(value)
}

fn roll(vm: &mut Vm) -> VmResult<()> {
    let n = vm.data_stack.pop()?;
    if n == 0 {
        return Ok(());
    }
    let value = vm.data_stack.remove(n as usize)?;
    vm.data_stack.push(value)
}

fn two_drop(vm: &mut Vm) -> VmResult<()> {
    vm.data_stack.pop()?;
    vm.data_stack.pop()?;
    Ok(())
}

fn two_dup(vm: &mut Vm) -> VmResult<()> {
    let b = vm.data_stack.peek(0)?;
    let a = vm.data_stack.peek(1)?;
    vm.data_stack.push(a)?;
    vm.data_stack.push(b)
}

fn two_over(vm: &mut Vm) -> VmResult<()> {
    let b = vm.data_stack.peek(2)?;
    let a = vm.data_stack.peek(3)?;
    vm.data_stack.push(a)?;
    vm.data_stack.push(b)
}

fn two_swap(vm: &mut Vm) -> VmResult<()> {
    let d = vm.data_stack.pop()?;
    let c = vm.data_stack.pop()?;
    let b = vm.data_stack.pop()?;
    let a = vm.data_stack.pop()?;
    vm.data_stack.push(c)?;
    vm.data_stack.push(d)?;
    vm.data_stack.push(a)?;
    vm.data_stack.push(b)
}

fn two_rot(vm: &mut Vm) -> VmResult<()> {
    let f = vm.data_stack.pop()?;
    let e = vm.data_stack.pop()?;
    let d = vm.data_stack.pop()?;
    let c = vm.data_stack.pop()?;
    let b = vm.data_stack.pop()?;
    let a = vm.data_stack.pop()?;
    vm.data_stack.push(c)?;
    vm.data_stack.push(d)?;
    vm.data_stack.push(e)?;
    vm.data_stack.push(f)?;
    vm.data_stack.push(a)?;
    vm.data_stack.push(b)
}

#[cfg(test)]
mod tests {
    use crate::interpreter::interpret;
    use crate::vm::Vm;

    #[test]
    fn dup_duplicates_top() {
        let mut vm = Vm::new();
        interpret(&mut vm, "5 DUP");
        assert_eq!(vm.data_stack.pop().unwrap(), 5);
        assert_eq!(vm.data_stack.pop().unwrap(), 5);
    }

    #[test]
    fn dup_on_empty_stack_underflows() {
        let mut vm = Vm::new();
        interpret(&mut vm, "DUP");
        assert_eq!(vm.error, Some(crate::error::VmError::StackUnderflow));
        assert_eq!(vm.data_stack.sp(), -1);
    }

    #[test]
    fn swap_swap_is_identity() {
        let mut vm = Vm::new();
        interpret(&mut vm, "1 2 SWAP SWAP");
        assert_eq!(vm.data_stack.pop().unwrap(), 2);
        assert_eq!(vm.data_stack.pop().unwrap(), 1);
    }

    #[test]
    fn rot_rotates_third_to_top() {
        let mut vm = Vm::new();
        interpret(&mut vm, "1 2 3 ROT");
        assert_eq!(vm.data_stack.pop().unwrap(), 1);
        assert_eq!(vm.data_stack.pop().unwrap(), 3);
        assert_eq!(vm.data_stack.pop().unwrap(), 2);
    }

    #[test]
    fn pick_zero_is_dup() {
        let mut vm = Vm::new();
        interpret(&mut vm, "9 0 PICK");
        assert_eq!(vm.data_stack.pop().unwrap(), 9);
        assert_eq!(vm.data_stack.pop().unwrap(), 9);
    }
}
