//! Return-stack transfer words, module "Return Stack Words".
//!
//! `>R R> R@` move values between the data stack and the return stack,
//! which FORTH-79 keeps strictly separate.

use super::register_word as reg;
use crate::error::VmResult;
use crate::vm::Vm;

pub fn register(vm: &mut Vm) {
    reg(vm, ">R", "( n -- ) ( R: -- n )", to_r);
    reg(vm, "R>", "( -- n ) ( R: n -- )", from_r);
    reg(vm, "R@", "( -- n ) ( R: n -- n )", r_fetch);
}

fn to_r(vm: &mut Vm) -> VmResult<()> {
    let n = vm.data_stack.pop()?;
    vm.return_stack.push(n)
}

fn from_r(vm: &mut Vm) -> VmResult<()> {
    let n = vm.return_stack.pop()?;
    vm.data_stack.push(n)
}

fn r_fetch(vm: &mut Vm) -> VmResult<()> {
    let n = vm.return_stack.peek(0)?;
    vm.data_stack.push(n)
}

#[cfg(test)]
mod tests {
    use crate::interpreter::interpret;
    use crate::vm::Vm;

    #[test]
    fn to_r_from_r_round_trips() {
        let mut vm = Vm::new();
        interpret(&mut vm, "42 >R R>");
        assert_eq!(vm.data_stack.pop().unwrap(), 42);
    }

    #[test]
    fn r_fetch_does_not_consume() {
        let mut vm = Vm::new();
        interpret(&mut vm, "42 >R R@ R>");
        assert_eq!(vm.data_stack.pop().unwrap(), 42);
        assert_eq!(vm.data_stack.pop().unwrap(), 42);
    }
}
