//! Single-cell arithmetic words, module "Arithmetic Words".
//!
//! `+ - * / MOD /MOD ABS NEGATE MIN MAX`.

use super::register_word as reg;
use crate::error::{VmError, VmResult};
use crate::vm::Vm;

pub fn register(vm: &mut Vm) {
    reg(vm, "+", "( a b -- a+b )", add);
    reg(vm, "-", "( a b -- a-b )", sub);
    reg(vm, "*", "( a b -- a*b )", mul);
    reg(vm, "/", "( a b -- a/b )", div);
    reg(vm, "MOD", "( a b -- a mod b )", modulo);
    reg(vm, "/MOD", "( a b -- rem quot )", slash_mod);
    reg(vm, "ABS", "( n -- |n| )", abs);
    reg(vm, "NEGATE", "( n -- -n )", negate);
    reg(vm, "MIN", "( a b -- min )", min);
    reg(vm, "MAX", "( a b -- max )", max);
    reg(vm, "1+", "( n -- n+1 )", one_plus);
    reg(vm, "1-", "( n -- n-1 )", one_minus);
    reg(vm, "2+", "( n -- n+2 )", two_plus);
    reg(vm, "2-", "( n -- n-2 )", two_minus);
    reg(vm, "2*", "( n -- n*2 )", two_star);
    reg(vm, "2/", "( n -- n/2 )", two_slash);
}

fn add(vm: &mut Vm) -> VmResult<()> {
    let b = vm.data_stack.pop()?;
    let a = vm.data_stack.pop()?;
    vm.data_stack.push(a.wrapping_add(b))
}

fn sub(vm: &mut Vm) -> VmResult<()> {
    let b = vm.data_stack.pop()?;
    let a = vm.data_stack.pop()?;
    vm.data_stack.push(a.wrapping_sub(b))
}

fn mul(vm: &mut Vm) -> VmResult<()> {
    let b = vm.data_stack.pop()?;
    let a = vm.data_stack.pop()?;
    vm.data_stack.push(a.wrapping_mul(b))
}

fn div(vm: &mut Vm) -> VmResult<()> {
    let b = vm.data_stack.pop()?;
    let a = vm.data_stack.pop()?;
    if b == 0 {
        return Err(VmError::DivisionByZero);
    }
    vm.data_stack.push(a.wrapping_div(b))
}

fn modulo(vm: &mut Vm) -> VmResult<()> {
    let b = vm.data_stack.pop()?;
    let a = vm.data_stack.pop()?;
    if b == 0 {
        return Err(VmError::DivisionByZero);
    }
    vm.data_stack.push(a.wrapping_rem(b))
}

fn slash_mod(vm: &mut Vm) -> VmResult<()> {
    let b = vm.data_stack.pop()?;
    let a = vm.data_stack.pop()?;
    if b == 0 {
        return Err(VmError::DivisionByZero);
    }
    vm.data_stack.push(a.wrapping_rem(b))?;
    vm.data_stack.push(a.wrapping_div(b))
}

fn abs(vm: &mut Vm) -> VmResult<()> {
    let n = vm.data_stack.pop()?;
    vm.data_stack.push(n.wrapping_abs())
}

fn negate(vm: &mut Vm) -> VmResult<()> {
    let n = vm.data_stack.pop()?;
    vm.data_stack.push(n.wrapping_neg())
}

fn min(vm: &mut Vm) -> VmResult<()> {
    let b = vm.data_stack.pop()?;
    let a = vm.data_stack.pop()?;
    vm.data_stack.push(a.min(b))
}

fn max(vm: &mut Vm) -> VmResult<()> {
    let b = vm.data_stack.pop()?;
    let a = vm.data_stack.pop()?;
    vm.data_stack.push(a.max(b))
}

fn one_plus(vm: &mut Vm) -> VmResult<()> {
    let n = vm.data_stack.pop()?;
    vm.data_stack.push(n.wrapping_add(1))
}

fn one_minus(vm: &mut Vm) -> VmResult<()> {
    let n = vm.data_stack.pop()?;
    vm.data_stack.push(n.wrapping_sub(1))
}

fn two_plus(vm: &mut Vm) -> VmResult<()> {
    let n = vm.data_stack.pop()?;
    vm.data_stack.push(n.wrapping_add(2))
}

fn two_minus(vm: &mut Vm) -> VmResult<()> {
    let n = vm.data_stack.pop()?;
    vm.data_stack.push(n.wrapping_sub(2))
}

fn two_star(vm: &mut Vm) -> VmResult<()> {
    let n = vm.data_stack.pop()?;
    vm.data_stack.push(n.wrapping_shl(1))
}

fn two_slash(vm: &mut Vm) -> VmResult<()> {
    let n = vm.data_stack.pop()?;
    vm.data_stack.push(n.wrapping_shr(1))
}

#[cfg(test)]
mod tests {
    use crate::interpreter::interpret;
    use crate::vm::Vm;

    #[test]
    fn add_sub_mul() {
        let mut vm = Vm::new();
        interpret(&mut vm, "3 4 + 2 * 5 -");
        assert_eq!(vm.data_stack.pop().unwrap(), 9);
    }

    #[test]
    fn divide_by_zero_is_recorded() {
        let mut vm = Vm::new();
        interpret(&mut vm, "1 0 /");
        assert_eq!(vm.error, Some(crate::error::VmError::DivisionByZero));
    }

    #[test]
    fn slash_mod_leaves_remainder_then_quotient() {
        let mut vm = Vm::new();
        interpret(&mut vm, "7 2 /MOD");
        assert_eq!(vm.data_stack.pop().unwrap(), 3);
        assert_eq!(vm.data_stack.pop().unwrap(), 1);
    }

    #[test]
    fn min_max() {
        let mut vm = Vm::new();
        interpret(&mut vm, "3 7 MIN 3 7 MAX");
        assert_eq!(vm.data_stack.pop().unwrap(), 7);
        assert_eq!(vm.data_stack.pop().unwrap(), 3);
    }
}
