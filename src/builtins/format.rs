//! Numeric base and pictured-output words, module "Format
//! Words".
//!
//! `BASE` is a true memory variable (`16 BASE ! 255. CR` must print
//! `FF`), so `.`/parsing read it back through
//! [`Vm::base`](crate::vm::Vm::base) rather than a cached copy.
//! `<# # #S SIGN HOLD #>` wrap the
//! [`PicturedOutput`](crate::numeric::PicturedOutput) scratch buffer
//! already carried on `vm.pictured`.

use super::register_word as reg;
use crate::cell::Cell;
use crate::error::VmResult;
use crate::vm::{Vm, BASE_ADDR};

pub fn register(vm: &mut Vm) {
    reg(vm, "BASE", "( -- addr )", base_addr);
    reg(vm, "DECIMAL", "( -- )", decimal);
    reg(vm, "HEX", "( -- )", hex);
    reg(vm, "OCTAL", "( -- )", octal);
    reg(vm, "<#", "( -- )", pic_begin);
    reg(vm, "#", "( ud1 -- ud2 )", pic_hash);
    reg(vm, "#S", "( ud -- 0 0 )", pic_hash_s);
    reg(vm, "SIGN", "( n -- )", pic_sign);
    reg(vm, "HOLD", "( c -- )", pic_hold);
    reg(vm, "#>", "( ud -- addr len )", pic_end);
}

/// `BASE` pushes its own address, exactly like a `VARIABLE`, so `@`/`!`
/// read and write the radix directly.
fn base_addr(vm: &mut Vm) -> VmResult<()> {
    vm.data_stack.push(BASE_ADDR as Cell)
}

fn decimal(vm: &mut Vm) -> VmResult<()> {
    vm.set_base(10);
    Ok(())
}

fn hex(vm: &mut Vm) -> VmResult<()> {
    vm.set_base(16);
    Ok(())
}

fn octal(vm: &mut Vm) -> VmResult<()> {
    vm.set_base(8);
    Ok(())
}

fn pic_begin(vm: &mut Vm) -> VmResult<()> {
    vm.pictured.begin();
    Ok(())
}

/// `#` consumes the double on the stack as an unsigned 128-bit magnitude
/// (low cell first) and leaves the reduced magnitude back as a double.
fn pic_hash(vm: &mut Vm) -> VmResult<()> {
    let hi = vm.data_stack.pop()?;
    let lo = vm.data_stack.pop()?;
    let ud = ((hi as u64 as u128) << 64) | (lo as u64 as u128);
    let base = vm.base();
    let reduced = vm.pictured.hash(ud, base)?;
    vm.data_stack.push(reduced as u64 as Cell)?;
    vm.data_stack.push((reduced >> 64) as u64 as Cell)
}

fn pic_hash_s(vm: &mut Vm) -> VmResult<()> {
    let hi = vm.data_stack.pop()?;
    let lo = vm.data_stack.pop()?;
    let ud = ((hi as u64 as u128) << 64) | (lo as u64 as u128);
    let base = vm.base();
    vm.pictured.hash_s(ud, base)?;
    vm.data_stack.push(0)?;
    vm.data_stack.push(0)
}

fn pic_sign(vm: &mut Vm) -> VmResult<()> {
    let n = vm.data_stack.pop()?;
    vm.pictured.sign(n)
}

fn pic_hold(vm: &mut Vm) -> VmResult<()> {
    let c = vm.data_stack.pop()?;
    vm.pictured.hold(c as u8)
}

/// `#>` — finish the pictured conversion, writing the text into `PAD`
/// and leaving its address and length.
fn pic_end(vm: &mut Vm) -> VmResult<()> {
    vm.data_stack.pop()?;
    vm.data_stack.pop()?;
    let text = vm.pictured.finish();
    let addr = vm.pad;
    vm.memory.write_bytes(addr, &text)?;
    vm.data_stack.push(addr as Cell)?;
    vm.data_stack.push(text.len() as Cell)
}

#[cfg(test)]
mod tests {
    use crate::interpreter::interpret;
    use crate::vm::Vm;

    #[test]
    fn base_is_a_real_memory_cell() {
        let mut vm = Vm::new();
        interpret(&mut vm, "16 BASE !");
        assert_eq!(vm.error, None, "{:?}", vm.error);
        assert_eq!(vm.base(), 16);
    }

    #[test]
    fn decimal_hex_octal_set_base() {
        let mut vm = Vm::new();
        interpret(&mut vm, "HEX");
        assert_eq!(vm.base(), 16);
        interpret(&mut vm, "OCTAL");
        assert_eq!(vm.base(), 8);
        interpret(&mut vm, "DECIMAL");
        assert_eq!(vm.base(), 10);
    }

    #[test]
    fn pictured_output_converts_magnitude() {
        let mut vm = Vm::new();
        interpret(&mut vm, "1234 0 <# #S #>");
        assert_eq!(vm.error, None, "{:?}", vm.error);
        let len = vm.data_stack.pop().unwrap();
        let addr = vm.data_stack.pop().unwrap();
        let bytes = vm.memory.read_bytes(addr as usize, len as usize).unwrap();
        assert_eq!(bytes, b"1234");
    }
}
