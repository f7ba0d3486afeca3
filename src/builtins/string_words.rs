//! Byte-string primitives, module "String Words".
//!
//! `CMOVE`/`CMOVE>` move possibly-overlapping byte ranges in opposite
//! directions; `COUNT` unpacks a counted string; `SCAN`/`SKIP` walk a
//! range looking for/past one character; `SEARCH` finds a substring.
//! `BLANK` is registered in `memory_words` alongside `FILL`/`ERASE`.

use super::register_word as reg;
use crate::cell::Cell;
use crate::error::VmResult;
use crate::vm::Vm;

pub fn register(vm: &mut Vm) {
    reg(vm, "CMOVE", "( src dst n -- )", cmove);
    reg(vm, "CMOVE>", "( src dst n -- )", cmove_up);
    reg(vm, "COMPARE", "( addr1 len1 addr2 len2 -- n )", compare);
    reg(vm, "COUNT", "( addr -- addr+1 len )", count);
    reg(vm, "SCAN", "( addr len char -- addr' len' )", scan);
    reg(vm, "SEARCH", "( addr1 len1 addr2 len2 -- addr len flag )", search);
    reg(vm, "SKIP", "( addr len char -- addr' len' )", skip);
}

/// `CMOVE` — copy low-to-high; correct when `dst < src` or ranges don't overlap.
fn cmove(vm: &mut Vm) -> VmResult<()> {
    let n = vm.data_stack.pop()? as usize;
    let dst = vm.data_stack.pop()? as usize;
    let src = vm.data_stack.pop()? as usize;
    for i in 0..n {
        let b = vm.memory.fetch_byte(src + i)?;
        vm.memory.store_byte(dst + i, b as Cell)?;
    }
    Ok(())
}

/// `CMOVE>` — copy high-to-low; correct when `dst > src`.
fn cmove_up(vm: &mut Vm) -> VmResult<()> {
    let n = vm.data_stack.pop()? as usize;
    let dst = vm.data_stack.pop()? as usize;
    let src = vm.data_stack.pop()? as usize;
    for i in (0..n).rev() {
        let b = vm.memory.fetch_byte(src + i)?;
        vm.memory.store_byte(dst + i, b as Cell)?;
    }
    Ok(())
}

/// `COMPARE` — lexicographic comparison, `-1`/`0`/`1`.
fn compare(vm: &mut Vm) -> VmResult<()> {
    let len2 = vm.data_stack.pop()? as usize;
    let addr2 = vm.data_stack.pop()? as usize;
    let len1 = vm.data_stack.pop()? as usize;
    let addr1 = vm.data_stack.pop()? as usize;
    let s1 = vm.memory.read_bytes(addr1, len1)?;
    let s2 = vm.memory.read_bytes(addr2, len2)?;
    let result = match s1.cmp(s2) {
        std::cmp::Ordering::Less => -1,
        std::cmp::Ordering::Equal => 0,
        std::cmp::Ordering::Greater => 1,
    };
    vm.data_stack.push(result)
}

/// `COUNT` — unpack a length-prefixed string: `addr` holds the length
/// byte, the text follows immediately.
fn count(vm: &mut Vm) -> VmResult<()> {
    let addr = vm.data_stack.pop()? as usize;
    let len = vm.memory.fetch_byte(addr)?;
    vm.data_stack.push(addr as Cell + 1)?;
    vm.data_stack.push(len as Cell)
}

/// `SCAN` — advance past bytes that are not `char`, stopping at the
/// first match or when the range is exhausted.
fn scan(vm: &mut Vm) -> VmResult<()> {
    let ch = vm.data_stack.pop()? as u8;
    let len = vm.data_stack.pop()? as usize;
    let addr = vm.data_stack.pop()? as usize;
    let mut i = 0;
    while i < len {
        if vm.memory.fetch_byte(addr + i)? == ch {
            break;
        }
        i += 1;
    }
    vm.data_stack.push((addr + i) as Cell)?;
    vm.data_stack.push((len - i) as Cell)
}

/// `SKIP` — advance past bytes that equal `char`.
fn skip(vm: &mut Vm) -> VmResult<()> {
    let ch = vm.data_stack.pop()? as u8;
    let len = vm.data_stack.pop()? as usize;
    let addr = vm.data_stack.pop()? as usize;
    let mut i = 0;
    while i < len {
        if vm.memory.fetch_byte(addr + i)? != ch {
            break;
        }
        i += 1;
    }
    vm.data_stack.push((addr + i) as Cell)?;
    vm.data_stack.push((len - i) as Cell)
}

/// `SEARCH` — find the first occurrence of string 2 in string 1;
/// `flag` is true (`-1`) iff found.
fn search(vm: &mut Vm) -> VmResult<()> {
    let len2 = vm.data_stack.pop()? as usize;
    let addr2 = vm.data_stack.pop()? as usize;
    let len1 = vm.data_stack.pop()? as usize;
    let addr1 = vm.data_stack.pop()? as usize;
    let haystack = vm.memory.read_bytes(addr1, len1)?;
    let needle = vm.memory.read_bytes(addr2, len2)?;
    if needle.is_empty() || needle.len() > haystack.len() {
        vm.data_stack.push(addr1 as Cell)?;
        vm.data_stack.push(len1 as Cell)?;
        return vm.data_stack.push(if needle.is_empty() { -1 } else { 0 });
    }
    match haystack.windows(needle.len()).position(|w| w == needle) {
        Some(pos) => {
            vm.data_stack.push((addr1 + pos) as Cell)?;
            vm.data_stack.push((len1 - pos) as Cell)?;
            vm.data_stack.push(-1)
        }
        None => {
            vm.data_stack.push(addr1 as Cell)?;
            vm.data_stack.push(len1 as Cell)?;
            vm.data_stack.push(0)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::interpreter::interpret;
    use crate::vm::Vm;

    #[test]
    fn cmove_copies_forward() {
        let mut vm = Vm::new();
        interpret(&mut vm, "HERE 10 + HERE 20 + 5 CMOVE");
        assert_eq!(vm.error, None, "{:?}", vm.error);
    }

    #[test]
    fn count_unpacks_length_prefixed_string() {
        let mut vm = Vm::new();
        let addr = vm.here();
        vm.memory.comma_byte(3).unwrap();
        vm.memory.write_bytes(addr + 1, b"cat").unwrap();
        vm.memory.allot(3).unwrap();
        vm.data_stack.push(addr as i64).unwrap();
        super::count(&mut vm).unwrap();
        assert_eq!(vm.data_stack.pop().unwrap(), 3);
        assert_eq!(vm.data_stack.pop().unwrap(), addr as i64 + 1);
    }

    #[test]
    fn compare_orders_lexicographically() {
        let mut vm = Vm::new();
        let a = vm.here();
        vm.memory.write_bytes(a, b"abc").unwrap();
        vm.memory.allot(3).unwrap();
        let b = vm.here();
        vm.memory.write_bytes(b, b"abd").unwrap();
        vm.memory.allot(3).unwrap();
        vm.data_stack.push(a as i64).unwrap();
        vm.data_stack.push(3).unwrap();
        vm.data_stack.push(b as i64).unwrap();
        vm.data_stack.push(3).unwrap();
        super::compare(&mut vm).unwrap();
        assert_eq!(vm.data_stack.pop().unwrap(), -1);
    }
}
