//! Block I/O words, module "Block Words".
//!
//! Thin wrappers over the already-complete
//! [`BlockStore`](crate::block::BlockStore) that map/unmap buffers into
//! [`Vm::block_window`](crate::vm::Vm::block_window) so ordinary `@`/`!`
//! can read and write block contents.

use super::register_word as reg;
use crate::cell::Cell;
use crate::error::VmResult;
use crate::vm::Vm;

pub fn register(vm: &mut Vm) {
    reg(vm, "BLOCK", "( n -- addr )", block);
    reg(vm, "BUFFER", "( n -- addr )", buffer);
    reg(vm, "UPDATE", "( -- )", update);
    reg(vm, "SAVE-BUFFERS", "( -- )", save_buffers);
    reg(vm, "EMPTY-BUFFERS", "( -- )", empty_buffers);
    reg(vm, "FLUSH", "( -- )", flush);
    reg(vm, "LOAD", "( n -- )", load);
    reg(vm, "LIST", "( n -- )", list);
    reg(vm, "SCR", "( -- addr )", scr_addr);
    reg(vm, "THRU", "( n1 n2 -- )", thru);
    reg(vm, "-->", "( -- )", continue_load);
}

fn block(vm: &mut Vm) -> VmResult<()> {
    let n = vm.data_stack.pop()?;
    let idx = vm.blocks.block(n)?;
    let addr = vm.map_block(idx)?;
    vm.data_stack.push(addr as Cell)
}

fn buffer(vm: &mut Vm) -> VmResult<()> {
    let n = vm.data_stack.pop()?;
    let idx = vm.blocks.buffer(n)?;
    let addr = vm.map_block(idx)?;
    vm.data_stack.push(addr as Cell)
}

fn update(vm: &mut Vm) -> VmResult<()> {
    vm.update_current_block()
}

fn save_buffers(vm: &mut Vm) -> VmResult<()> {
    vm.update_current_block()?;
    vm.blocks.save_buffers();
    Ok(())
}

fn empty_buffers(vm: &mut Vm) -> VmResult<()> {
    vm.blocks.empty_buffers();
    vm.current_block = None;
    Ok(())
}

fn flush(vm: &mut Vm) -> VmResult<()> {
    vm.update_current_block()?;
    vm.blocks.flush();
    vm.current_block = None;
    Ok(())
}

/// `LOAD` — interpret a block's contents as FORTH source. Blocks are 1024 bytes of fixed-width text with no
/// embedded newlines; trailing spaces are trimmed before interpreting.
fn load(vm: &mut Vm) -> VmResult<()> {
    let n = vm.data_stack.pop()?;
    let idx = vm.blocks.block(n)?;
    let text = String::from_utf8_lossy(vm.blocks.data(idx)).trim_end().to_string();
    let prev_loading = vm.loading_block;
    vm.loading_block = Some(n);
    crate::interpreter::interpret(vm, &text);
    vm.loading_block = prev_loading;
    Ok(())
}

/// `LIST` — print a block's contents, sixteen lines of sixty-four
/// characters each, and record it in `SCR`.
fn list(vm: &mut Vm) -> VmResult<()> {
    let n = vm.data_stack.pop()?;
    let idx = vm.blocks.block(n)?;
    let data = *vm.blocks.data(idx);
    vm.set_scr(n);
    for line in 0..16 {
        let start = line * 64;
        let text = String::from_utf8_lossy(&data[start..start + 64]);
        println!("{line:2}: {}", text.trim_end());
    }
    Ok(())
}

fn scr_addr(vm: &mut Vm) -> VmResult<()> {
    vm.data_stack.push(crate::vm::SCR_ADDR as Cell)
}

/// `THRU` — `LOAD` every block from `n1` to `n2` inclusive. Reversed
/// endpoints (`n1 > n2`) are auto-swapped and load the same forward range.
fn thru(vm: &mut Vm) -> VmResult<()> {
    let n2 = vm.data_stack.pop()?;
    let n1 = vm.data_stack.pop()?;
    let (lo, hi) = if n1 <= n2 { (n1, n2) } else { (n2, n1) };
    for n in lo..=hi {
        vm.data_stack.push(n)?;
        load(vm)?;
        if vm.error.is_some() {
            break;
        }
    }
    Ok(())
}

/// `-->` — continue loading with the next block after the one
/// currently being `LOAD`ed.
fn continue_load(vm: &mut Vm) -> VmResult<()> {
    if let Some(n) = vm.loading_block {
        vm.data_stack.push(n + 1)?;
        load(vm)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::interpreter::interpret;
    use crate::vm::Vm;

    #[test]
    fn block_maps_into_memory_for_at_and_store() {
        let mut vm = Vm::new();
        interpret(&mut vm, "1 BLOCK 42 OVER ! @");
        assert_eq!(vm.error, None, "{:?}", vm.error);
        assert_eq!(vm.data_stack.pop().unwrap(), 42);
    }

    #[test]
    fn update_marks_the_mapped_buffer_dirty() {
        let mut vm = Vm::new();
        interpret(&mut vm, "1 BLOCK 42 SWAP ! UPDATE");
        assert_eq!(vm.error, None, "{:?}", vm.error);
        interpret(&mut vm, "SAVE-BUFFERS");
        assert_eq!(vm.error, None, "{:?}", vm.error);
    }

    #[test]
    fn load_interprets_block_text() {
        let mut vm = Vm::new();
        let idx = vm.blocks.block(2).unwrap();
        let mut data = [b' '; crate::block::BLOCK_SIZE];
        data[..7].copy_from_slice(b"3 4 + ");
        *vm.blocks.data_mut(idx) = data;
        interpret(&mut vm, "2 LOAD");
        assert_eq!(vm.error, None, "{:?}", vm.error);
        assert_eq!(vm.data_stack.pop().unwrap(), 7);
    }
}
