//! The VM aggregate and the inner-interpreter loop that runs
//! colon-thread bodies.
//!
//! One struct owns the stacks, dictionary, and every piece of
//! cold-start state, with a single `new` constructor bringing it up;
//! `Stack`/`Memory`/`Dictionary`/`VocabularyTable`/`BlockStore` are the
//! typed collaborators built in the sibling modules.

use crate::block::BlockStore;
use crate::builtins::{self, BuiltinFn};
use crate::cell::{Cell, CELL_SIZE, OP_BRANCH, OP_BRANCH0, OP_DOES, OP_DO, OP_EXIT, OP_LITERAL, OP_LOOP, OP_PLUS_LOOP, OP_QDO, OP_STRLIT};
use crate::dictionary::{Dictionary, DictSnapshot, WordCode};
use crate::error::{VmError, VmResult};
use crate::memory::Memory;
use crate::messages::Msg;
use crate::numeric::PicturedOutput;
use crate::stack::Stack;
use crate::vocabulary::VocabularyTable;

pub const STACK_SIZE: usize = 1024;
pub const VM_MEMORY_SIZE: usize = 1 << 20; // 1 MiB
pub const PAD_SIZE: usize = 256;
pub const MAX_BLOCKS: u32 = 4096;
pub const BLOCK_BUFFERS: usize = 32;
pub const BLOCK_WINDOW_SIZE: usize = BLOCK_BUFFERS * crate::block::BLOCK_SIZE;

/// Fixed addresses of the system variables `BASE`/`SCR`/`SPAN`: real memory cells at the very bottom of the
/// address space, below where `HERE` starts, so the FORTH words that name
/// them can push an address and let the ordinary `@`/`!` words read and
/// write it (`16 BASE !` must work exactly like `16 SOME-VARIABLE !`).
pub const BASE_ADDR: usize = 0;
pub const SCR_ADDR: usize = CELL_SIZE;
pub const SPAN_ADDR: usize = CELL_SIZE * 2;
pub const SYSTEM_VARS_SIZE: usize = CELL_SIZE * 3;

/// `mode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Interpret,
    Compile,
}

/// Compile-time control-flow markers. Held on a small
/// ordered stack owned by the compiler; every definition must leave it
/// empty by `;`.
#[derive(Debug, Clone, Copy)]
pub enum CtrlMark {
    /// Forward reference: address of a `BRANCH`/`BRANCH0` operand cell
    /// still waiting for its target (`IF`, `ELSE`, `WHILE`).
    Orig(usize),
    /// Backward reference: address to branch back to (`BEGIN`, `DO`).
    Dest(usize),
    /// `?DO`'s loop-back destination plus the address of its forward
    /// skip-operand, patched once `LOOP`/`+LOOP` knows where to land.
    QDo(usize, usize),
}

pub struct Vm {
    pub data_stack: Stack,
    pub return_stack: Stack,
    pub memory: Memory,
    pub dict: Dictionary,
    pub vocab: VocabularyTable,
    pub blocks: BlockStore,
    pub mode: Mode,
    pub error: Option<VmError>,
    pub exit_colon: bool,
    pub abort_requested: bool,
    pub compiling_word: Option<usize>,
    pub current_executing_entry: Option<usize>,
    pub builtins: Vec<BuiltinFn>,
    pub msg: Msg,
    pub control_stack: Vec<CtrlMark>,
    pub pictured: PicturedOutput,
    /// Byte offset of `PAD`, stable across `HERE` growth.
    pub pad: usize,
    /// Set by `BYE`; the CLI shell checks this after every line.
    pub bye_requested: bool,
    /// Offset of the current `LOAD`ed block's text, if any (for `-->`).
    pub loading_block: Option<i64>,
    /// Byte offset of the memory window `BLOCK`/`BUFFER` map each buffer
    /// into, so `@`/`!` can address block contents directly.
    pub block_window: usize,
    /// Buffer-pool index of the block `BLOCK`/`BUFFER` most recently
    /// mapped, so a bare `UPDATE` (no address argument, per FORTH-79)
    /// knows which buffer to write the window's bytes back into.
    pub current_block: Option<usize>,
    /// The text `interpret` is currently scanning; exposed so parsing words (`."`, `S"`, `(`) can consume
    /// raw text past the next whitespace-delimited token.
    pub input: crate::interpreter::InputSource,
    /// Dictionary snapshot taken right after the builtin vocabulary has
    /// finished registering: restores the dictionary
    /// to its just-booted state without rebuilding every primitive.
    pub cold_snapshot: DictSnapshot,
}

impl Vm {
    pub fn new() -> Vm {
        let pad_start = VM_MEMORY_SIZE - PAD_SIZE - 4096;
        let block_window = pad_start - BLOCK_WINDOW_SIZE;
        let mut vm = Vm {
            data_stack: Stack::new(STACK_SIZE, VmError::StackUnderflow, VmError::DataStackOverflow),
            return_stack: Stack::new(STACK_SIZE, VmError::ReturnStackUnderflow, VmError::ReturnStackOverflow),
            memory: Memory::new(VM_MEMORY_SIZE, pad_start),
            dict: Dictionary::new(),
            vocab: VocabularyTable::new(),
            blocks: BlockStore::new(MAX_BLOCKS, BLOCK_BUFFERS),
            mode: Mode::Interpret,
            error: None,
            exit_colon: false,
            abort_requested: false,
            compiling_word: None,
            current_executing_entry: None,
            builtins: Vec::new(),
            msg: Msg::new(),
            control_stack: Vec::new(),
            pictured: PicturedOutput::new(132),
            pad: pad_start,
            bye_requested: false,
            loading_block: None,
            block_window,
            current_block: None,
            input: crate::interpreter::InputSource::new(),
            cold_snapshot: DictSnapshot { latest: None, here: 0 },
        };
        vm.memory.set_here(SYSTEM_VARS_SIZE);
        vm.memory
        .store_cell(BASE_ADDR, 10)
        .expect("system variable region is reserved below HERE");
        vm.memory.store_cell(SCR_ADDR, 0).expect("system variable region is reserved below HERE");
        vm.memory.store_cell(SPAN_ADDR, 0).expect("system variable region is reserved below HERE");
        builtins::register_all(&mut vm);
        vm.cold_snapshot = vm.save_dict_state();
        vm
    }

    /// Current numeric-conversion radix. `BASE` is a real
    /// memory cell, not a cached field, so `16 BASE !` takes effect
    /// immediately for both parsing and `.`/pictured output.
    pub fn base(&self) -> u32 {
        self.memory.fetch_cell(BASE_ADDR).unwrap_or(10).clamp(2, 36) as u32
    }

    pub fn set_base(&mut self, base: u32) {
        let _ = self.memory.store_cell(BASE_ADDR, base as Cell);
    }

    /// `SCR`: the block number last `LIST`ed.
    pub fn scr(&self) -> i64 {
        self.memory.fetch_cell(SCR_ADDR).unwrap_or(0)
    }

    pub fn set_scr(&mut self, scr: i64) {
        let _ = self.memory.store_cell(SCR_ADDR, scr);
    }

    /// `SPAN`: number of characters `EXPECT` actually read.
    pub fn span(&self) -> i64 {
        self.memory.fetch_cell(SPAN_ADDR).unwrap_or(0)
    }

    pub fn set_span(&mut self, span: i64) {
        let _ = self.memory.store_cell(SPAN_ADDR, span);
    }

    /// Map buffer-pool slot `idx` into `block_window`, copying its bytes
    /// into ordinary memory and returning the address.
    pub fn map_block(&mut self, idx: usize) -> VmResult<usize> {
        let addr = self.block_window + idx * crate::block::BLOCK_SIZE;
        let data = *self.blocks.data(idx);
        self.memory.write_bytes(addr, &data)?;
        self.current_block = Some(idx);
        Ok(addr)
    }

    /// `UPDATE` — copy the mapped window back into the buffer pool and
    /// mark it dirty. A no-op if no block is currently mapped.
    pub fn update_current_block(&mut self) -> VmResult<()> {
        if let Some(idx) = self.current_block {
            let addr = self.block_window + idx * crate::block::BLOCK_SIZE;
            let bytes = self.memory.read_bytes(addr, crate::block::BLOCK_SIZE)?.to_vec();
            self.blocks.data_mut(idx).copy_from_slice(&bytes);
            self.blocks.mark_dirty(idx);
        }
        Ok(())
    }

    /// `ABORT`: clears both stacks and returns to top level.
    pub fn abort(&mut self) {
        self.data_stack.clear();
        self.return_stack.clear();
        self.mode = Mode::Interpret;
        self.compiling_word = None;
        self.control_stack.clear();
        self.abort_requested = true;
    }

    /// `QUIT`: resets both stacks, re-enters interpret mode.
    pub fn quit(&mut self) {
        self.data_stack.clear();
        self.return_stack.clear();
        self.mode = Mode::Interpret;
        self.compiling_word = None;
        self.control_stack.clear();
    }

    pub fn set_error(&mut self, err: VmError) {
        self.error = Some(err);
    }

    pub fn here(&self) -> usize {
        self.memory.here()
    }

    /// Look up a dictionary handle, honoring the active search order:
    /// the `CONTEXT` vocabulary's chain first, falling
    /// back to the global chain (words defined before vocabularies existed).
    pub fn find(&self, name: &str) -> Option<usize> {
        self.dict.find(name)
    }

    /// Snapshot `(dsp, rsp, error, mode)` for `save_vm_state`.
    pub fn save_vm_state(&self) -> (isize, isize, Option<VmError>, Mode) {
        (self.data_stack.sp(), self.return_stack.sp(), self.error, self.mode)
    }

    /// `restore_vm_state`: aggressive unconditional reset,
    /// stronger than the saved snapshot on purpose (stress tests may
    /// have corrupted higher regions of either stack).
    pub fn restore_vm_state(&mut self, _saved: (isize, isize, Option<VmError>, Mode)) {
        self.data_stack.clear();
        self.return_stack.clear();
        self.error = None;
        self.mode = Mode::Interpret;
        self.exit_colon = false;
        self.abort_requested = false;
        self.compiling_word = None;
        self.current_executing_entry = None;
    }

    pub fn save_dict_state(&self) -> DictSnapshot {
        self.dict.snapshot(self.here())
    }

    pub fn restore_dict_state(&mut self, snapshot: DictSnapshot) {
        self.dict.restore(snapshot);
        self.memory.set_here(snapshot.here);
    }

    /// Execute one dictionary entry by handle. This is the single dispatch point every call site — the
    /// interpreter loop, colon threads, `EXECUTE`, `'` — funnels through.
    pub fn execute(&mut self, handle: usize) -> VmResult<()> {
        let prev_entry = self.current_executing_entry;
        self.current_executing_entry = Some(handle);
        self.dict.entry_mut(handle).entropy += 1;
        let code = self.dict.entry(handle).code;
        let pfa = self.dict.entry(handle).param_field;
        let result = match code {
            WordCode::Primitive(idx) => {
                let f = self.builtins[idx].func;
                f(self)
            }
            WordCode::DataWord => self.data_stack.push(pfa as Cell),
            WordCode::Constant => {
                let v = self.memory.fetch_cell(pfa)?;
                self.data_stack.push(v)
            }
            WordCode::Colon { start } => self.run_thread(start),
            WordCode::Does { body } => {
                self.data_stack.push(pfa as Cell)?;
                self.run_thread(body)
            }
        };
        self.current_executing_entry = prev_entry;
        result
    }

    /// Run a threaded colon body starting at `start` until `OP_EXIT`,
    /// an error, or `abort_requested`.
    fn run_thread(&mut self, start: usize) -> VmResult<()> {
        let mut pc = start;
        loop {
            if self.abort_requested {
                return Ok(());
            }
            let cell = self.memory.fetch_cell(pc)?;
            pc += CELL_SIZE;
            match cell {
                OP_EXIT => return Ok(()),
                OP_LITERAL => {
                    let v = self.memory.fetch_cell(pc)?;
                    pc += CELL_SIZE;
                    self.data_stack.push(v)?;
                }
                OP_STRLIT => {
                    let addr = self.memory.fetch_cell(pc)?;
                    pc += CELL_SIZE;
                    let len = self.memory.fetch_cell(pc)?;
                    pc += CELL_SIZE;
                    self.data_stack.push(addr)?;
                    self.data_stack.push(len)?;
                }
                OP_BRANCH => {
                    let target = self.memory.fetch_cell(pc)?;
                    pc = target as usize;
                }
                OP_BRANCH0 => {
                    let target = self.memory.fetch_cell(pc)?;
                    pc += CELL_SIZE;
                    let flag = self.data_stack.pop()?;
                    if flag == 0 {
                        pc = target as usize;
                    }
                }
                OP_DOES => {
                    // `DOES>` only ever fires at runtime, inside the defining
                    // word's own thread, right after it `CREATE`d the child
                    // word — so the target is whichever entry is currently
                    // `latest`, not whatever `compiling_word` happens to be
                    // (compilation of the defining word itself is long over
                    // by the time this cell executes).
                    if let Some(handle) = self.dict.latest() {
                        self.dict.entry_mut(handle).code = WordCode::Does { body: pc };
                    }
                    return Ok(());
                }
                OP_DO | OP_QDO => {
                    let skip_to = if cell == OP_QDO {
                        let t = self.memory.fetch_cell(pc)?;
                        pc += CELL_SIZE;
                        Some(t as usize)
                    } else {
                        None
                    };
                    let start_idx = self.data_stack.pop()?;
                    let limit = self.data_stack.pop()?;
                    if cell == OP_QDO && limit == start_idx {
                        pc = skip_to.expect("?DO always carries a skip address");
                        continue;
                    }
                    self.return_stack.push(limit)?;
                    self.return_stack.push(start_idx)?;
                }
                OP_LOOP => {
                    let target = self.memory.fetch_cell(pc)?;
                    pc += CELL_SIZE;
                    let index = self.return_stack.peek(0)?;
                    let limit = self.return_stack.peek(1)?;
                    let new_index = index.wrapping_add(1);
                    if loop_crossed(index, new_index, limit) {
                        self.return_stack.pop()?;
                        self.return_stack.pop()?;
                    } else {
                        self.return_stack.set(0, new_index)?;
                        pc = target as usize;
                    }
                }
                OP_PLUS_LOOP => {
                    let target = self.memory.fetch_cell(pc)?;
                    pc += CELL_SIZE;
                    let step = self.data_stack.pop()?;
                    let index = self.return_stack.peek(0)?;
                    let limit = self.return_stack.peek(1)?;
                    let new_index = index.wrapping_add(step);
                    if loop_crossed(index, new_index, limit) {
                        self.return_stack.pop()?;
                        self.return_stack.pop()?;
                    } else {
                        self.return_stack.set(0, new_index)?;
                        pc = target as usize;
                    }
                }
                handle_cell => {
                    let handle = handle_cell as usize;
                    self.execute(handle)?;
                    if self.error.is_some() || self.abort_requested {
                        return Ok(());
                    }
                }
            }
        }
    }

    /// `I` — index of the innermost active `DO` loop.
    pub fn loop_index(&self) -> VmResult<Cell> {
        self.return_stack.peek(0)
    }

    /// `J` — index of the next-outer active `DO` loop.
    pub fn loop_index_outer(&self) -> VmResult<Cell> {
        self.return_stack.peek(2)
    }
}

impl Default for Vm {
    fn default() -> Self {
        Self::new()
    }
}

/// Crossed-boundary termination test shared by `LOOP`/`+LOOP`: the loop
/// ends when incrementing the index crosses the boundary between
/// `limit - 1` and `limit`, which works uniformly for both positive
/// and negative steps.
fn loop_crossed(old_index: Cell, new_index: Cell, limit: Cell) -> bool {
    (old_index.wrapping_sub(limit)) ^ (new_index.wrapping_sub(limit)) < 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loop_crossed_positive_step_ends_at_limit() {
        assert!(loop_crossed(4, 5, 5));
        assert!(!loop_crossed(3, 4, 5));
    }

    #[test]
    fn loop_crossed_negative_step_ends_at_limit() {
        assert!(loop_crossed(1, 0, 0));
        assert!(!loop_crossed(2, 1, 0));
    }
}
