//! The VM's native word and the inner-interpreter
//! opcodes used to thread colon definitions.
//!
//! Colon-definition bodies are compiled as a sequence of `Cell`s written
//! into `Memory` by `,` exactly like any other dictionary data — no side
//! channel. A thread cell is either a non-negative dictionary handle
//! (encoded as `handle as Cell`, "call this word") or one of the
//! negative `Op` sentinels below (`LITERAL`, `BRANCH`, `BRANCH0`,
//! `EXIT`, and the loop-control ops), laid over this crate's
//! arena-backed dictionary rather than a single flat data heap.

/// The VM's native signed machine word.
pub type Cell = i64;

/// Size in bytes of a `Cell`, reported to FORTH code as `CELL_SIZE`.
pub const CELL_SIZE: usize = std::mem::size_of::<Cell>();

/// Inner-interpreter opcodes compiled into a colon-thread.
///
/// These are negative so they can never collide with a non-negative
/// dictionary handle (handles start at 0).
pub const OP_LITERAL: Cell = -1; // followed by one cell: the value to push
pub const OP_STRLIT: Cell = -2; // followed by two cells: (addr, len) of a string already in memory
pub const OP_BRANCH: Cell = -3; // followed by one cell: absolute byte address to jump to
pub const OP_BRANCH0: Cell = -4; // as BRANCH, but conditional on a false flag popped from the data stack
pub const OP_EXIT: Cell = -5; // return from the current colon thread
pub const OP_DOES: Cell = -6; // patches `latest`'s code to Does{body: pc + CELL_SIZE}, then exits
pub const OP_DO: Cell = -7; // pushes (index, limit) to the return stack from the data stack
pub const OP_QDO: Cell = -8; // as OP_DO, but followed by one cell: forward address to skip to if limit = start
pub const OP_LOOP: Cell = -9; // followed by one cell: backward branch address; increments index by 1
pub const OP_PLUS_LOOP: Cell = -10; // followed by one cell: backward branch address; increments index by top-of-stack
