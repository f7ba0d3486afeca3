//! Raw-mode terminal control for the interactive REPL.
//!
//! Three thin wrappers over `crossterm::terminal`. `main`'s interactive loop
//! enables raw mode before reading a line so `KEY` can see individual
//! keystrokes, and always disables it again on the way out, including
//! on `BYE`/panic unwind.

use crossterm::terminal::{disable_raw_mode, enable_raw_mode, is_raw_mode_enabled};
use std::io;

pub fn enable_raw() -> io::Result<()> {
    enable_raw_mode()
}

pub fn disable_raw() -> io::Result<()> {
    disable_raw_mode()
}

pub fn get_raw_mode() -> io::Result<bool> {
    is_raw_mode_enabled()
}

/// RAII guard: enables raw mode on construction, disables it on drop
/// (including during an unwind), so the interactive REPL never leaves
/// the user's terminal stuck in raw mode after `BYE` or a panic.
pub struct RawModeGuard {
    active: bool,
}

impl RawModeGuard {
    pub fn enable() -> io::Result<RawModeGuard> {
        enable_raw()?;
        Ok(RawModeGuard { active: true })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if self.active {
            let _ = disable_raw();
        }
    }
}
