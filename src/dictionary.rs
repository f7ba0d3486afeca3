//! The dictionary: an arena of entries linked by `prev`.
//!
//! A bump-allocated arena indexed by a non-null integer handle; `prev`
//! is either a sentinel "none" handle or an index into the arena.
//! Snapshot/restore becomes `{latest_handle, here_byte_offset}`, a
//! plain Rust `Vec` instead of back-pointers threaded through a data
//! heap.

use crate::cell::Cell;
use crate::error::VmError;

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Flags: u8 {
        const IMMEDIATE = 0b001;
        const HIDDEN = 0b010;
        const SMUDGE = 0b100;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordCode {
    /// A word implemented in Rust; the index selects the builtin function table.
    Primitive(usize),
    /// `CREATE`/`VARIABLE`: executing the word pushes its parameter-field address.
    DataWord,
    /// `CONSTANT`: executing the word pushes the cell stored at its parameter field.
    Constant,
    /// A colon definition; `start` is the byte offset of its threaded code.
    Colon { start: usize },
    /// A `CREATE... DOES>` word; executing it pushes its own parameter-field
    /// address, then resumes the defining word's thread at `body`.
    Does { body: usize },
}

#[derive(Debug, Clone)]
pub struct DictEntry {
    pub name: String,
    pub flags: Flags,
    pub code: WordCode,
    pub param_field: usize,
    pub prev: Option<usize>,
    /// HERE at the moment this entry was created — what `FORGET` rewinds to.
    pub here_before: usize,
    /// System-origin entries (registered at cold start) cannot be `FORGET`-ten.
    pub system: bool,
    /// Execution counter exposed by the StarForth `ENTROPY@`/`ENTROPY!`
    /// extension words.
    pub entropy: Cell,
}

/// `(latest, here)` — the whole of the dictionary/allocation state that
/// `save_dict_state`/`restore_dict_state` round-trip.
#[derive(Debug, Clone, Copy)]
pub struct DictSnapshot {
    pub latest: Option<usize>,
    pub here: usize,
}

pub struct Dictionary {
    entries: Vec<DictEntry>,
    latest: Option<usize>,
}

impl Dictionary {
    pub fn new() -> Dictionary {
        Dictionary {
            entries: Vec::new(),
            latest: None,
        }
    }

    pub fn latest(&self) -> Option<usize> {
        self.latest
    }

    pub fn entry(&self, handle: usize) -> &DictEntry {
        &self.entries[handle]
    }

    pub fn entry_mut(&mut self, handle: usize) -> &mut DictEntry {
        &mut self.entries[handle]
    }

    /// `CREATE <name>` — allocate a new entry, link it in, and make it `latest`.
    pub fn create(&mut self, name: &str, code: WordCode, param_field: usize, here_before: usize) -> usize {
        let handle = self.entries.len();
        self.entries.push(DictEntry {
                name: name.to_string(),
                flags: Flags::empty(),
                code,
                param_field,
                prev: self.latest,
                here_before,
                system: false,
                entropy: 0,
        });
        self.latest = Some(handle);
        handle
    }

    /// Like [`create`](Self::create), but marks the entry as system-origin
    /// so `FORGET` refuses to remove it.
    pub fn create_system(&mut self, name: &str, code: WordCode, param_field: usize, here_before: usize) -> usize {
        let handle = self.create(name, code, param_field, here_before);
        self.entries[handle].system = true;
        handle
    }

    /// `FIND` — search from `latest` backward, skipping HIDDEN/SMUDGE
    /// entries; newest definition wins.
    pub fn find(&self, name: &str) -> Option<usize> {
        let mut cursor = self.latest;
        while let Some(handle) = cursor {
            let entry = &self.entries[handle];
            if !entry.flags.intersects(Flags::HIDDEN | Flags::SMUDGE) && entry.name.eq_ignore_ascii_case(name) {
                return Some(handle);
            }
            cursor = entry.prev;
        }
        None
    }

    pub fn snapshot(&self, here: usize) -> DictSnapshot {
        DictSnapshot {
            latest: self.latest,
            here,
        }
    }

    /// Discard every entry added after `snapshot` was taken. Memory
    /// occupied by those entries is not reclaimed — only
    /// `latest`/HERE rewind; the caller is responsible for restoring HERE
    /// into `Memory` from `snapshot.here`.
    pub fn restore(&mut self, snapshot: DictSnapshot) {
        let keep = match snapshot.latest {
            Some(handle) => handle + 1,
            None => 0,
        };
        self.entries.truncate(keep);
        self.latest = snapshot.latest;
    }

    /// `FORGET <name>` — remove `name` and everything newer, rewinding
    /// HERE to the value recorded when `name` was created. Refuses
    /// system-origin entries.
    pub fn forget(&mut self, name: &str) -> Result<usize, VmError> {
        let handle = self.find(name).ok_or(VmError::WordNotFound)?;
        if self.entries[handle].system {
            return Err(VmError::CompilerError);
        }
        let here_before = self.entries[handle].here_before;
        let new_latest = self.entries[handle].prev;
        self.entries.truncate(handle);
        self.latest = new_latest;
        Ok(here_before)
    }

    pub fn immediate(&mut self) {
        if let Some(handle) = self.latest {
            self.entries[handle].flags.insert(Flags::IMMEDIATE);
        }
    }

    pub fn is_immediate(&self, handle: usize) -> bool {
        self.entries[handle].flags.contains(Flags::IMMEDIATE)
    }

    pub fn smudge(&mut self, handle: usize) {
        self.entries[handle].flags.insert(Flags::SMUDGE);
    }

    pub fn unsmudge(&mut self, handle: usize) {
        self.entries[handle].flags.remove(Flags::SMUDGE);
    }

    pub fn hide(&mut self, handle: usize) {
        self.entries[handle].flags.insert(Flags::HIDDEN);
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

/// `>BODY` — the parameter-field address of a handle, as a raw `Cell`.
pub fn to_body(dict: &Dictionary, handle: usize) -> Cell {
    dict.entry(handle).param_field as Cell
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_shadows_with_newest_definition() {
        let mut d = Dictionary::new();
        d.create("DUP", WordCode::Primitive(0), 0, 0);
        d.create("DUP", WordCode::Primitive(1), 0, 0);
        let handle = d.find("DUP").unwrap();
        assert_eq!(d.entry(handle).code, WordCode::Primitive(1));
    }

    #[test]
    fn hidden_entries_are_invisible() {
        let mut d = Dictionary::new();
        let h = d.create("SECRET", WordCode::Primitive(0), 0, 0);
        d.hide(h);
        assert!(d.find("SECRET").is_none());
    }

    #[test]
    fn snapshot_restore_round_trips() {
        let mut d = Dictionary::new();
        d.create("A", WordCode::Primitive(0), 0, 0);
        let snap = d.snapshot(100);
        d.create("B", WordCode::Primitive(1), 8, 100);
        assert!(d.find("B").is_some());
        d.restore(snap);
        assert!(d.find("B").is_none());
        assert!(d.find("A").is_some());
    }

    #[test]
    fn forget_rejects_system_words() {
        let mut d = Dictionary::new();
        d.create_system("DUP", WordCode::Primitive(0), 0, 0);
        assert_eq!(d.forget("DUP"), Err(VmError::CompilerError));
    }

    #[test]
    fn forget_rewinds_here() {
        let mut d = Dictionary::new();
        d.create("A", WordCode::Primitive(0), 0, 0);
        d.create("B", WordCode::Primitive(1), 8, 42);
        let here = d.forget("B").unwrap();
        assert_eq!(here, 42);
        assert!(d.find("B").is_none());
        assert!(d.find("A").is_some());
    }
}
