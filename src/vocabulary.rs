//! Vocabularies: named search-order roots layered over the single
//! dictionary arena.
//!
//! FORTH-79 vocabularies are themselves dictionary entries whose
//! parameter field holds the handle of the last word defined in that
//! vocabulary. `CONTEXT` names the vocabulary `FIND` searches; `CURRENT`
//! names the vocabulary new definitions are linked into. Because this
//! crate's [`Dictionary`](crate::dictionary::Dictionary) already chains
//! every entry through a single `prev`-linked list regardless of which
//! vocabulary it belongs to, a `Vocabulary` here is simply a named
//! pointer into that one chain — `FIND` walks from a vocabulary's head
//! rather than from the dictionary's global `latest`.

use crate::error::{VmError, VmResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VocabId(pub usize);

#[derive(Debug, Clone)]
struct VocEntry {
    name: String,
    /// Dictionary handle of the newest word defined while this vocabulary
    /// was `CURRENT`; `None` until the first such definition.
    head: Option<usize>,
}

/// `CONTEXT`/`CURRENT`/`ORDER` bookkeeping.
pub struct VocabularyTable {
    vocabs: Vec<VocEntry>,
    /// Search order, outermost (searched first) at the end, matching
    /// FORTH-79's convention that the most recently `CONTEXT`-ed
    /// vocabulary takes priority.
    context: Vec<VocabId>,
    current: VocabId,
    forth: VocabId,
}

impl VocabularyTable {
    /// Creates the table with the single required `FORTH` vocabulary
    /// both current and in context, per FORTH-79 cold-start state.
    pub fn new() -> VocabularyTable {
        let forth = VocEntry {
            name: "FORTH".to_string(),
            head: None,
        };
        VocabularyTable {
            vocabs: vec![forth],
            context: vec![VocabId(0)],
            current: VocabId(0),
            forth: VocabId(0),
        }
    }

    pub fn forth(&self) -> VocabId {
        self.forth
    }

    pub fn current(&self) -> VocabId {
        self.current
    }

    pub fn context(&self) -> VocabId {
        *self.context.last().expect("search order is never empty")
    }

    /// `VOCABULARY <name>` — define a new, initially empty vocabulary.
    pub fn define(&mut self, name: &str) -> VocabId {
        let id = VocabId(self.vocabs.len());
        self.vocabs.push(VocEntry {
                name: name.to_string(),
                head: None,
        });
        id
    }

    pub fn find_vocab(&self, name: &str) -> Option<VocabId> {
        self.vocabs
        .iter()
        .position(|v| v.name.eq_ignore_ascii_case(name))
        .map(VocabId)
    }

    /// `DEFINITIONS` — make `CONTEXT` the vocabulary new words link into.
    pub fn definitions(&mut self) {
        self.current = self.context();
    }

    /// Word that actually changes `CONTEXT` (e.g. `FORTH`, or a
    /// user-defined vocabulary's own name when executed).
    pub fn set_context(&mut self, id: VocabId) {
        if let Some(top) = self.context.last_mut() {
            *top = id;
        } else {
            self.context.push(id);
        }
    }

    /// Head handle to start a `FIND` walk from, honoring the current
    /// vocabulary's chain.
    pub fn head(&self, id: VocabId) -> Option<usize> {
        self.vocabs[id.0].head
    }

    /// Called by the dictionary whenever a new word is linked in while
    /// `current` is this vocabulary, so its head tracks the chain.
    pub fn record_head(&mut self, handle: usize) {
        self.vocabs[self.current.0].head = Some(handle);
    }

    /// `ORDER` — vocabulary names, context first, plus the current
    /// vocabulary's name.
    pub fn order(&self) -> (Vec<String>, String) {
        let context_names = self.context.iter().rev().map(|id| self.vocabs[id.0].name.clone()).collect();
        (context_names, self.vocabs[self.current.0].name.clone())
    }

    pub fn name_of(&self, id: VocabId) -> &str {
        &self.vocabs[id.0].name
    }

    pub fn find_by_handle_prefix(&self, name: &str) -> VmResult<VocabId> {
        self.find_vocab(name).ok_or(VmError::WordNotFound)
    }
}

impl Default for VocabularyTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cold_start_has_forth_current_and_in_context() {
        let v = VocabularyTable::new();
        assert_eq!(v.current(), v.forth());
        assert_eq!(v.context(), v.forth());
    }

    #[test]
    fn define_and_find_vocab() {
        let mut v = VocabularyTable::new();
        let editor = v.define("EDITOR");
        assert_eq!(v.find_vocab("editor"), Some(editor));
        assert_eq!(v.find_vocab("nonexistent"), None);
    }

    #[test]
    fn definitions_redirects_current_to_context() {
        let mut v = VocabularyTable::new();
        let editor = v.define("EDITOR");
        v.set_context(editor);
        v.definitions();
        assert_eq!(v.current(), editor);
    }

    #[test]
    fn record_head_tracks_current_vocabs_chain() {
        let mut v = VocabularyTable::new();
        v.record_head(7);
        assert_eq!(v.head(v.forth()), Some(7));
    }
}
