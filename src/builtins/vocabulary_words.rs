//! Vocabulary search-order words, module "Vocabulary Words".
//!
//! Thin wrappers over the already-complete
//! [`VocabularyTable`](crate::vocabulary::VocabularyTable).

use super::register_word as reg;
use crate::dictionary::WordCode;
use crate::error::{VmError, VmResult};
use crate::vm::Vm;
use crate::vocabulary::VocabId;

pub fn register(vm: &mut Vm) {
    reg(vm, "VOCABULARY", "( \"name\" -- )", vocabulary);
    reg(vm, "DEFINITIONS", "( -- )", definitions);
    reg(vm, "FORTH", "( -- )", forth);
    reg(vm, "CONTEXT", "( -- )", context);
    reg(vm, "CURRENT", "( -- )", current);
    reg(vm, "ORDER", "( -- )", order);
}

/// `VOCABULARY <name>` — define a new vocabulary whose own name, when
/// executed, sets `CONTEXT` to it.
fn vocabulary(vm: &mut Vm) -> VmResult<()> {
    let name = vm.input.next_token().ok_or(VmError::ParseError)?;
    let id = vm.vocab.define(&name);
    let setter = vocab_setter_index(vm);
    let here = vm.here();
    let handle = vm.dict.create(&name, WordCode::Primitive(setter), id.0, here);
    vm.vocab.record_head(handle);
    Ok(())
}

/// Index of the shared `set_context` primitive used as every
/// vocabulary-name word's runtime code; registered once so
/// `VOCABULARY` can reuse it by index rather than growing `builtins`
/// per vocabulary defined.
fn vocab_setter_index(vm: &mut Vm) -> usize {
    if let Some(idx) = vm.builtins.iter().position(|b| b.name == "(VOCABULARY-SETTER)") {
        return idx;
    }
    let idx = vm.builtins.len();
    vm.builtins.push(crate::builtins::BuiltinFn {
            name: "(VOCABULARY-SETTER)",
            func: set_context_from_current_entry,
            doc: "( -- ) set CONTEXT to the executing vocabulary",
    });
    idx
}

/// Runtime behavior of a vocabulary-name word: set `CONTEXT` to the
/// vocabulary whose param field (the handle's `param_field`, reused to
/// hold a `VocabId`) matches the word just executed.
fn set_context_from_current_entry(vm: &mut Vm) -> VmResult<()> {
    let handle = vm.current_executing_entry.ok_or(VmError::CompilerError)?;
    let id = VocabId(vm.dict.entry(handle).param_field);
    vm.vocab.set_context(id);
    Ok(())
}

fn definitions(vm: &mut Vm) -> VmResult<()> {
    vm.vocab.definitions();
    Ok(())
}

fn forth(vm: &mut Vm) -> VmResult<()> {
    let id = vm.vocab.forth();
    vm.vocab.set_context(id);
    Ok(())
}

fn context(vm: &mut Vm) -> VmResult<()> {
    vm.msg.info::<()>("CONTEXT", vm.vocab.name_of(vm.vocab.context()), None);
    Ok(())
}

fn current(vm: &mut Vm) -> VmResult<()> {
    vm.msg.info::<()>("CURRENT", vm.vocab.name_of(vm.vocab.current()), None);
    Ok(())
}

/// `ORDER` — print the active search order and the current vocabulary.
fn order(vm: &mut Vm) -> VmResult<()> {
    let (context_names, current_name) = vm.vocab.order();
    println!("Context: {}", context_names.join(" "));
    println!("Current: {current_name}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::interpreter::interpret;
    use crate::vm::Vm;

    #[test]
    fn vocabulary_defines_a_word_that_sets_context() {
        let mut vm = Vm::new();
        interpret(&mut vm, "VOCABULARY EDITOR EDITOR");
        assert_eq!(vm.error, None, "{:?}", vm.error);
        let editor = vm.vocab.find_vocab("EDITOR").unwrap();
        assert_eq!(vm.vocab.context(), editor);
    }

    #[test]
    fn definitions_redirects_current_to_context() {
        let mut vm = Vm::new();
        interpret(&mut vm, "VOCABULARY EDITOR EDITOR DEFINITIONS");
        assert_eq!(vm.error, None, "{:?}", vm.error);
        let editor = vm.vocab.find_vocab("EDITOR").unwrap();
        assert_eq!(vm.vocab.current(), editor);
    }

    #[test]
    fn forth_restores_the_root_vocabulary() {
        let mut vm = Vm::new();
        interpret(&mut vm, "VOCABULARY EDITOR EDITOR FORTH");
        assert_eq!(vm.error, None, "{:?}", vm.error);
        assert_eq!(vm.vocab.context(), vm.vocab.forth());
    }
}
