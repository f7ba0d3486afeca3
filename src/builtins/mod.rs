//! The word library: every builtin
//! is a `fn(&mut Vm) -> VmResult<()>` registered into the dictionary as
//! a [`WordCode::Primitive`](crate::dictionary::WordCode::Primitive)
//! during [`register_all`].
//!
//! Each entry pairs a name, function pointer, and a short doc string
//! used by tools like `SEE`. Registration order matches the fixed POST
//! module order, since earlier modules are meant to form a power-on
//! self-test that later modules assume works.

mod arithmetic;
mod block_words;
mod control;
mod defining;
mod dictionary_manip;
mod dictionary_words;
mod double;
mod format;
mod io;
mod logical;
mod memory_words;
mod mixed_arithmetic;
mod return_stack_words;
mod stack_words;
mod starforth_ext;
mod string_words;
mod system_words;
mod vocabulary_words;

use crate::dictionary::WordCode;
use crate::vm::Vm;

pub struct BuiltinFn {
    pub name: &'static str,
    pub func: fn(&mut Vm) -> crate::error::VmResult<()>,
    pub doc: &'static str,
}

/// Register one primitive word as a system dictionary entry.
fn reg(vm: &mut Vm, name: &'static str, doc: &'static str, func: fn(&mut Vm) -> crate::error::VmResult<()>) {
    let idx = vm.builtins.len();
    vm.builtins.push(BuiltinFn { name, func, doc });
    let here = vm.here();
    let handle = vm.dict.create_system(name, WordCode::Primitive(idx), here, here);
    vm.vocab.record_head(handle);
}

/// As [`reg`], but also sets the `IMMEDIATE` flag (control-flow and
/// string-parsing words that must run during compilation).
fn reg_immediate(vm: &mut Vm, name: &'static str, doc: &'static str, func: fn(&mut Vm) -> crate::error::VmResult<()>) {
    reg(vm, name, doc, func);
    vm.dict.immediate();
}

/// Register every builtin module, in the fixed POST order:
/// stack, return-stack, memory, arithmetic, logical,
/// mixed-arithmetic, double, format, string, I/O, block, dictionary,
/// dict-manipulation, vocabulary, system, defining, control, StarForth
/// extensions.
pub fn register_all(vm: &mut Vm) {
    stack_words::register(vm);
    return_stack_words::register(vm);
    memory_words::register(vm);
    arithmetic::register(vm);
    logical::register(vm);
    mixed_arithmetic::register(vm);
    double::register(vm);
    format::register(vm);
    string_words::register(vm);
    io::register(vm);
    block_words::register(vm);
    dictionary_words::register(vm);
    dictionary_manip::register(vm);
    vocabulary_words::register(vm);
    system_words::register(vm);
    defining::register(vm);
    control::register(vm);
    starforth_ext::register(vm);
}

pub(crate) use reg as register_word;
pub(crate) use reg_immediate as register_immediate_word;
