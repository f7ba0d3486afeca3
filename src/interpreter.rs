//! The outer interpreter: tokenizer, number parsing, and the
//! interpret/compile dispatch loop.
//!
//! No source in the retrieval pack implements this loop directly, so
//! it is written from FORTH-79's interpret/compile dispatch rules and
//! its comment/string/number grammar.

use crate::compiler;
use crate::error::VmError;
use crate::numeric;
use crate::vm::{Mode, Vm};

/// The text currently being scanned by `interpret`, plus a cursor
/// (the FORTH-79 `>IN` offset). Parsing words (`."`, `S"`, block comments)
/// read past the next whitespace token directly from this cursor.
#[derive(Default)]
pub struct InputSource {
    text: Vec<u8>,
    pos: usize,
}

impl InputSource {
    pub fn new() -> InputSource {
        InputSource {
            text: Vec::new(),
            pos: 0,
        }
    }

    fn set(&mut self, source: &str) {
        self.text = source.as_bytes().to_vec();
        self.pos = 0;
    }

    fn peek(&self) -> Option<u8> {
        self.text.get(self.pos).copied()
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Skip one leading space (if present), then collect bytes up to and
    /// including `delim`, returning the text before it. Used by `."`,
    /// `S"`, and friends.
    pub fn parse_delimited(&mut self, delim: u8) -> String {
        if self.peek() == Some(b' ') {
            self.advance();
        }
        let start = self.pos;
        while let Some(b) = self.peek() {
            if b == delim {
                let text = String::from_utf8_lossy(&self.text[start..self.pos]).into_owned();
                self.advance();
                return text;
            }
            self.advance();
        }
        String::from_utf8_lossy(&self.text[start..self.pos]).into_owned()
    }

    /// Skip whitespace and comments (`( … )`, `\` to end of line, the
    /// StarForth `(-` extension to end of line).
    fn skip_noise(&mut self) {
        loop {
            match self.peek() {
                Some(b) if b.is_ascii_whitespace() => {
                    self.advance();
                }
                Some(b'\\') => {
                    while let Some(b) = self.peek() {
                        self.advance();
                        if b == b'\n' {
                            break;
                        }
                    }
                }
                Some(b'(') => {
                    let next = self.text.get(self.pos + 1).copied();
                    if next == Some(b'-') {
                        while let Some(b) = self.peek() {
                            self.advance();
                            if b == b'\n' {
                                break;
                            }
                        }
                    } else {
                        while let Some(b) = self.peek() {
                            self.advance();
                            if b == b')' {
                                break;
                            }
                        }
                    }
                }
                _ => break,
            }
        }
    }

    /// Read the next whitespace-delimited token. Exposed to
    /// defining/vocabulary/dictionary-lookup words (`:`, `CREATE`,
    /// `VOCABULARY`, `'`, `FORGET`,...) that must consume a name token
    /// from the same input cursor the outer loop is scanning.
    pub fn next_token(&mut self) -> Option<String> {
        self.skip_noise();
        if self.at_end() {
            return None;
        }
        let start = self.pos;
        while let Some(b) = self.peek() {
            if b.is_ascii_whitespace() {
                break;
            }
            self.advance();
        }
        Some(String::from_utf8_lossy(&self.text[start..self.pos]).into_owned())
    }
}

/// A parsed number literal.
enum Number {
    Single(i64),
    Double(i64, i64),
}

fn parse_token(token: &str, base: u32) -> Option<Number> {
    if let Some(stripped) = token.strip_suffix('.') {
        if stripped.is_empty() || stripped == "-" {
            return None;
        }
        let low = numeric::parse_number(stripped, base)?;
        let high = if low < 0 { -1 } else { 0 };
        return Some(Number::Double(low, high));
    }
    numeric::parse_number(token, base).map(Number::Single)
}

/// `interpret(vm, source)` — the outer interpreter's entry point.
/// Reads whitespace-delimited tokens from `source`, executing or
/// compiling each in turn.
pub fn interpret(vm: &mut Vm, source: &str) {
    vm.input.set(source);
    loop {
        if vm.abort_requested || vm.bye_requested {
            break;
        }
        let token = match vm.input.next_token() {
            Some(t) => t,
            None => break,
        };

        if let Some(handle) = vm.find(&token) {
            let immediate = vm.dict.is_immediate(handle);
            if matches!(vm.mode, Mode::Interpret) || immediate {
                if let Err(e) = vm.execute(handle) {
                    vm.set_error(e);
                }
            } else if compiler::compile_call(vm, handle).is_err() {
                vm.set_error(VmError::CompilerError);
            }
        } else {
            match parse_token(&token, vm.base()) {
                Some(Number::Single(n)) => match vm.mode {
                    Mode::Interpret => {
                        let _ = vm.data_stack.push(n);
                    }
                    Mode::Compile => {
                        if compiler::compile_literal(vm, n).is_err() {
                            vm.set_error(VmError::CompilerError);
                        }
                    }
                },
                Some(Number::Double(lo, hi)) => match vm.mode {
                    Mode::Interpret => {
                        let _ = vm.data_stack.push(lo);
                        let _ = vm.data_stack.push(hi);
                    }
                    Mode::Compile => {
                        if compiler::compile_literal(vm, lo).is_err() || compiler::compile_literal(vm, hi).is_err() {
                            vm.set_error(VmError::CompilerError);
                        }
                    }
                },
                None => vm.set_error(VmError::WordNotFound),
            }
        }

        if vm.error.is_some() {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vm::Vm;

    #[test]
    fn simple_arithmetic_leaves_result_on_stack() {
        let mut vm = Vm::new();
        interpret(&mut vm, "5 7 +");
        assert_eq!(vm.error, None);
        assert_eq!(vm.data_stack.pop().unwrap(), 12);
    }

    #[test]
    fn unknown_word_sets_word_not_found() {
        let mut vm = Vm::new();
        interpret(&mut vm, "NOSUCHWORD");
        assert_eq!(vm.error, Some(VmError::WordNotFound));
    }

    #[test]
    fn paren_comment_is_skipped() {
        let mut vm = Vm::new();
        interpret(&mut vm, "5 ( this is a comment ) 7 +");
        assert_eq!(vm.data_stack.pop().unwrap(), 12);
    }

    #[test]
    fn colon_definition_compiles_and_executes() {
        let mut vm = Vm::new();
        interpret(&mut vm, ": SQUARE DUP * ; 5 SQUARE");
        assert_eq!(vm.error, None, "{:?}", vm.error);
        assert_eq!(vm.data_stack.pop().unwrap(), 25);
    }

    #[test]
    fn if_then_control_flow() {
        let mut vm = Vm::new();
        interpret(&mut vm, ": ABSOLUTE DUP 0 < IF NEGATE THEN ; -5 ABSOLUTE");
        assert_eq!(vm.error, None, "{:?}", vm.error);
        assert_eq!(vm.data_stack.pop().unwrap(), 5);
    }

    #[test]
    fn do_loop_iterates_expected_range() {
        let mut vm = Vm::new();
        interpret(&mut vm, ": SUM3 0 3 0 DO I + LOOP ; SUM3");
        assert_eq!(vm.error, None, "{:?}", vm.error);
        assert_eq!(vm.data_stack.pop().unwrap(), 0 + 1 + 2);
    }
}
