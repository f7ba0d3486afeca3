//! Numeric parsing, base conversion, and pictured output.
//!
//! Covers `BASE`/`DECIMAL`/`HEX`/`OCTAL` and the
//! `<# # #S SIGN HOLD #>` pictured-output machinery, in the idiom the
//! rest of this crate uses: `Result`-returning primitives that record a
//! `VmError`.

use crate::cell::Cell;
use crate::error::{VmError, VmResult};

/// Parse a token as a signed cell in the given radix.
/// A trailing `.` marks a double-precision literal in FORTH-79 source;
/// the caller strips it before deciding single vs. double, so this
/// function only ever sees the digits (plus optional leading `-`).
pub fn parse_number(token: &str, base: u32) -> Option<Cell> {
    if token.is_empty() {
        return None;
    }
    let (neg, digits) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token),
    };
    if digits.is_empty() {
        return None;
    }
    let mut value: i64 = 0;
    for ch in digits.chars() {
        let digit = ch.to_digit(base)?;
        value = value.checked_mul(base as i64)?.checked_add(digit as i64)?;
    }
    Some(if neg { -value } else { value })
}

/// `.` / `U.`-style free-format rendering of a cell in the current base.
pub fn format_cell(value: Cell, base: u32) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let neg = value < 0;
    // i64::MIN has no positive counterpart; widen to u64 via wrapping negate.
    let mut mag = if neg { (value as i64).unsigned_abs() } else { value as u64 };
    let mut digits = Vec::new();
    while mag > 0 {
        let d = (mag % base as u64) as u32;
        digits.push(std::char::from_digit(d, base).unwrap());
        mag /= base as u64;
    }
    if neg {
        digits.push('-');
    }
    digits.iter().rev().collect()
}

/// The `<# # #S SIGN HOLD #>` scratch buffer. Digits are held right-to-left so `#` can be
/// applied repeatedly without knowing the final width in advance.
pub struct PicturedOutput {
    buf: Vec<u8>,
    capacity: usize,
}

impl PicturedOutput {
    pub fn new(capacity: usize) -> PicturedOutput {
        PicturedOutput {
            buf: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// `<#` — begin pictured-output conversion.
    pub fn begin(&mut self) {
        self.buf.clear();
    }

    /// `HOLD` — insert one character at the current (left) end.
    pub fn hold(&mut self, ch: u8) -> VmResult<()> {
        if self.buf.len() >= self.capacity {
            return Err(VmError::NumericOverflow);
        }
        self.buf.push(ch);
        Ok(())
    }

    /// `SIGN` — if `n` is negative, hold a `-`.
    pub fn sign(&mut self, n: Cell) -> VmResult<()> {
        if n < 0 {
            self.hold(b'-')
        } else {
            Ok(())
        }
    }

    /// `#` — divide the unsigned double by base, holding the remainder digit.
    /// Operates on an unsigned double-cell magnitude threaded through the
    /// whole `<#... #>` sequence.
    pub fn hash(&mut self, ud: u128, base: u32) -> VmResult<u128> {
        let digit = (ud % base as u128) as u32;
        self.hold(std::char::from_digit(digit, base).unwrap() as u8)?;
        Ok(ud / base as u128)
    }

    /// `#S` — repeat `#` until the magnitude is exhausted.
    pub fn hash_s(&mut self, mut ud: u128, base: u32) -> VmResult<()> {
        loop {
            ud = self.hash(ud, base)?;
            if ud == 0 {
                break;
            }
        }
        Ok(())
    }

    /// `#>` — finish conversion, returning the text left-to-right.
    pub fn finish(&mut self) -> Vec<u8> {
        let mut out = self.buf.clone();
        out.reverse();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_and_hex() {
        assert_eq!(parse_number("42", 10), Some(42));
        assert_eq!(parse_number("-42", 10), Some(-42));
        assert_eq!(parse_number("2A", 16), Some(42));
        assert_eq!(parse_number("", 10), None);
        assert_eq!(parse_number("12x", 10), None);
    }

    #[test]
    fn formats_round_trip_decimal() {
        assert_eq!(format_cell(42, 10), "42");
        assert_eq!(format_cell(-42, 10), "-42");
        assert_eq!(format_cell(0, 10), "0");
    }

    #[test]
    fn pictured_output_builds_right_to_left() {
        let mut p = PicturedOutput::new(32);
        p.begin();
        p.hash_s(1234u128, 10).unwrap();
        p.sign(-1234).unwrap();
        let text = p.finish();
        assert_eq!(String::from_utf8(text).unwrap(), "-1234");
    }
}
