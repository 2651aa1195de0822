//! Numeric literal recognizer
//!
//!     Integers: decimal without leading zeros (bare `0` allowed), `0o` octal, `0x` hex and
//!     `0b` binary, each prefix in either case. Floats: `1.5`, `.5`, `1.` and an exponent on
//!     any of those or on a plain digit run. An imaginary `j` suffix and a long `l` suffix are
//!     accepted.
//!
//!     Forms are tried in this order: imaginary, float, long integer, integer. Integer forms
//!     must end on a word boundary, so `0123` or `12ab` are not numbers.
//!
//!     The trailing-dot float (`1.`) is refused when another `.` follows, which keeps range
//!     expressions such as `0..10` as number, operator, number.
//!
//!     A single `_` may separate two digits anywhere in a digit run (`1_000`, `0xFF_FF`,
//!     `3.141_592`). Leading, trailing or doubled underscores end the literal.

use once_cell::sync::Lazy;
use regex::Regex;

const DIGITS: &str = r"(?:[0-9](?:_?[0-9])*)";
const INTEGER: &str = r"(?:0[oO][0-7](?:_?[0-7])*|0[xX][0-9A-Fa-f](?:_?[0-9A-Fa-f])*|0[bB][01](?:_?[01])*|[1-9](?:_?[0-9])*|0)";

fn float_pattern() -> String {
    let point_float = format!(r"(?:{DIGITS}?\.{DIGITS}|{DIGITS}\.)");
    let exponent = format!(r"(?:[eE][+-]?{DIGITS})");
    format!(r"(?:(?:{point_float}|{DIGITS}){exponent}|{point_float})")
}

static IMAGINARY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^(?:{}|{DIGITS})[jJ]\b", float_pattern())).unwrap()
});
static FLOAT: Lazy<Regex> = Lazy::new(|| Regex::new(&format!("^{}", float_pattern())).unwrap());
static LONG_INTEGER: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"^{INTEGER}[lL]\b")).unwrap());
static PLAIN_INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(&format!(r"^{INTEGER}\b")).unwrap());

/// Byte length of the numeric literal at the start of `rest`, if there is one.
pub fn match_number(rest: &str) -> Option<usize> {
    if let Some(m) = IMAGINARY.find(rest) {
        return Some(m.end());
    }
    if let Some(m) = FLOAT.find(rest) {
        let len = m.end();
        let opens_range = m.as_str().ends_with('.') && rest[len..].starts_with('.');
        if !opens_range {
            return Some(len);
        }
    }
    if let Some(m) = LONG_INTEGER.find(rest) {
        return Some(m.end());
    }
    PLAIN_INTEGER.find(rest).map(|m| m.end())
}
