//! Indentation predictor
//!
//! Suggests the indentation of a freshly started line from the line it was started after.
//! The line's own indentation is kept, and one indent unit is added when the line ends in a
//! construct that opens a block:
//!
//! - an opening bracket: `(`, `[`, `{`
//! - an assignment `=` or a mapping colon `:`
//! - an arrow: `->`, `=>`
//! - one of the words `else`, `with`, `try`
//!
//! The decision is made on tokens, not on raw text, so `==` or `<=` at the end of a line do
//! not count as assignments, and a `{` inside a string or a trailing comment does not count
//! as a bracket. A line ending inside a string or block comment never adds a level.

use super::leading_whitespace;
use crate::focus::token::{LexerState, LineTokens, TokenCategory};

const BLOCK_OPERATORS: &[&str] = &["=", ":", "->", "=>"];
const BLOCK_WORDS: &[&str] = &["else", "with", "try"];

/// Indentation for the line following `line`, given the tokens of `line`.
pub fn next_line_indent(line: &str, tokens: &LineTokens, unit: &str) -> String {
    let mut indent = leading_whitespace(line).to_string();
    if opens_block(tokens) {
        indent.push_str(unit);
    }
    indent
}

/// Whether a line with these tokens ends in a block-opening construct.
pub fn opens_block(tokens: &LineTokens) -> bool {
    if tokens.end_state != LexerState::Start {
        return false;
    }
    let Some(last) = tokens.last_significant() else {
        return false;
    };
    match last.category {
        TokenCategory::OpenParen => true,
        TokenCategory::Operator => BLOCK_OPERATORS.contains(&last.lexeme.as_str()),
        TokenCategory::Keyword | TokenCategory::Identifier => {
            BLOCK_WORDS.contains(&last.lexeme.as_str())
        }
        _ => false,
    }
}
