//! Indentation heuristics
//!
//!     Two editor assists run on top of the token stream:
//!
//!     Indentation Predictor:
//!         When a new line is started, suggest its indentation from the line above: one unit
//!         deeper after an opening bracket, an assignment, a mapping colon, an arrow or one of
//!         the block-opening words, the same indentation otherwise. See [predictor](predictor).
//!
//!     Outdent Engine:
//!         When a `}` is typed on a line holding only indentation, line that brace up with the
//!         line of the `{` it closes. The matching brace is found through the bracket index,
//!         which only knows about brackets that were tokenized as brackets, so braces inside
//!         strings and comments never match. See [outdent](outdent) and [brackets](brackets).
//!
//!     Both are heuristics: on input they do not understand they leave the text alone.

pub mod brackets;
pub mod outdent;
pub mod predictor;

pub use brackets::{BracketEntry, BracketIndex};
pub use outdent::{auto_outdent, check_outdent};
pub use predictor::next_line_indent;

use crate::focus::document::Document;
use crate::focus::error::FocusError;

/// The leading run of spaces and tabs of a line.
pub fn leading_whitespace(line: &str) -> &str {
    let end = line
        .find(|c: char| c != ' ' && c != '\t')
        .unwrap_or(line.len());
    &line[..end]
}

/// Indentation predicted for a new line started after `row` of `document`.
pub fn indent_after(document: &Document, row: usize, unit: &str) -> Result<String, FocusError> {
    match (document.line(row), document.tokens(row)) {
        (Some(line), Some(tokens)) => Ok(next_line_indent(line, tokens, unit)),
        _ => Err(FocusError::RowOutOfRange {
            row,
            lines: document.line_count(),
        }),
    }
}
