//! Lexer state carried across lines

use serde::{Deserialize, Serialize};
use std::fmt;

/// The tokenizer's only cross-line state.
///
/// The state a line ends in is the state the next line starts in. The first line of a buffer
/// starts in `Start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LexerState {
    #[default]
    Start,
    /// Inside a `#[ ... ]#` block comment.
    Comment,
    /// Inside a double-quoted string that was left open on an earlier line.
    QuotedString,
}

impl LexerState {
    pub fn as_str(self) -> &'static str {
        match self {
            LexerState::Start => "start",
            LexerState::Comment => "comment",
            LexerState::QuotedString => "quoted-string",
        }
    }
}

impl fmt::Display for LexerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
