//! Tokenizer
//!
//! This module drives the rule tables across a line and produces the line's tokens together
//! with the lexer state the line ends in.
//!
//! Structure:
//!     The rules live in [rules](rules), one ordered list per lexer state. The numeric literal
//!     recognizer and the keyword classifier are split out into [numbers](numbers) and
//!     [keywords](keywords). Per-buffer caching and incremental re-tokenization live in
//!     [line_cache](line_cache).
//!
//! The state machine:
//!     1. Look up the rule list of the current state.
//!     2. Apply the first rule that matches at the cursor, emit its tokens and move past it.
//!     3. If the rule names a next state, switch to it. The switch takes effect immediately,
//!        so a block comment opened and closed on the same line returns to `Start` mid-line.
//!     4. If no rule matches, emit one char as `text` and move on. Consecutive unmatched chars
//!        are merged into a single token.
//!
//!     Step 4 makes the machine total: every call consumes at least one char per iteration, so
//!     lexing never fails and always terminates in a single pass over the line.
//!
//! Lines
//!
//!     A buffer is split on `\n` only. A `\r` left at the end of a line is ordinary whitespace,
//!     which keeps the lexemes of a line reproducing it byte for byte.

pub mod keywords;
pub mod line_cache;
pub mod numbers;
pub mod rules;

pub use line_cache::LineCache;

use crate::focus::token::{LexerState, LineTokens, Token, TokenCategory};

/// Tokenize one line starting in `state`.
pub fn tokenize_line(line: &str, state: LexerState) -> LineTokens {
    let mut sink = TokenSink::default();
    let mut state = state;
    let mut pos = 0;

    while pos < line.len() {
        let rest = &line[pos..];
        match rules::first_match(state, rest) {
            Some(found) => {
                let matched = &rest[..found.len];
                for (category, text) in found.rule.pieces(matched) {
                    sink.push(category, text);
                }
                if let Some(next) = found.rule.next_state {
                    state = next;
                }
                pos += found.len;
            }
            None => {
                let ch_len = rest.chars().next().map_or(1, char::len_utf8);
                sink.push_unmatched(&rest[..ch_len]);
                pos += ch_len;
            }
        }
    }

    LineTokens::new(sink.finish(), state)
}

/// Tokenize a whole buffer, one entry per `\n`-separated line.
pub fn tokenize(source: &str) -> Vec<LineTokens> {
    let mut state = LexerState::Start;
    source
        .split('\n')
        .map(|line| {
            let line_tokens = tokenize_line(line, state);
            state = line_tokens.end_state;
            line_tokens
        })
        .collect()
}

/// Accumulates tokens for a line, tracking columns and merging where pieces belong together.
#[derive(Default)]
struct TokenSink {
    tokens: Vec<Token>,
    column: usize,
    last_unmatched: bool,
}

impl TokenSink {
    fn push(&mut self, category: TokenCategory, text: &str) {
        // Pieces of one string or one comment read as a single lexeme to the renderer.
        let merges = matches!(category, TokenCategory::String | TokenCategory::Comment)
            && self.tokens.last().is_some_and(|t| t.category == category);
        self.append(category, text, merges);
        self.last_unmatched = false;
    }

    fn push_unmatched(&mut self, text: &str) {
        let merges = self.last_unmatched;
        self.append(TokenCategory::Text, text, merges);
        self.last_unmatched = true;
    }

    fn append(&mut self, category: TokenCategory, text: &str, merge: bool) {
        let width = text.chars().count();
        match self.tokens.last_mut() {
            Some(last) if merge => {
                last.lexeme.push_str(text);
                last.end_column += width;
            }
            _ => self.tokens.push(Token::new(category, text, self.column)),
        }
        self.column += width;
    }

    fn finish(self) -> Vec<Token> {
        self.tokens
    }
}
