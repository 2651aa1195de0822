//! Testing utilities for token assertions
//!
//! Two tools, used across the unit tests and the integration tests under `tests/`:
//!
//! 1. **[assert_tokens]**: a fluent assertion builder over one line's [LineTokens]. It checks
//!    the end state and the `(category, lexeme)` sequence of the line, either exactly or
//!    skipping whitespace runs, and prints the whole rendered line on failure.
//! 2. **[render_tokens]**: renders a line's tokens one per line, followed by its end state.
//!    This is the format used by the `insta` snapshots.
//!
//! Sample sources live in `docs/samples/` and are read through [sample] / [sample_names], so
//! tests exercise the same files the documentation shows.
//!
//! ```rust-example
//! use focus::focus::testing::assert_tokens;
//! use focus::focus::{tokenize_line, LexerState, TokenCategory as C};
//!
//! let line = tokenize_line("let x = 1", LexerState::Start);
//! assert_tokens(&line)
//!     .end_state(LexerState::Start)
//!     .significant(&[(C::Keyword, "let"), (C::Identifier, "x"), (C::Operator, "="), (C::Numeric, "1")]);
//! ```

use crate::focus::token::{LexerState, LineTokens, Token, TokenCategory};
use std::fmt::Write;
use std::path::PathBuf;

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for a tokenized line
pub fn assert_tokens(line: &LineTokens) -> LineAssertion<'_> {
    LineAssertion { line }
}

/// Render tokens as `category "lexeme"` lines followed by `-> end-state`.
pub fn render_tokens(line: &LineTokens) -> String {
    let mut out = String::new();
    for token in &line.tokens {
        let _ = writeln!(out, "{} {:?}", token.category, token.lexeme);
    }
    let _ = write!(out, "-> {}", line.end_state);
    out
}

// ============================================================================
// Line Assertions
// ============================================================================

pub struct LineAssertion<'a> {
    line: &'a LineTokens,
}

impl<'a> LineAssertion<'a> {
    /// Assert the state the line ends in
    pub fn end_state(self, expected: LexerState) -> Self {
        assert_eq!(
            self.line.end_state,
            expected,
            "Expected end state {}, found {}:\n{}",
            expected,
            self.line.end_state,
            render_tokens(self.line)
        );
        self
    }

    /// Assert the number of tokens
    pub fn count(self, expected: usize) -> Self {
        assert_eq!(
            self.line.tokens.len(),
            expected,
            "Expected {} tokens, found {}:\n{}",
            expected,
            self.line.tokens.len(),
            render_tokens(self.line)
        );
        self
    }

    /// Assert the full token sequence, whitespace included
    pub fn exact(self, expected: &[(TokenCategory, &str)]) -> Self {
        let actual = pairs(self.line.tokens.iter());
        compare(&actual, expected, self.line);
        self
    }

    /// Assert the token sequence with whitespace-only tokens skipped
    pub fn significant(self, expected: &[(TokenCategory, &str)]) -> Self {
        let actual = pairs(self.line.tokens.iter().filter(|t| !t.is_whitespace()));
        compare(&actual, expected, self.line);
        self
    }

    /// Assert on the token at `index`
    pub fn token<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(&Token),
    {
        assert!(
            index < self.line.tokens.len(),
            "Token index {} out of bounds (line has {} tokens)",
            index,
            self.line.tokens.len()
        );
        assertion(&self.line.tokens[index]);
        self
    }

    /// Assert that the lexemes reproduce `source`
    pub fn reproduces(self, source: &str) -> Self {
        assert_eq!(
            self.line.text(),
            source,
            "Lexemes do not reproduce the line:\n{}",
            render_tokens(self.line)
        );
        self
    }
}

fn pairs<'t>(tokens: impl Iterator<Item = &'t Token>) -> Vec<(TokenCategory, &'t str)> {
    tokens.map(|t| (t.category, t.lexeme.as_str())).collect()
}

fn compare(actual: &[(TokenCategory, &str)], expected: &[(TokenCategory, &str)], line: &LineTokens) {
    for (i, (found, wanted)) in actual.iter().zip(expected).enumerate() {
        assert_eq!(
            found,
            wanted,
            "Token {} differs:\n{}",
            i,
            render_tokens(line)
        );
    }
    assert_eq!(
        actual.len(),
        expected.len(),
        "Expected {} tokens, found {}:\n{}",
        expected.len(),
        actual.len(),
        render_tokens(line)
    );
}

// ============================================================================
// Samples
// ============================================================================

fn samples_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("docs").join("samples")
}

/// Names of the sample sources, sorted.
pub fn sample_names() -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(samples_dir())
        .map(|entries| {
            entries
                .filter_map(Result::ok)
                .map(|entry| entry.file_name().to_string_lossy().into_owned())
                .filter(|name| name.ends_with(".focus"))
                .collect()
        })
        .unwrap_or_default();
    names.sort();
    names
}

/// Contents of the sample source `name`.
pub fn sample(name: &str) -> std::io::Result<String> {
    std::fs::read_to_string(samples_dir().join(name))
}
