//! Per-buffer line cache with incremental re-tokenization
//!
//!     The cache holds one [LineTokens] per buffer line. The end state of line n is the start
//!     state of line n+1, so an edit can only affect the lines it touches and whatever follows
//!     them while the state keeps changing.
//!
//! Fixed point
//!
//!     After an edit replaces a block of lines, the replacement lines are always tokenized.
//!     Tokenizing then continues with the following lines, but stops as soon as a line ends
//!     in the same state it ended in before the edit: from there on every line starts in the
//!     state it started in before, and tokenization is deterministic, so the cached entries
//!     are still right. A typical single-line edit that does not open or close a string or a
//!     block comment touches exactly one line.

use super::tokenize_line;
use crate::focus::token::{LexerState, LineTokens};
use std::ops::Range;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineCache {
    entries: Vec<LineTokens>,
}

impl LineCache {
    /// Tokenize every line from scratch.
    pub fn build<S: AsRef<str>>(lines: &[S]) -> Self {
        let mut state = LexerState::Start;
        let entries = lines
            .iter()
            .map(|line| {
                let line_tokens = tokenize_line(line.as_ref(), state);
                state = line_tokens.end_state;
                line_tokens
            })
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, row: usize) -> Option<&LineTokens> {
        self.entries.get(row)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LineTokens> {
        self.entries.iter()
    }

    /// State the given row starts in.
    pub fn start_state(&self, row: usize) -> LexerState {
        match row.checked_sub(1) {
            Some(previous) => self
                .entries
                .get(previous)
                .map_or(LexerState::Start, |entry| entry.end_state),
            None => LexerState::Start,
        }
    }

    /// Replace `removed` cached rows at `first_row` with `inserted` rows and bring the cache
    /// back in line with `lines`, the buffer's full line list after the edit.
    ///
    /// Returns the rows that were re-tokenized.
    pub fn splice<S: AsRef<str>>(
        &mut self,
        lines: &[S],
        first_row: usize,
        removed: usize,
        inserted: usize,
    ) -> Range<usize> {
        let start_state = self.start_state(first_row);
        let mut boundary_before = match removed.checked_sub(1) {
            Some(last) => self.entries[first_row + last].end_state,
            None => start_state,
        };

        self.entries.splice(
            first_row..first_row + removed,
            std::iter::repeat_with(LineTokens::default).take(inserted),
        );

        let mut state = start_state;
        let mut row = first_row;
        while row < first_row + inserted {
            let fresh = tokenize_line(lines[row].as_ref(), state);
            state = fresh.end_state;
            self.entries[row] = fresh;
            row += 1;
        }

        while row < self.entries.len() && state != boundary_before {
            let cached_end = self.entries[row].end_state;
            let fresh = tokenize_line(lines[row].as_ref(), state);
            state = fresh.end_state;
            self.entries[row] = fresh;
            boundary_before = cached_end;
            row += 1;
        }

        tracing::trace!(
            first_row,
            removed,
            inserted,
            retokenized = row - first_row,
            "line cache spliced"
        );
        first_row..row
    }
}
