//! Document
//!
//!     The line buffer an editor session works on. It owns the text as a list of lines, the
//!     [LineCache] holding each line's tokens and end state, and a lazily built
//!     [BracketIndex] for bracket lookups.
//!
//!     Every edit goes through [Document::replace]: the affected rows are spliced out, the
//!     replacement rows spliced in, the cache brought up to date incrementally, and the
//!     bracket index dropped so the next lookup rebuilds it from the fresh tokens.

pub mod edit;
pub mod position;

pub use edit::TextEdit;
pub use position::{BracketPosition, Position, TextRange};

use crate::focus::indentation::brackets::BracketIndex;
use crate::focus::indentation::outdent;
use crate::focus::lexing::LineCache;
use crate::focus::token::{LexerState, LineTokens};
use once_cell::unsync::OnceCell;
use std::ops::Range;

#[derive(Debug, Clone)]
pub struct Document {
    lines: Vec<String>,
    cache: LineCache,
    brackets: OnceCell<BracketIndex>,
    last_retokenized: Range<usize>,
}

impl Document {
    /// Build a document from text, splitting lines on `\n`.
    pub fn new(text: &str) -> Self {
        let lines: Vec<String> = text.split('\n').map(String::from).collect();
        let cache = LineCache::build(&lines);
        tracing::debug!(lines = lines.len(), "document tokenized");
        let last_retokenized = 0..lines.len();
        Self {
            lines,
            cache,
            brackets: OnceCell::new(),
            last_retokenized,
        }
    }

    /// The full text, lines joined with `\n`.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(String::as_str)
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn tokens(&self, row: usize) -> Option<&LineTokens> {
        self.cache.get(row)
    }

    pub fn start_state(&self, row: usize) -> LexerState {
        self.cache.start_state(row)
    }

    pub fn end_state(&self, row: usize) -> Option<LexerState> {
        self.cache.get(row).map(|line| line.end_state)
    }

    /// Rows re-tokenized by the most recent edit; the rows a renderer has to repaint.
    pub fn last_retokenized(&self) -> Range<usize> {
        self.last_retokenized.clone()
    }

    /// Clamp a position onto existing text.
    ///
    /// A position past the last line lands on the end of the text, so clamping keeps the order
    /// of positions and a clamped range never runs backwards.
    pub fn clamp(&self, position: Position) -> Position {
        let last = self.lines.len() - 1;
        if position.row > last {
            return Position::new(last, self.lines[last].chars().count());
        }
        let column = position.column.min(self.lines[position.row].chars().count());
        Position::new(position.row, column)
    }

    /// Insert `text` at `position`; returns the position right after the inserted text.
    pub fn insert(&mut self, position: Position, text: &str) -> Position {
        self.replace(TextRange::at(position), text)
    }

    /// Remove the text in `range`.
    pub fn remove(&mut self, range: TextRange) -> Position {
        self.replace(range, "")
    }

    /// Apply a single-line edit.
    pub fn apply(&mut self, edit: &TextEdit) -> Position {
        self.replace(edit.range(), &edit.new_text)
    }

    /// Replace the text in `range` with `text`, which may span several lines.
    ///
    /// Returns the position right after the inserted text.
    pub fn replace(&mut self, range: TextRange, text: &str) -> Position {
        let start = self.clamp(range.start);
        let end = self.clamp(range.end);

        let head = &self.lines[start.row][..byte_offset(&self.lines[start.row], start.column)];
        let tail = &self.lines[end.row][byte_offset(&self.lines[end.row], end.column)..];

        let mut replacement: Vec<String> = text.split('\n').map(String::from).collect();
        replacement[0].insert_str(0, head);
        let last = replacement.len() - 1;
        let cursor = Position::new(start.row + last, replacement[last].chars().count());
        replacement[last].push_str(tail);

        let removed = end.row - start.row + 1;
        let inserted = replacement.len();
        self.lines.splice(start.row..=end.row, replacement);
        self.last_retokenized = self.cache.splice(&self.lines, start.row, removed, inserted);
        self.brackets = OnceCell::new();

        tracing::trace!(%start, %end, %cursor, "document edited");
        cursor
    }

    /// Position of the bracket matching the one at `position`, if it has a partner.
    pub fn find_matching_bracket(&self, position: Position) -> Option<BracketPosition> {
        self.bracket_index().matching(position)
    }

    /// The bracket index over the current tokens, built on first use after an edit.
    pub fn bracket_index(&self) -> &BracketIndex {
        self.brackets
            .get_or_init(|| BracketIndex::build(self.cache.iter()))
    }

    /// Re-indent `row` to its opening brace's line if it is a closing-brace line.
    ///
    /// Returns the edit that was applied, or `None` when the row was left alone.
    pub fn auto_outdent(&mut self, row: usize) -> Option<TextEdit> {
        let edit = outdent::auto_outdent(self, row)?;
        self.apply(&edit);
        Some(edit)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("")
    }
}

/// Byte offset of char `column` in `line`, clamped to the line's end.
pub(crate) fn byte_offset(line: &str, column: usize) -> usize {
    line.char_indices()
        .nth(column)
        .map_or(line.len(), |(offset, _)| offset)
}
