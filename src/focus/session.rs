//! Edit session
//!
//! The keystroke handler an editor component wires to its input events. Typed text goes into
//! the [Document]; the indentation assists run around it:
//!
//! - A typed newline is followed by the indentation predicted from the text before the
//!   cursor, so splitting `let t = {|}` puts the cursor one level deeper on the new line.
//! - Typing `}` on a line that holds only indentation lines the brace up with the line of the
//!   `{` it closes, when `auto_outdent` is enabled.
//!
//! Either way the returned position is where the cursor belongs after the keystroke.

use crate::focus::config::IndentationConfig;
use crate::focus::document::{byte_offset, Document, Position};
use crate::focus::indentation::{check_outdent, next_line_indent};
use crate::focus::lexing::tokenize_line;

#[derive(Debug, Clone)]
pub struct EditSession {
    document: Document,
    config: IndentationConfig,
    unit: String,
}

impl EditSession {
    pub fn new(document: Document, config: IndentationConfig) -> Self {
        let unit = config.unit();
        Self {
            document,
            config,
            unit,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    pub fn config(&self) -> &IndentationConfig {
        &self.config
    }

    /// Insert typed `text` at `position`; returns the new cursor position.
    pub fn insert(&mut self, position: Position, text: &str) -> Position {
        let position = self.document.clamp(position);
        if text == "\n" {
            return self.newline(position);
        }

        let line = self.document.line(position.row).unwrap_or_default();
        let outdent = self.config.auto_outdent && check_outdent(line, text);
        let cursor = self.document.insert(position, text);
        if !outdent {
            return cursor;
        }
        match self.document.auto_outdent(position.row) {
            Some(edit) => edit.shift(cursor),
            None => cursor,
        }
    }

    fn newline(&mut self, position: Position) -> Position {
        let line = self.document.line(position.row).unwrap_or_default();
        let before = &line[..byte_offset(line, position.column)];
        let tokens = tokenize_line(before, self.document.start_state(position.row));
        let indent = next_line_indent(before, &tokens, &self.unit);
        tracing::trace!(row = position.row, indent = indent.len(), "newline");
        self.document.insert(position, &format!("\n{indent}"))
    }
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new(Document::default(), IndentationConfig::default())
    }
}
