//! Single-line text edits

use super::position::{Position, TextRange};
use serde::{Deserialize, Serialize};

/// Replacement of a column span on one row, expressed as char columns over the current text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextEdit {
    pub row: usize,
    pub start_column: usize,
    pub end_column: usize,
    pub new_text: String,
}

impl TextEdit {
    pub fn range(&self) -> TextRange {
        TextRange::new(
            Position::new(self.row, self.start_column),
            Position::new(self.row, self.end_column),
        )
    }

    /// Where a cursor at `position` ends up once this edit is applied.
    pub fn shift(&self, position: Position) -> Position {
        if position.row != self.row || position.column < self.end_column {
            return position;
        }
        let inserted = self.new_text.chars().count();
        let removed = self.end_column - self.start_column;
        Position::new(position.row, position.column + inserted - removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_after_edit() {
        let edit = TextEdit {
            row: 2,
            start_column: 0,
            end_column: 4,
            new_text: String::new(),
        };
        assert_eq!(edit.shift(Position::new(2, 5)), Position::new(2, 1));
        assert_eq!(edit.shift(Position::new(1, 5)), Position::new(1, 5));
        assert_eq!(edit.shift(Position::new(2, 3)), Position::new(2, 3));
    }
}
