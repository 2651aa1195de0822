//! Core token struct

use super::category::TokenCategory;
use serde::{Deserialize, Serialize};

/// A single lexeme of a line.
///
/// Columns count chars from the start of the line; `end_column` is exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub category: TokenCategory,
    pub lexeme: String,
    pub start_column: usize,
    pub end_column: usize,
}

impl Token {
    pub fn new(category: TokenCategory, lexeme: impl Into<String>, start_column: usize) -> Self {
        let lexeme = lexeme.into();
        let end_column = start_column + lexeme.chars().count();
        Self {
            category,
            lexeme,
            start_column,
            end_column,
        }
    }

    /// Number of chars covered.
    pub fn len(&self) -> usize {
        self.end_column - self.start_column
    }

    pub fn is_empty(&self) -> bool {
        self.start_column == self.end_column
    }

    pub fn is_whitespace(&self) -> bool {
        self.category == TokenCategory::Text && self.lexeme.chars().all(char::is_whitespace)
    }
}
