//! Line tokens
//!
//! The tokens of one line together with the state the line ends in.

use super::core::Token;
use super::state::LexerState;
use super::TokenCategory;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LineTokens {
    pub tokens: Vec<Token>,
    pub end_state: LexerState,
}

impl LineTokens {
    pub fn new(tokens: Vec<Token>, end_state: LexerState) -> Self {
        Self { tokens, end_state }
    }

    /// Concatenate the lexemes back into the source line.
    pub fn text(&self) -> String {
        self.tokens.iter().map(|t| t.lexeme.as_str()).collect()
    }

    /// The last token that is not plain whitespace.
    pub fn last_significant(&self) -> Option<&Token> {
        self.tokens.iter().rev().find(|t| !t.is_whitespace())
    }

    pub fn categories(&self) -> Vec<TokenCategory> {
        self.tokens.iter().map(|t| t.category).collect()
    }
}
