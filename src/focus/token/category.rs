//! Token categories
//!
//! The category names follow the dotted scope convention editor themes already understand
//! (`keyword.operator`, `constant.numeric`, ...), so the rendering layer can look styles up by
//! name without a translation table.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenCategory {
    #[serde(rename = "comment")]
    Comment,
    /// Capitalized identifier, a module or namespace reference such as `Io`.
    #[serde(rename = "entity.other")]
    EntityOther,
    /// Identifier reached through a `.`, such as `print` in `Io.print`.
    #[serde(rename = "support.function")]
    SupportFunction,
    #[serde(rename = "string")]
    String,
    #[serde(rename = "constant.numeric")]
    Numeric,
    #[serde(rename = "keyword")]
    Keyword,
    /// `true` and `false`.
    #[serde(rename = "constant.language")]
    LanguageConstant,
    #[serde(rename = "identifier")]
    Identifier,
    #[serde(rename = "keyword.operator")]
    Operator,
    #[serde(rename = "paren.lparen")]
    OpenParen,
    #[serde(rename = "paren.rparen")]
    CloseParen,
    /// Whitespace and anything no rule recognizes.
    #[serde(rename = "text")]
    Text,
}

impl TokenCategory {
    /// Returns the style name the rendering layer keys its theme on.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenCategory::Comment => "comment",
            TokenCategory::EntityOther => "entity.other",
            TokenCategory::SupportFunction => "support.function",
            TokenCategory::String => "string",
            TokenCategory::Numeric => "constant.numeric",
            TokenCategory::Keyword => "keyword",
            TokenCategory::LanguageConstant => "constant.language",
            TokenCategory::Identifier => "identifier",
            TokenCategory::Operator => "keyword.operator",
            TokenCategory::OpenParen => "paren.lparen",
            TokenCategory::CloseParen => "paren.rparen",
            TokenCategory::Text => "text",
        }
    }

    pub fn is_paren(self) -> bool {
        matches!(self, TokenCategory::OpenParen | TokenCategory::CloseParen)
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const TOKEN_CATEGORIES: &[TokenCategory] = &[
    TokenCategory::Comment,
    TokenCategory::EntityOther,
    TokenCategory::SupportFunction,
    TokenCategory::String,
    TokenCategory::Numeric,
    TokenCategory::Keyword,
    TokenCategory::LanguageConstant,
    TokenCategory::Identifier,
    TokenCategory::Operator,
    TokenCategory::OpenParen,
    TokenCategory::CloseParen,
    TokenCategory::Text,
];
