//! Keyword and constant classification for identifier runs

use crate::focus::token::TokenCategory;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const KEYWORDS: &[&str] = &[
    "let", "fn", "and", "not", "is", "as", "or", "match", "if", "then", "else", "from", "import",
];

pub const CONSTANTS: &[&str] = &["true", "false"];

static RESERVED: Lazy<HashMap<&'static str, TokenCategory>> = Lazy::new(|| {
    KEYWORDS
        .iter()
        .map(|word| (*word, TokenCategory::Keyword))
        .chain(
            CONSTANTS
                .iter()
                .map(|word| (*word, TokenCategory::LanguageConstant)),
        )
        .collect()
});

/// Category for an identifier-shaped word: keyword, language constant or plain identifier.
pub fn classify(word: &str) -> TokenCategory {
    RESERVED
        .get(word)
        .copied()
        .unwrap_or(TokenCategory::Identifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("let", TokenCategory::Keyword)]
    #[case("fn", TokenCategory::Keyword)]
    #[case("match", TokenCategory::Keyword)]
    #[case("import", TokenCategory::Keyword)]
    #[case("true", TokenCategory::LanguageConstant)]
    #[case("false", TokenCategory::LanguageConstant)]
    #[case("letter", TokenCategory::Identifier)]
    #[case("with", TokenCategory::Identifier)]
    #[case("True", TokenCategory::Identifier)]
    fn test_classify(#[case] word: &str, #[case] expected: TokenCategory) {
        assert_eq!(classify(word), expected);
    }
}
