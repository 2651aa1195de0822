//! Property-based tests for the tokenizer and the incremental line cache
//!
//! Inputs are drawn from an alphabet heavy in the characters that drive state changes
//! (quotes, `#`, brackets, backslashes, newlines) so that strings and block comments open
//! and close across lines often.

use focus::focus::document::{Position, TextRange};
use focus::focus::{tokenize, tokenize_line, Document, LexerState};
use proptest::prelude::*;

const SOURCE: &str = "[a-zA-Z0-9 _.:=+>\\-{}()\\[\\]\"'#\\\\\n\tπé]{0,80}";
const EDIT: &str = "[a-z0-9 {}\\[\\]\"#\\\\\n]{0,12}";

fn assert_matches_full_tokenize(document: &Document) {
    let expected = tokenize(&document.text());
    assert_eq!(expected.len(), document.line_count());
    for (row, line) in expected.iter().enumerate() {
        assert_eq!(document.tokens(row), Some(line), "row {row} differs");
    }
}

/// Char offset of `position` in `text`, clamped the way a document clamps positions: rows past
/// the end land on the end of the text, columns past a line's end on that line's end.
fn clamped_offset(text: &str, position: Position) -> usize {
    let lines: Vec<&str> = text.split('\n').collect();
    if position.row >= lines.len() {
        return text.chars().count();
    }
    let before: usize = lines[..position.row]
        .iter()
        .map(|line| line.chars().count() + 1)
        .sum();
    before + position.column.min(lines[position.row].chars().count())
}

/// Plain-string rendition of `Document::replace`.
fn replace_in_model(model: &str, range: TextRange, text: &str) -> String {
    let start = clamped_offset(model, range.start);
    let end = clamped_offset(model, range.end);
    let chars: Vec<char> = model.chars().collect();
    let mut out: String = chars[..start].iter().collect();
    out.push_str(text);
    out.extend(&chars[end..]);
    out
}

proptest! {
    #[test]
    fn lexemes_reproduce_each_line(source in SOURCE) {
        for (line, text) in tokenize(&source).iter().zip(source.split('\n')) {
            prop_assert_eq!(line.text(), text);
        }
    }

    #[test]
    fn token_columns_cover_the_line(line in "[^\n]{0,60}", state_idx in 0usize..3) {
        let state = [LexerState::Start, LexerState::Comment, LexerState::QuotedString][state_idx];
        let tokens = tokenize_line(&line, state);
        let mut column = 0;
        for token in &tokens.tokens {
            prop_assert_eq!(token.start_column, column);
            prop_assert!(token.end_column > token.start_column);
            prop_assert_eq!(token.len(), token.lexeme.chars().count());
            column = token.end_column;
        }
        prop_assert_eq!(column, line.chars().count());
    }

    #[test]
    fn end_states_chain(source in SOURCE) {
        let lines = tokenize(&source);
        let mut state = LexerState::Start;
        for (line, text) in lines.iter().zip(source.split('\n')) {
            prop_assert_eq!(&tokenize_line(text, state), line);
            state = line.end_state;
        }
    }

    #[test]
    fn incremental_matches_full_retokenize(
        source in SOURCE,
        edits in prop::collection::vec((0usize..8, 0usize..30, 0usize..8, 0usize..30, EDIT), 1..6),
    ) {
        let mut document = Document::new(&source);
        let mut model = source.clone();
        for (start_row, start_col, end_row, end_col, text) in edits {
            let range = TextRange::new(
                Position::new(start_row, start_col),
                Position::new(end_row, end_col),
            );
            document.replace(range, &text);
            model = replace_in_model(&model, range, &text);
            prop_assert_eq!(document.text(), model.clone());
            assert_matches_full_tokenize(&document);
            let touched = document.last_retokenized();
            prop_assert!(touched.end <= document.line_count());
        }
    }

    #[test]
    fn auto_outdent_is_idempotent(source in SOURCE, row in 0usize..8) {
        let mut document = Document::new(&source);
        if document.auto_outdent(row).is_some() {
            assert_matches_full_tokenize(&document);
        }
        prop_assert_eq!(document.auto_outdent(row), None);
    }

    #[test]
    fn bracket_partners_are_symmetric(source in SOURCE) {
        let document = Document::new(&source);
        let index = document.bracket_index();
        for entry in index.entries() {
            if let Some(partner) = document.find_matching_bracket(entry.position) {
                prop_assert_eq!(document.find_matching_bracket(partner), Some(entry.position));
                prop_assert!(index.get(partner).is_some_and(|p| p.is_open() != entry.is_open()));
            }
        }
    }
}
