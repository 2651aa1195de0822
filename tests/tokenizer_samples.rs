//! Integration tests for the tokenizer using sample sources
//!
//! Every sample under `docs/samples/` must tokenize into lines whose lexemes reproduce the
//! source, with contiguous columns and end states chained from line to line.

use focus::focus::testing::{assert_tokens, render_tokens, sample, sample_names};
use focus::focus::{tokenize, tokenize_line, LexerState, TokenCategory as C};

fn sample_lines(name: &str) -> Vec<focus::focus::LineTokens> {
    tokenize(&sample(name).expect("Failed to read sample source"))
}

#[test]
fn test_samples_reproduce_source() {
    for name in sample_names() {
        let source = sample(&name).unwrap();
        let lines = tokenize(&source);
        assert_eq!(lines.len(), source.split('\n').count(), "{name}");

        let mut state = LexerState::Start;
        for (row, (line, text)) in lines.iter().zip(source.split('\n')).enumerate() {
            assert_eq!(line.text(), text, "{name}:{row}");
            assert_eq!(tokenize_line(text, state), *line, "{name}:{row}");

            let mut column = 0;
            for token in &line.tokens {
                assert_eq!(token.start_column, column, "{name}:{row}");
                assert!(token.end_column > token.start_column, "{name}:{row}");
                column = token.end_column;
            }
            assert_eq!(column, text.chars().count(), "{name}:{row}");
            state = line.end_state;
        }
    }
}

#[test]
fn test_010_bindings_numbers() {
    let lines = sample_lines("010-bindings.focus");
    assert_tokens(&lines[3]).significant(&[
        (C::Keyword, "let"),
        (C::Identifier, "ratio"),
        (C::Operator, "="),
        (C::Numeric, "3.14"),
        (C::Operator, "*"),
        (C::Numeric, "2e10"),
    ]);
    assert_tokens(&lines[4]).significant(&[
        (C::Keyword, "let"),
        (C::Identifier, "big"),
        (C::Operator, "="),
        (C::Numeric, "12345678901234L"),
    ]);
    assert_tokens(&lines[5]).significant(&[
        (C::Keyword, "let"),
        (C::Identifier, "wave"),
        (C::Operator, "="),
        (C::Numeric, "1.5j"),
    ]);
}

#[test]
fn test_020_tables_brackets() {
    let lines = sample_lines("020-tables.focus");
    assert_tokens(&lines[2]).significant(&[
        (C::Identifier, "inner"),
        (C::Operator, ":"),
        (C::OpenParen, "{"),
        (C::Identifier, "depth"),
        (C::Operator, ":"),
        (C::Numeric, "2"),
        (C::CloseParen, "}"),
        (C::Operator, ","),
    ]);
    assert_tokens(&lines[6]).significant(&[
        (C::Keyword, "let"),
        (C::Identifier, "empty"),
        (C::Operator, "="),
        (C::OpenParen, "{"),
        (C::CloseParen, "}"),
    ]);
}

#[test]
fn test_030_comments_snapshot() {
    let lines = sample_lines("030-comments.focus");
    let rendered: Vec<String> = lines.iter().map(render_tokens).collect();
    insta::assert_snapshot!(rendered.join("\n"), @r###"
    comment "#[ A block comment"
    -> comment
    comment "   that spans { several } lines"
    -> comment
    comment "]#"
    -> start
    keyword "let"
    text " "
    identifier "x"
    text " "
    keyword.operator "="
    text " "
    constant.numeric "1"
    text " "
    comment "# trailing note"
    -> start
    comment "#[ inline ]#"
    text " "
    keyword "let"
    text " "
    identifier "y"
    text " "
    keyword.operator "="
    text " "
    identifier "x"
    -> start
    -> start
    "###);
}

#[test]
fn test_040_strings_across_lines() {
    let lines = sample_lines("040-strings.focus");
    assert_tokens(&lines[1]).significant(&[
        (C::Keyword, "let"),
        (C::Identifier, "quote"),
        (C::Operator, "="),
        (C::String, "'q'"),
    ]);
    assert_tokens(&lines[2]).end_state(LexerState::Start).significant(&[
        (C::Keyword, "let"),
        (C::Identifier, "escaped"),
        (C::Operator, "="),
        (C::String, r#""say \"hi\"""#),
    ]);
    assert_tokens(&lines[3])
        .end_state(LexerState::QuotedString)
        .significant(&[
            (C::Keyword, "let"),
            (C::Identifier, "long"),
            (C::Operator, "="),
            (C::String, "\"first line"),
        ]);
    assert_tokens(&lines[4])
        .end_state(LexerState::QuotedString)
        .exact(&[(C::String, "second line { not a brace }")]);
    assert_tokens(&lines[5])
        .end_state(LexerState::Start)
        .exact(&[(C::String, "done\"")]);
    assert_tokens(&lines[6]).significant(&[
        (C::Keyword, "let"),
        (C::Identifier, "after"),
        (C::Operator, "="),
        (C::EntityOther, "Io"),
        (C::Operator, "."),
        (C::SupportFunction, "print"),
        (C::Identifier, "long"),
    ]);
}

#[test]
fn test_050_control_pipeline() {
    let lines = sample_lines("050-control.focus");
    assert_tokens(&lines[12]).significant(&[
        (C::Keyword, "let"),
        (C::Identifier, "pipeline"),
        (C::Identifier, "xs"),
        (C::Operator, "="),
        (C::Identifier, "xs"),
        (C::Operator, "|>"),
        (C::EntityOther, "List"),
        (C::Operator, "."),
        (C::SupportFunction, "map"),
        (C::OpenParen, "("),
        (C::Keyword, "fn"),
        (C::Identifier, "x"),
        (C::Operator, "->"),
        (C::Identifier, "x"),
        (C::Operator, "*"),
        (C::Numeric, "2"),
        (C::CloseParen, ")"),
        (C::Operator, "|>"),
        (C::EntityOther, "List"),
        (C::Operator, "."),
        (C::SupportFunction, "sum"),
    ]);
}

#[test]
fn test_json_output_shape() {
    let lines = tokenize("let s = \"a");
    let json = serde_json::to_value(&lines).unwrap();
    assert_eq!(json[0]["end_state"], "quoted-string");
    assert_eq!(json[0]["tokens"][0]["category"], "keyword");
    assert_eq!(json[0]["tokens"][0]["lexeme"], "let");
    assert_eq!(json[0]["tokens"][0]["start_column"], 0);
    assert_eq!(json[0]["tokens"][0]["end_column"], 3);
}
