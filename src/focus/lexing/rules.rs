//! Lexical rule tables
//!
//! Each lexer state owns an ordered list of rules. At every cursor position the rules of the
//! active state are tried in declaration order and the first one that matches wins, so order
//! is what disambiguates: the block comment opener has to come before the line comment, the
//! member access rule before the operator rule, floats before integers, and so on.
//!
//! Rules are data. A rule is a recognizer (an anchored regex or the numeric literal
//! recognizer), an action that turns the matched text into one or more tokens, and an
//! optional state to switch to afterwards.
//!
//! Member access such as `Io.print` needs to know that an identifier follows a `.`. The regex
//! engine has no lookbehind, so the rule matches `.print` as a whole and the action splits it
//! back into the `.` operator and the `print` function token.

use super::keywords;
use super::numbers;
use crate::focus::token::{LexerState, TokenCategory};
use once_cell::sync::Lazy;
use regex::Regex;

/// How a rule finds its match at the cursor.
#[derive(Debug)]
pub enum Recognizer {
    /// Regex anchored at the cursor.
    Pattern(Regex),
    /// The numeric literal recognizer, see [numbers](super::numbers).
    Number,
}

/// What a rule emits for its match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Emit(TokenCategory),
    /// Run the word through the keyword/constant classifier.
    Classify,
    /// Split `.name` into an operator token and a support function token.
    MemberAccess,
}

#[derive(Debug)]
pub struct Rule {
    pub name: &'static str,
    pub recognizer: Recognizer,
    pub action: Action,
    pub next_state: Option<LexerState>,
}

/// A successful rule application at the cursor.
#[derive(Debug, Clone, Copy)]
pub struct RuleMatch<'r> {
    pub rule: &'r Rule,
    /// Length of the match in bytes.
    pub len: usize,
}

impl Rule {
    fn pattern(
        name: &'static str,
        pattern: &str,
        action: Action,
        next_state: Option<LexerState>,
    ) -> Self {
        let regex = Regex::new(&format!("^(?:{pattern})")).unwrap();
        Self {
            name,
            recognizer: Recognizer::Pattern(regex),
            action,
            next_state,
        }
    }

    /// Byte length of this rule's match at the start of `rest`. Empty matches never count.
    pub fn match_len(&self, rest: &str) -> Option<usize> {
        let len = match &self.recognizer {
            Recognizer::Pattern(regex) => regex.find(rest).map(|m| m.end()),
            Recognizer::Number => numbers::match_number(rest),
        }?;
        (len > 0).then_some(len)
    }

    /// Split matched text into `(category, text)` pieces according to the action.
    pub fn pieces<'t>(&self, matched: &'t str) -> Vec<(TokenCategory, &'t str)> {
        match self.action {
            Action::Emit(category) => vec![(category, matched)],
            Action::Classify => vec![(keywords::classify(matched), matched)],
            Action::MemberAccess => {
                let (dot, name) = matched.split_at(1);
                vec![
                    (TokenCategory::Operator, dot),
                    (TokenCategory::SupportFunction, name),
                ]
            }
        }
    }
}

use Action::{Classify, Emit, MemberAccess};
use TokenCategory as C;

/// Operator glyphs, longest first so that `...` wins over `..` and `..` over `.`.
const OPERATORS: &str = r"\.\.\.|\.\.|->|=>|\|>|==|!=|<=|>=|<<|>>|//|[-+*/%&|^~<>=!:,.;]";

/// Rules for ordinary code.
pub static START_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::pattern(
            "block_comment_open",
            r"#\[",
            Emit(C::Comment),
            Some(LexerState::Comment),
        ),
        Rule::pattern("line_comment", r"#.*", Emit(C::Comment), None),
        Rule::pattern(
            "module_reference",
            r"\p{Lu}[\p{L}\p{N}_]*",
            Emit(C::EntityOther),
            None,
        ),
        Rule::pattern("member_access", r"\.[\p{L}_][\p{L}\p{N}_]*", MemberAccess, None),
        Rule::pattern("string", r#""(?:[^"\\]|\\.)*""#, Emit(C::String), None),
        Rule::pattern("char", r"'(?:\\.|[^'\\])'", Emit(C::String), None),
        Rule::pattern(
            "open_string",
            r#"""#,
            Emit(C::String),
            Some(LexerState::QuotedString),
        ),
        Rule {
            name: "number",
            recognizer: Recognizer::Number,
            action: Emit(C::Numeric),
            next_state: None,
        },
        Rule::pattern("identifier", r"[\p{L}_][\p{L}\p{N}_]*", Classify, None),
        Rule::pattern("operator", OPERATORS, Emit(C::Operator), None),
        Rule::pattern("open_paren", r"[(\[{]", Emit(C::OpenParen), None),
        Rule::pattern("close_paren", r"[)\]}]", Emit(C::CloseParen), None),
        Rule::pattern("whitespace", r"\s+", Emit(C::Text), None),
    ]
});

/// Rules inside a `#[ ... ]#` block comment.
pub static COMMENT_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::pattern(
            "block_comment_close",
            r".*?\]#",
            Emit(C::Comment),
            Some(LexerState::Start),
        ),
        Rule::pattern("block_comment_body", r".+", Emit(C::Comment), None),
    ]
});

/// Rules inside a double-quoted string left open on an earlier line.
pub static QUOTED_STRING_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::pattern("escape", r"\\.", Emit(C::String), None),
        Rule::pattern("string_body", r#"[^"\\]+"#, Emit(C::String), None),
        Rule::pattern("line_continuation", r"\\", Emit(C::String), None),
        Rule::pattern(
            "close_string",
            r#"""#,
            Emit(C::String),
            Some(LexerState::Start),
        ),
    ]
});

/// The ordered rule list for a state.
pub fn rules_for(state: LexerState) -> &'static [Rule] {
    match state {
        LexerState::Start => &START_RULES,
        LexerState::Comment => &COMMENT_RULES,
        LexerState::QuotedString => &QUOTED_STRING_RULES,
    }
}

/// First rule of `state` that matches at the start of `rest`.
pub fn first_match(state: LexerState, rest: &str) -> Option<RuleMatch<'static>> {
    rules_for(state)
        .iter()
        .find_map(|rule| rule.match_len(rest).map(|len| RuleMatch { rule, len }))
}
