//! Token types shared by the tokenizer, the indentation engine and the editor.
//!
//!     Tokens exist only to be painted and to feed the indentation heuristics. There is no
//!     parser downstream, so a token carries exactly what a renderer needs: a category (which
//!     maps to a style name), the matched text, and the columns it covers.
//!
//! Token Layers
//!
//!     Core Tokens:
//!         One token per lexeme, produced by the rule table of the active lexer state. See
//!         [core](core) for the token struct and [category](category) for the closed set of
//!         categories. Whitespace is a token too (category `text`), so a line's tokens always
//!         cover it end to end.
//!
//!     Line Tokens:
//!         The tokens of a single line plus the lexer state the line ends in. This is the unit
//!         the line cache stores and the unit that crosses the editor boundary. See [line](line).
//!
//!     Lexer State:
//!         The only state carried from one line to the next. A line that opens a block comment
//!         or leaves a double-quoted string unterminated hands `Comment` or `QuotedString` to
//!         the following line. See [state](state).

pub mod category;
pub mod core;
pub mod line;
pub mod state;

pub use category::{TokenCategory, TOKEN_CATEGORIES};
pub use self::core::Token;
pub use line::LineTokens;
pub use state::LexerState;
