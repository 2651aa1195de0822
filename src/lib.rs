//! # focus
//!
//! Editor-assist core for the Focus language: a line-oriented tokenizer that drives syntax
//! highlighting, plus the indentation heuristics (next-line indent, closing-brace outdent)
//! an editor runs on every keystroke.
//!
//! File Layout
//!
//! src/focus
//!   ├── token          Token, category and lexer state types
//!   ├── lexing         Rule tables, the tokenizer state machine and the per-buffer line cache
//!   ├── indentation    Indentation predictor, bracket index and outdent engine
//!   ├── document       Line buffer that owns the text and its cached tokens
//!   ├── session        Keystroke-level driver tying the pieces together
//!   ├── config         Layered configuration (indent unit, CLI defaults)
//!   ├── error          Errors of the fallible edges: config, file IO, JSON output
//!   └── testing        Token assertions, rendering and sample sources for tests
//!
//! The interpreter for the language is not part of this crate: it consumes raw source text
//! on its own. Nothing here builds a syntax tree.
//!
//! For test helpers, see the [testing module](focus::testing).

pub mod focus;
