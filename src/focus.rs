//! Main module for focus library functionality

pub mod config;
pub mod document;
pub mod error;
pub mod indentation;
pub mod lexing;
pub mod session;
pub mod testing;
pub mod token;

pub use document::Document;
pub use error::FocusError;
pub use lexing::{tokenize, tokenize_line};
pub use session::EditSession;
pub use token::{LexerState, LineTokens, Token, TokenCategory};
