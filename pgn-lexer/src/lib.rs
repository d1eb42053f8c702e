//! Lexical analysis of Portable Game Notation (PGN) text.
//!
//! The lexer turns raw PGN into a flat, ordered list of [`Token`]s. It is
//! tolerant of the informal spellings found in real-world files (`!?` style
//! annotations, newlines inside comments, etc.) and does not validate moves or
//! tag pairs.

pub mod error;
pub mod lexer;
pub mod mode;
pub mod rules;
pub mod token;

pub use self::error::LexError;
pub use self::lexer::{tokenize, Lexer, Tokenized};
pub use self::mode::{Mode, ModeStack};
pub use self::token::{Position, Token, TokenKind};
