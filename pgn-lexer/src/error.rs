use crate::token::Position;

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum LexError {
    /// No rule matches in default mode. The character is skipped and lexing
    /// goes on.
    #[error("Illegal character '{character}' ({position})")]
    IllegalCharacter { character: char, position: Position },

    /// No rule matches inside a comment. Lexing stops.
    #[error("Illegal character '{character}' inside comment ({position})")]
    IllegalCommentCharacter { character: char, position: Position },

    #[error("Mode stack underflow ({position})")]
    ModeStackUnderflow { position: Position },
}

impl LexError {
    pub fn is_fatal(&self) -> bool {
        !matches!(self, LexError::IllegalCharacter { .. })
    }

    pub fn position(&self) -> Position {
        match self {
            LexError::IllegalCharacter { position, .. }
            | LexError::IllegalCommentCharacter { position, .. }
            | LexError::ModeStackUnderflow { position } => *position,
        }
    }
}
