use serde::Serialize;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    String,
    LeftBracket,
    RightBracket,
    /// Start of a recursive annotation variation
    LeftParenthesis,
    /// End of a recursive annotation variation
    RightParenthesis,
    /// Only emitted with the `brace-tokens` feature
    LeftBrace,
    /// Only emitted with the `brace-tokens` feature
    RightBrace,
    RestOfLineComment,
    /// Numeric annotation glyph, either `$n` or a `!`/`?` combination
    Nag,
    Tag,
    Moveno,
    /// Standard algebraic glyph, a single move
    Sag,
    Comment,
    Result,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::String => "STRING",
            TokenKind::LeftBracket => "LEFT_BRACKET",
            TokenKind::RightBracket => "RIGHT_BRACKET",
            TokenKind::LeftParenthesis => "LEFT_PARENTHESIS",
            TokenKind::RightParenthesis => "RIGHT_PARENTHESIS",
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::RightBrace => "RIGHT_BRACE",
            TokenKind::RestOfLineComment => "REST_OF_LINE_COMMENT",
            TokenKind::Nag => "NAG",
            TokenKind::Tag => "TAG",
            TokenKind::Moveno => "MOVENO",
            TokenKind::Sag => "SAG",
            TokenKind::Comment => "COMMENT",
            TokenKind::Result => "RESULT",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Location of the first byte of a token in the source text.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    /// Byte offset from the start of the text
    pub offset: usize,
    /// 1-based line number
    pub line: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "line {}, offset {}", self.line, self.offset)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub position: Position,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.value)
    }
}
