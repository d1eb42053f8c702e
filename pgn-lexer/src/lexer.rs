
use crate::error::LexError;
use crate::mode::{Mode, ModeStack};
use crate::rules::{Rule, RuleTable, Transition, PGN_RULES};
use crate::token::{Position, Token, TokenKind};

use log::{debug, trace, warn};

/// Output of a complete lexer run.
#[derive(Debug, Default)]
pub struct Tokenized {
    pub tokens: Vec<Token>,
    /// Recoverable errors, in the order they were found
    pub diagnostics: Vec<LexError>,
}

pub struct Lexer<'a> {
    input: &'a str,
    rules: &'a RuleTable,
    modes: ModeStack,
    offset: usize,
    line: usize,
    tokens: Vec<Token>,
    diagnostics: Vec<LexError>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Lexer<'a> {
        Lexer::with_rules(input, &PGN_RULES)
    }

    pub fn with_rules(input: &'a str, rules: &'a RuleTable) -> Lexer<'a> {
        Lexer {
            input,
            rules,
            modes: ModeStack::new(),
            offset: 0,
            line: 1,
            tokens: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Scans the whole input. Stops early only on a fatal error.
    pub fn run(mut self) -> Result<Tokenized, LexError> {
        while !self.at_eof() {
            self.step()?;
        }

        if self.modes.depth() > 0 {
            debug!(
                "Input ended in {} mode ({})",
                self.modes.current(),
                self.position()
            );
        }

        Ok(Tokenized {
            tokens: self.tokens,
            diagnostics: self.diagnostics,
        })
    }

    fn at_eof(&self) -> bool {
        self.offset >= self.input.len()
    }

    fn remainder(&self) -> &'a str {
        &self.input[self.offset..]
    }

    fn position(&self) -> Position {
        Position {
            offset: self.offset,
            line: self.line,
        }
    }

    fn advance(&mut self, consumed: &str) {
        self.line += consumed.bytes().filter(|b| *b == b'\n').count();
        self.offset += consumed.len();
    }

    fn step(&mut self) -> Result<(), LexError> {
        let mode = self.modes.current();
        let remainder = self.remainder();
        let Some(next) = remainder.chars().next() else {
            return Ok(());
        };

        if mode.ignores(next) {
            self.advance(&remainder[..next.len_utf8()]);
            return Ok(());
        }

        let rules = self.rules;
        match rules.find(mode, remainder) {
            Some((rule, matched)) => self.apply(rule, matched),
            None => self.illegal(mode, next),
        }
    }

    fn apply(&mut self, rule: &Rule, matched: &str) -> Result<(), LexError> {
        let position = self.position();

        if let Some(kind) = rule.kind {
            self.emit(kind, matched, position);
        }

        match rule.transition {
            Some(Transition::Push(mode)) => self.modes.push(mode),
            Some(Transition::Pop) => {
                self.modes
                    .pop()
                    .ok_or(LexError::ModeStackUnderflow { position })?;
            }
            None => (),
        }

        self.advance(matched);
        Ok(())
    }

    fn emit(&mut self, kind: TokenKind, matched: &str, position: Position) {
        let value = match kind {
            TokenKind::Comment => matched.replace('\n', " "),
            _ => matched.to_string(),
        };
        trace!("{} {:?} ({})", kind, value, position);

        self.tokens.push(Token {
            kind,
            value,
            position,
        });
    }

    fn illegal(&mut self, mode: Mode, character: char) -> Result<(), LexError> {
        let position = self.position();

        match mode {
            Mode::Default => {
                let error = LexError::IllegalCharacter {
                    character,
                    position,
                };
                warn!("{}", error);
                self.diagnostics.push(error);

                let skipped = &self.remainder()[..character.len_utf8()];
                self.advance(skipped);
                Ok(())
            }
            Mode::Comment => Err(LexError::IllegalCommentCharacter {
                character,
                position,
            }),
        }
    }
}

/// Tokenizes a complete PGN text.
///
/// Unknown characters outside comments are logged and skipped; use
/// [`Lexer::run`] to get them back as diagnostics.
pub fn tokenize(text: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(text).run().map(|tokenized| tokenized.tokens)
}
