
use crate::mode::Mode;
use crate::token::TokenKind;

use lazy_static::lazy_static;
use regex::Regex;

const CHECK: &str = r"[+#]";
const BOARD_RANK: &str = r"[1-8]";
const BOARD_FILE: &str = r"[a-h]";
const PIECE: &str = r"[NBRQK]";
// A pawn cannot be promoted to a king
const PROMOTION_PIECE: &str = r"[NBRQ]";
// A pawn move without promotion cannot end on the first or last rank
const PAWN_RANK: &str = r"[2-7]";

const DEFAULT: &[Mode] = &[Mode::Default];
const COMMENT: &[Mode] = &[Mode::Comment];

const BRACE_TOKENS: bool = cfg!(feature = "brace-tokens");

lazy_static! {
    /// The PGN rule table, compiled once and shared by every lexer.
    pub static ref PGN_RULES: RuleTable = RuleTable::pgn();
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Transition {
    Push(Mode),
    Pop,
}

/// A token recognition rule. A rule that matches emits a token of `kind` (if
/// any) and then applies its `transition` (if any).
#[derive(Debug, Clone)]
pub struct Rule {
    pub name: &'static str,
    pub modes: &'static [Mode],
    pub kind: Option<TokenKind>,
    pub transition: Option<Transition>,
    regex: Regex,
}

impl Rule {
    pub fn token(
        name: &'static str,
        pattern: &str,
        modes: &'static [Mode],
        kind: TokenKind,
    ) -> Result<Rule, regex::Error> {
        Ok(Rule {
            name,
            modes,
            kind: Some(kind),
            transition: None,
            regex: anchored(pattern)?,
        })
    }

    pub fn transition(
        name: &'static str,
        pattern: &str,
        modes: &'static [Mode],
        transition: Transition,
    ) -> Result<Rule, regex::Error> {
        Ok(Rule {
            name,
            modes,
            kind: None,
            transition: Some(transition),
            regex: anchored(pattern)?,
        })
    }

    pub fn with_kind(mut self, kind: Option<TokenKind>) -> Rule {
        self.kind = kind;
        self
    }

    pub fn is_active(&self, mode: Mode) -> bool {
        self.modes.contains(&mode)
    }

    /// Matched prefix of `input`, if any. Empty matches are never returned.
    pub fn matches<'t>(&self, input: &'t str) -> Option<&'t str> {
        self.regex
            .find(input)
            .map(|m| m.as_str())
            .filter(|matched| !matched.is_empty())
    }
}

fn anchored(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!("^(?:{})", pattern))
}

fn san_pattern() -> String {
    let promotion = format!(
        "x?{file}[18]={piece}",
        file = BOARD_FILE,
        piece = PROMOTION_PIECE
    );
    let pawn_move = format!(
        "(?:{file}?x)?{file}{rank}",
        file = BOARD_FILE,
        rank = PAWN_RANK
    );
    let standard_move = format!(
        "{piece}{file}?{rank}?x?{file}{rank}",
        piece = PIECE,
        file = BOARD_FILE,
        rank = BOARD_RANK
    );
    let castling = "O-O(?:-O)?";

    format!(
        "(?:{}|{}|{}|{}){}?",
        promotion, pawn_move, standard_move, castling, CHECK
    )
}

/// Ordered set of rules. At a given position the first active rule that
/// matches wins.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    pub fn new(rules: Vec<Rule>) -> Self {
        RuleTable { rules }
    }

    fn pgn() -> Self {
        // Constant patterns; `pgn_table_compiles` in the rules tests builds every one of them
        Self::try_pgn().expect("PGN rule patterns are valid")
    }

    fn try_pgn() -> Result<Self, regex::Error> {
        Ok(RuleTable::new(vec![
            // Mode transitions come first
            Rule::transition(
                "comment_open",
                r"\{",
                DEFAULT,
                Transition::Push(Mode::Comment),
            )?
            .with_kind(BRACE_TOKENS.then_some(TokenKind::LeftBrace)),
            Rule::transition("comment_close", r"\}", COMMENT, Transition::Pop)?
                .with_kind(BRACE_TOKENS.then_some(TokenKind::RightBrace)),
            Rule::token("comment", r"[^}]+", COMMENT, TokenKind::Comment)?,
            // Longest patterns first, so that moves like `e4` are not taken for tag names
            Rule::token("sag", &san_pattern(), DEFAULT, TokenKind::Sag)?,
            Rule::token(
                "nag",
                r"\$1[0-9][0-9]|\$2[0-4][0-9]|\$25[0-5]|\$[1-9][0-9]|\$[1-9]|[!?]{1,2}",
                DEFAULT,
                TokenKind::Nag,
            )?,
            Rule::token("result", r"1-0|0-1|1/2-1/2|\*", DEFAULT, TokenKind::Result)?,
            Rule::token("moveno", r"[0-9]+\.(?:\.\.)?", DEFAULT, TokenKind::Moveno)?,
            Rule::token("string", r#"".{0,253}""#, DEFAULT, TokenKind::String)?,
            Rule::token("tag", r"[A-Za-z]+", DEFAULT, TokenKind::Tag)?,
            Rule::token(
                "rest_of_line_comment",
                r";.*",
                DEFAULT,
                TokenKind::RestOfLineComment,
            )?,
            Rule::token("left_bracket", r"\[", DEFAULT, TokenKind::LeftBracket)?,
            Rule::token("right_bracket", r"\]", DEFAULT, TokenKind::RightBracket)?,
            Rule::token(
                "left_parenthesis",
                r"\(",
                DEFAULT,
                TokenKind::LeftParenthesis,
            )?,
            Rule::token(
                "right_parenthesis",
                r"\)",
                DEFAULT,
                TokenKind::RightParenthesis,
            )?,
        ]))
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn active(&self, mode: Mode) -> impl Iterator<Item = &Rule> {
        self.rules.iter().filter(move |rule| rule.is_active(mode))
    }

    /// First rule active in `mode` that matches at the start of `input`,
    /// along with the matched text.
    pub fn find<'t>(&self, mode: Mode, input: &'t str) -> Option<(&Rule, &'t str)> {
        self.active(mode)
            .find_map(|rule| rule.matches(input).map(|matched| (rule, matched)))
    }
}
