//! Declarative recognizer configuration.
//!
//! The tables here are the only place where the surface syntax is defined. The
//! driving loop in `lexer.rs` never looks at concrete characters.

use lazy_static::lazy_static;
use regex::Regex;

use crate::{MK_CHAR, MK_EXACT, MK_PATTERN};

use super::tokens::TokenKind;

lazy_static! {
    pub static ref DEFAULT_RULES: TokenRules =
        TokenRules::language().expect("built-in token patterns must compile");
}

/// A fixed single character token.
#[derive(Debug, Clone, Copy)]
pub struct CharRule {
    pub ch: char,
    pub kind: TokenKind,
    /// Characters that must not follow `ch` for this rule to apply
    pub not_before: &'static str,
}

impl CharRule {
    pub fn accepts(&self, current: char, next: Option<char>) -> bool {
        current == self.ch && !next.is_some_and(|next| self.not_before.contains(next))
    }
}

/// An exact multi-character token such as `==`.
#[derive(Debug, Clone, Copy)]
pub struct ExactRule {
    pub literal: &'static str,
    pub kind: TokenKind,
}

/// A token described by a regular expression, always anchored at the cursor.
#[derive(Debug, Clone)]
pub struct PatternRule {
    pub regex: Regex,
    pub kind: TokenKind,
}

impl PatternRule {
    pub fn new(pattern: &str, kind: TokenKind) -> Result<Self, regex::Error> {
        Ok(PatternRule {
            regex: Regex::new(&format!("^(?:{})", pattern))?,
            kind,
        })
    }

    /// Length in bytes of the match at the start of `input`, if any.
    pub fn match_len(&self, input: &str) -> Option<usize> {
        self.regex
            .find(input)
            .map(|found| found.end())
            .filter(|len| *len > 0)
    }
}

/// The ordered rule tables. Within a table the first matching entry wins.
#[derive(Debug, Clone)]
pub struct TokenRules {
    pub chars: Vec<CharRule>,
    pub exact: Vec<ExactRule>,
    pub patterns: Vec<PatternRule>,
}

impl TokenRules {
    pub fn empty() -> Self {
        TokenRules {
            chars: vec![],
            exact: vec![],
            patterns: vec![],
        }
    }

    /// The rule set of the language.
    pub fn language() -> Result<Self, regex::Error> {
        Ok(TokenRules {
            chars: vec![
                MK_CHAR!('(', TokenKind::OpenParen),
                MK_CHAR!(')', TokenKind::CloseParen),
                MK_CHAR!('{', TokenKind::OpenCurly),
                MK_CHAR!('}', TokenKind::CloseCurly),
                MK_CHAR!('[', TokenKind::OpenBracket),
                MK_CHAR!(']', TokenKind::CloseBracket),
                MK_CHAR!(',', TokenKind::Comma),
                MK_CHAR!(';', TokenKind::Semicolon),
                MK_CHAR!(':', TokenKind::Colon),
                MK_CHAR!('.', TokenKind::Dot),
                MK_CHAR!('?', TokenKind::Question),
                MK_CHAR!('~', TokenKind::Tilde),
                MK_CHAR!('%', TokenKind::Percent),
                MK_CHAR!('^', TokenKind::Caret),
                MK_CHAR!('*', TokenKind::Star),
                MK_CHAR!('=', TokenKind::Assignment, "="),
                MK_CHAR!('!', TokenKind::Not, "="),
                MK_CHAR!('<', TokenKind::Less, "="),
                MK_CHAR!('>', TokenKind::Greater, "="),
                MK_CHAR!('+', TokenKind::Plus, "+="),
                MK_CHAR!('-', TokenKind::Dash, "-=>"),
                MK_CHAR!('&', TokenKind::Ampersand, "&"),
                MK_CHAR!('|', TokenKind::Pipe, "|"),
                // leave `//` and `/*` to the comment recognizers
                MK_CHAR!('/', TokenKind::Slash, "/*"),
            ],
            exact: vec![
                MK_EXACT!("==", TokenKind::Equals),
                MK_EXACT!("!=", TokenKind::NotEquals),
                MK_EXACT!("<=", TokenKind::LessEquals),
                MK_EXACT!(">=", TokenKind::GreaterEquals),
                MK_EXACT!("&&", TokenKind::And),
                MK_EXACT!("||", TokenKind::Or),
                MK_EXACT!("->", TokenKind::Arrow),
                MK_EXACT!("++", TokenKind::PlusPlus),
                MK_EXACT!("--", TokenKind::MinusMinus),
                MK_EXACT!("+=", TokenKind::PlusEquals),
                MK_EXACT!("-=", TokenKind::MinusEquals),
            ],
            patterns: vec![
                MK_PATTERN!(r"[0-9]+\.[0-9]+f?\b", TokenKind::FloatingLiteral)?,
                MK_PATTERN!(r"[0-9]+\b", TokenKind::IntegerLiteral)?,
            ],
        })
    }
}

impl Default for TokenRules {
    fn default() -> Self {
        DEFAULT_RULES.clone()
    }
}
