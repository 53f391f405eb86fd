use std::rc::Rc;

use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::{
    cursor::LexerCursor,
    rules::TokenRules,
    tokens::{TokenCollection, TokenKind, RESERVED_LOOKUP},
};

const SNIPPET_LENGTH: usize = 16;

/// A match-and-consume step. Returns `Ok(false)` without consuming anything
/// when it does not apply at the cursor.
pub type Recognizer = fn(&Lexer, &mut TokenCollection, &mut LexerCursor) -> Result<bool, Error>;

/// Recognizers in priority order; the first one to succeed wins.
pub const RECOGNIZERS: [(&str, Recognizer); 8] = [
    ("char", parse_char_token),
    ("exact", parse_exact_token),
    ("pattern", parse_regex_token),
    ("identifier", parse_identifier),
    ("string", parse_string_literal),
    ("hex", parse_hex_literal),
    ("line comment", parse_sl_comment),
    ("block comment", parse_ml_comment),
];

#[derive(Debug, Clone)]
pub struct Lexer {
    rules: TokenRules,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(file: Option<String>) -> Lexer {
        Lexer::with_rules(TokenRules::default(), file)
    }

    pub fn with_rules(rules: TokenRules, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            rules,
            file: file_name,
        }
    }

    pub fn file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }

    fn position(&self, cursor: &LexerCursor) -> Position {
        Position::new(cursor.line, cursor.column, Rc::clone(&self.file))
    }

    /// Tokenizes the whole input. Any lexical error aborts the pass and no
    /// partial collection is returned.
    #[tracing::instrument(level = "debug", skip_all, fields(file = %self.file))]
    pub fn tokenize(&self, input: &str) -> Result<TokenCollection, Error> {
        let mut tokens = TokenCollection::new();
        let mut cursor = LexerCursor::new(input);

        loop {
            cursor.skip_formatting();

            if cursor.is_eof() {
                break;
            }

            let mut matched = false;

            for (name, recognizer) in RECOGNIZERS.iter() {
                if recognizer(self, &mut tokens, &mut cursor)? {
                    trace!(recognizer = *name, line = cursor.line, column = cursor.column, "matched");
                    matched = true;
                    break;
                }
            }

            if !matched {
                return Err(Error::new(
                    ErrorImpl::UnknownToken {
                        snippet: cursor.snippet(SNIPPET_LENGTH),
                    },
                    self.position(&cursor),
                ));
            }
        }

        debug!(count = tokens.len(), "tokenized");
        Ok(tokens)
    }
}

pub fn tokenize(source: &str, file: Option<String>) -> Result<TokenCollection, Error> {
    Lexer::new(file).tokenize(source)
}

/// Fixed single character tokens (`(`, `;`, `<` ...).
pub fn parse_char_token(
    lexer: &Lexer,
    tokens: &mut TokenCollection,
    cursor: &mut LexerCursor,
) -> Result<bool, Error> {
    let Some(current) = cursor.peek() else {
        return Ok(false);
    };
    let next = cursor.peek_n(1);

    match lexer.rules.chars.iter().find(|rule| rule.accepts(current, next)) {
        Some(rule) => {
            tokens.push(current.to_string(), rule.kind, cursor.line, cursor.column);
            cursor.skip(1);
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Exact multi-character tokens (`==`, `->` ...).
pub fn parse_exact_token(
    lexer: &Lexer,
    tokens: &mut TokenCollection,
    cursor: &mut LexerCursor,
) -> Result<bool, Error> {
    match lexer.rules.exact.iter().find(|rule| cursor.begins_with(rule.literal)) {
        Some(rule) => {
            tokens.push(rule.literal, rule.kind, cursor.line, cursor.column);
            cursor.skip(rule.literal.chars().count());
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Tokens described by an anchored regular expression.
pub fn parse_regex_token(
    lexer: &Lexer,
    tokens: &mut TokenCollection,
    cursor: &mut LexerCursor,
) -> Result<bool, Error> {
    let remaining = cursor.remainder();

    for rule in lexer.rules.patterns.iter() {
        if let Some(len) = rule.match_len(remaining) {
            let matched = &remaining[..len];
            tokens.push(matched, rule.kind, cursor.line, cursor.column);
            cursor.skip(matched.chars().count());
            return Ok(true);
        }
    }

    Ok(false)
}

/// Identifiers, keywords and the boolean literals.
pub fn parse_identifier(
    _lexer: &Lexer,
    tokens: &mut TokenCollection,
    cursor: &mut LexerCursor,
) -> Result<bool, Error> {
    if !cursor
        .peek()
        .is_some_and(|ch| ch.is_ascii_alphabetic() || ch == '_')
    {
        return Ok(false);
    }

    let remaining = cursor.remainder();
    let len = remaining
        .find(|ch: char| !(ch.is_ascii_alphanumeric() || ch == '_'))
        .unwrap_or(remaining.len());
    let value = &remaining[..len];

    let kind = RESERVED_LOOKUP
        .get(value)
        .copied()
        .unwrap_or(TokenKind::Identifier);

    tokens.push(value, kind, cursor.line, cursor.column);
    cursor.skip(value.chars().count());
    Ok(true)
}

/// Quote-delimited string literals. The token keeps the raw text, quotes and
/// escapes included.
pub fn parse_string_literal(
    lexer: &Lexer,
    tokens: &mut TokenCollection,
    cursor: &mut LexerCursor,
) -> Result<bool, Error> {
    let Some(quote) = cursor.peek().filter(|_| cursor.is_quote()) else {
        return Ok(false);
    };

    let remaining = cursor.remainder();
    let mut escaped = false;
    let mut end = None;

    for (index, ch) in remaining.char_indices().skip(1) {
        if escaped {
            escaped = false;
        } else if ch == '\\' {
            escaped = true;
        } else if ch == quote {
            end = Some(index + ch.len_utf8());
            break;
        }
    }

    let Some(end) = end else {
        return Err(Error::new(
            ErrorImpl::UnterminatedString {
                snippet: cursor.snippet(SNIPPET_LENGTH),
            },
            lexer.position(cursor),
        ));
    };

    let value = &remaining[..end];
    tokens.push(value, TokenKind::StringLiteral, cursor.line, cursor.column);
    cursor.skip(value.chars().count());
    Ok(true)
}

/// `0x` prefixed literals, emitted as integer literals with their raw text.
pub fn parse_hex_literal(
    _lexer: &Lexer,
    tokens: &mut TokenCollection,
    cursor: &mut LexerCursor,
) -> Result<bool, Error> {
    if !(cursor.begins_with("0x") || cursor.begins_with("0X")) {
        return Ok(false);
    }

    let remaining = cursor.remainder();
    let digits = remaining[2..]
        .chars()
        .take_while(|ch| ch.is_ascii_hexdigit())
        .count();

    if digits == 0 {
        return Ok(false);
    }

    let value = &remaining[..2 + digits];
    tokens.push(value, TokenKind::IntegerLiteral, cursor.line, cursor.column);
    cursor.skip(value.len());
    Ok(true)
}

/// `//` comments, discarded up to the next line break.
pub fn parse_sl_comment(
    _lexer: &Lexer,
    _tokens: &mut TokenCollection,
    cursor: &mut LexerCursor,
) -> Result<bool, Error> {
    if !cursor.begins_with("//") {
        return Ok(false);
    }

    cursor.skip_until('\n');
    Ok(true)
}

/// `/* */` comments, discarded entirely.
pub fn parse_ml_comment(
    lexer: &Lexer,
    _tokens: &mut TokenCollection,
    cursor: &mut LexerCursor,
) -> Result<bool, Error> {
    if !cursor.begins_with("/*") {
        return Ok(false);
    }

    let remaining = cursor.remainder();

    match remaining[2..].find("*/") {
        Some(close) => {
            let comment = &remaining[..2 + close + 2];
            cursor.skip(comment.chars().count());
            Ok(true)
        }
        None => Err(Error::new(
            ErrorImpl::UnterminatedComment {
                snippet: cursor.snippet(SNIPPET_LENGTH),
            },
            lexer.position(cursor),
        )),
    }
}
