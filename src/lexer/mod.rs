//! Lexical analysis module.
//!
//! This module contains the tokenizer that converts source text into a
//! `TokenCollection`. It handles:
//!
//! - Line/column bookkeeping through `LexerCursor`
//! - A declarative, ordered rule table (`rules`) for fixed, exact and regex tokens
//! - Specialized recognizers for identifiers, strings, hex literals and comments
//! - Hard errors for unknown tokens and unterminated strings or comments

pub mod cursor;
pub mod lexer;
pub mod rules;
pub mod tokens;
