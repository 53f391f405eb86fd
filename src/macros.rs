//! Utility macros for the lexer rule tables.
//!
//! - `MK_CHAR!` - Creates a single character rule
//! - `MK_EXACT!` - Creates an exact multi-character rule
//! - `MK_PATTERN!` - Creates an anchored regex rule
//!
//! These keep the declarative tables in `lexer::rules` down to one line per token.

/// Creates a `CharRule`.
///
/// The optional third argument lists characters that, when they follow the
/// character, make the rule decline so a longer token can match instead.
///
/// # Example
///
/// ```ignore
/// MK_CHAR!('=', TokenKind::Assignment, "=")
/// ```
#[macro_export]
macro_rules! MK_CHAR {
    ($ch:literal, $kind:expr) => {
        $crate::lexer::rules::CharRule {
            ch: $ch,
            kind: $kind,
            not_before: "",
        }
    };
    ($ch:literal, $kind:expr, $not_before:literal) => {
        $crate::lexer::rules::CharRule {
            ch: $ch,
            kind: $kind,
            not_before: $not_before,
        }
    };
}

/// Creates an `ExactRule`.
///
/// # Example
///
/// ```ignore
/// MK_EXACT!("==", TokenKind::Equals)
/// ```
#[macro_export]
macro_rules! MK_EXACT {
    ($literal:literal, $kind:expr) => {
        $crate::lexer::rules::ExactRule {
            literal: $literal,
            kind: $kind,
        }
    };
}

/// Creates a `PatternRule`, evaluating to `Result<PatternRule, regex::Error>`.
///
/// # Example
///
/// ```ignore
/// MK_PATTERN!(r"[0-9]+\b", TokenKind::IntegerLiteral)?
/// ```
#[macro_export]
macro_rules! MK_PATTERN {
    ($pattern:expr, $kind:expr) => {
        $crate::lexer::rules::PatternRule::new($pattern, $kind)
    };
}
