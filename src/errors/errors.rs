use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A hard lexical failure. Raised, never collected: no token can be produced at
/// the failing position, so the whole tokenization pass stops.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn line(&self) -> usize {
        self.position.line
    }

    pub fn column(&self) -> usize {
        self.position.column
    }

    pub fn get_snippet(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnknownToken { snippet }
            | ErrorImpl::UnterminatedString { snippet }
            | ErrorImpl::UnterminatedComment { snippet } => snippet,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnknownToken { .. } => "UnknownToken",
            ErrorImpl::UnterminatedString { .. } => "UnterminatedString",
            ErrorImpl::UnterminatedComment { .. } => "UnterminatedComment",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnknownToken { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedString { snippet } => ErrorTip::Suggestion(format!(
                "String starting with `{}` is missing its closing quote",
                snippet
            )),
            ErrorImpl::UnterminatedComment { .. } => {
                ErrorTip::Suggestion(String::from("Block comment is missing its closing `*/`"))
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at line {} offset {} near: {}",
            self.internal_error,
            self.position.line,
            self.position.column,
            self.get_snippet()
        )
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("Unknown token")]
    UnknownToken { snippet: String },
    #[error("Unterminated string")]
    UnterminatedString { snippet: String },
    #[error("Unterminated comment")]
    UnterminatedComment { snippet: String },
}
