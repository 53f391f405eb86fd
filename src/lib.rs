#![allow(clippy::module_inception)]

use std::{fmt::Display, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A 1-based line/column location inside a named source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub file: Rc<String>,
}

impl Position {
    pub fn new(line: usize, column: usize, file: Rc<String>) -> Self {
        Position { line, column, file }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// Returns the text of the given 1-based line, without its line break.
pub fn get_line_at_position(source: &str, line: usize) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth(line - 1)
        .map(|text| text.strip_suffix('\r').unwrap_or(text))
}

/// Renders a caret diagram pointing at `position` inside `source`.
///
/// ```text
///    |
/// 20 | let a = $;
///    | --------^
/// ```
pub fn render_location(source: &str, position: &Position) -> String {
    let line_str = position.line.to_string();
    let padding = line_str.len() + 2;
    let mut out = format!("-> {}\n{:>padding$}\n", position, "|");

    if let Some(line_text) = get_line_at_position(source, position.line) {
        let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
        out.push_str(&format!("{} | {}\n", line_str, line_text_removed.trim_end()));

        let arrows = position.column.saturating_sub(removed_whitespace).max(1);
        out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    }

    out
}

pub fn display_error(error: &Error, source: &str) -> String {
    let mut out = if let ErrorTip::None = error.get_tip() {
        format!("Error: {}\n", error.get_error_name())
    } else {
        format!("Error: {} ({})\n", error.get_error_name(), error.get_tip())
    };

    out.push_str(&render_location(source, error.get_position()));
    out
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .count();

    (&string[start..], start)
}
