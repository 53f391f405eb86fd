//! Single-pass cursor over the source text.
//!
//! The cursor owns all line/column bookkeeping. Lines and columns are 1-based
//! and counted in characters, not bytes.

const LINE_BREAK: char = '\n';
const SPACE: char = ' ';
const TAB: char = '\t';

#[derive(Debug, Clone)]
pub struct LexerCursor<'a> {
    input: &'a str,
    /// Byte offset of the next unread character
    pos: usize,
    pub line: usize,
    pub column: usize,
}

impl<'a> LexerCursor<'a> {
    pub fn new(input: &'a str) -> Self {
        LexerCursor {
            input,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// The unread part of the input.
    pub fn remainder(&self) -> &'a str {
        &self.input[self.pos..]
    }

    pub fn peek(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    /// Looks `n` characters past the current one without consuming anything.
    pub fn peek_n(&self, n: usize) -> Option<char> {
        self.remainder().chars().nth(n)
    }

    /// Consumes `n` characters, stopping early at end of input.
    pub fn skip(&mut self, n: usize) {
        for _ in 0..n {
            let Some(ch) = self.peek() else {
                return;
            };

            if ch == LINE_BREAK {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }

            self.pos += ch.len_utf8();
        }
    }

    pub fn skip_formatting(&mut self) {
        while self.is_formatting() {
            self.skip(1);
        }
    }

    /// Consumes characters up to, but not including, the next `c`.
    pub fn skip_until(&mut self, c: char) {
        while self.peek().is_some_and(|ch| ch != c) {
            self.skip(1);
        }
    }

    pub fn begins_with(&self, s: &str) -> bool {
        self.remainder().starts_with(s)
    }

    pub fn is_quote(&self) -> bool {
        matches!(self.peek(), Some('"') | Some('\''))
    }

    pub fn is_formatting(&self) -> bool {
        matches!(self.peek(), Some(SPACE) | Some(TAB) | Some(LINE_BREAK) | Some('\r'))
    }

    /// Up to `max` upcoming characters, cut at the first line break.
    pub fn snippet(&self, max: usize) -> String {
        self.remainder()
            .chars()
            .take_while(|ch| *ch != LINE_BREAK)
            .take(max)
            .collect()
    }
}
