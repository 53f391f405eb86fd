use crate::lexer::tokens::{Token, TokenCollection, TokenKind};

/// A saved cursor position, see `TokenCursor::snapshot`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot(usize);

/// Read cursor over a borrowed token collection.
#[derive(Debug, Clone)]
pub struct TokenCursor<'t> {
    tokens: &'t TokenCollection,
    pos: usize,
}

impl<'t> TokenCursor<'t> {
    pub fn new(tokens: &'t TokenCollection) -> Self {
        TokenCursor { tokens, pos: 0 }
    }

    pub fn current(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos)
    }

    pub fn peek(&self, offset: usize) -> Option<&'t Token> {
        self.tokens.get(self.pos + offset)
    }

    pub fn skip(&mut self) {
        if !self.is_done() {
            self.pos += 1;
        }
    }

    pub fn is_type(&self, kind: TokenKind) -> bool {
        self.current().is_some_and(|token| token.kind == kind)
    }

    pub fn is_done(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// The last token of the collection, used to locate end-of-input issues.
    pub fn last(&self) -> Option<&'t Token> {
        self.tokens.as_slice().last()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot(self.pos)
    }

    pub fn restore(&mut self, snapshot: Snapshot) {
        self.pos = snapshot.0;
    }

    /// Tokens between two snapshots, in order.
    pub fn slice(&self, from: Snapshot, to: Snapshot) -> &'t [Token] {
        let tokens = self.tokens.as_slice();
        let end = to.0.min(tokens.len());
        let start = from.0.min(end);

        &tokens[start..end]
    }
}
