use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::{ast::AstContext, types::ValueType},
    errors::issues::{IssueCollector, IssueKind},
    lexer::tokens::{Token, TokenCollection},
    Position,
};

use super::cursor::TokenCursor;

/// Variables visible to the expression being parsed.
#[derive(Debug, Default)]
pub struct Scope {
    variable_lookup: HashMap<String, ValueType>,
}

impl Scope {
    pub fn new() -> Self {
        Scope::default()
    }

    /// Declares `name`, replacing any earlier declaration.
    pub fn declare_variable(&mut self, name: impl Into<String>, var_type: ValueType) {
        self.variable_lookup.insert(name.into(), var_type);
    }

    pub fn find_vardecl_by_name(&self, name: &str) -> Option<ValueType> {
        self.variable_lookup.get(name).copied()
    }
}

/// Everything a single sequential parsing pass works on.
pub struct Payload<'t> {
    pub cursor: TokenCursor<'t>,
    pub context: AstContext<'t>,
    pub collector: IssueCollector,
    pub scope: Scope,
    file: Rc<String>,
}

impl<'t> Payload<'t> {
    pub fn new(tokens: &'t TokenCollection, file: Rc<String>) -> Self {
        Payload {
            cursor: TokenCursor::new(tokens),
            context: AstContext::new(),
            collector: IssueCollector::new(),
            scope: Scope::new(),
            file,
        }
    }

    pub fn file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }

    pub fn code_ref(&self, token: &Token) -> Position {
        Position::new(token.line, token.column, Rc::clone(&self.file))
    }

    /// Collects an issue located at `token`.
    pub fn collect_issue(&mut self, kind: IssueKind, token: &Token, message: String) {
        let location = self.code_ref(token);
        self.collector.collect_issue(kind, location, message);
    }
}
