use std::fmt::Display;

use super::{
    expressions::{LiteralExpr, VarRefExpr},
    types::ValueType,
};

/// Expression nodes produced by the literal front end.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprNode<'t> {
    Literal(LiteralExpr<'t>),
    VarRef(VarRefExpr<'t>),
}

impl ExprNode<'_> {
    pub fn result_type(&self) -> ValueType {
        match self {
            ExprNode::Literal(literal) => literal.result_type(),
            ExprNode::VarRef(var_ref) => var_ref.var_type,
        }
    }

    pub fn as_literal(&self) -> Option<&LiteralExpr<'_>> {
        match self {
            ExprNode::Literal(literal) => Some(literal),
            ExprNode::VarRef(_) => None,
        }
    }

    pub fn node_description(&self) -> String {
        match self {
            ExprNode::Literal(literal) => literal.node_description(),
            ExprNode::VarRef(var_ref) => var_ref.node_description(),
        }
    }
}

impl Display for ExprNode<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.node_description())
    }
}

/// A stable handle into an `AstContext`.
///
/// `Void` marks a sub-expression whose typing failed and was already
/// diagnosed; consumers must not report anything further about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRef {
    Node(usize),
    Void,
}

impl NodeRef {
    pub fn void() -> Self {
        NodeRef::Void
    }

    pub fn is_void(&self) -> bool {
        matches!(self, NodeRef::Void)
    }
}

/// Arena owning every node of a compilation pass. Nodes are never mutated
/// after `emplace_node`.
#[derive(Debug, Default)]
pub struct AstContext<'t> {
    nodes: Vec<ExprNode<'t>>,
}

impl<'t> AstContext<'t> {
    pub fn new() -> Self {
        AstContext { nodes: vec![] }
    }

    pub fn emplace_node(&mut self, node: ExprNode<'t>) -> NodeRef {
        self.nodes.push(node);
        NodeRef::Node(self.nodes.len() - 1)
    }

    pub fn get(&self, node: NodeRef) -> Option<&ExprNode<'t>> {
        match node {
            NodeRef::Node(index) => self.nodes.get(index),
            NodeRef::Void => None,
        }
    }

    /// Shorthand for `get` followed by `as_literal`.
    pub fn literal(&self, node: NodeRef) -> Option<&LiteralExpr<'t>> {
        match self.get(node)? {
            ExprNode::Literal(literal) => Some(literal),
            ExprNode::VarRef(_) => None,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
