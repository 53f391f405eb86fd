use tracing::debug;

use crate::{
    ast::{
        ast::{ExprNode, NodeRef},
        expressions::VarRefExpr,
        types::ValueType,
    },
    errors::issues::IssueKind,
    lexer::tokens::TokenKind,
    Position,
};

use super::{
    literal::{parse_literal_bool, parse_literal_float, parse_literal_int},
    payload::Payload,
};

/// Whether the current token can start or continue a primary expression.
pub fn is_expr_token(payload: &Payload) -> bool {
    payload.cursor.current().is_some_and(|token| {
        token.is_one_of_many(&[
            TokenKind::FloatingLiteral,
            TokenKind::IntegerLiteral,
            TokenKind::BoolLiteral,
            TokenKind::Identifier,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
        ])
    })
}

/// Parses the primary expression under the cursor. `expected_type` is the only
/// context the literal coercion ever sees.
pub fn parse_expr_ref(payload: &mut Payload, expected_type: Option<ValueType>) -> NodeRef {
    let Some(current_token) = payload.cursor.current() else {
        return unexpected_end_of_input(payload);
    };

    match current_token.kind {
        TokenKind::FloatingLiteral => parse_literal_float(payload, expected_type),
        TokenKind::IntegerLiteral => parse_literal_int(payload, expected_type),
        TokenKind::BoolLiteral => parse_literal_bool(payload),
        TokenKind::Identifier => {
            payload.cursor.skip();

            let Some(var_type) = payload.scope.find_vardecl_by_name(&current_token.value) else {
                payload.collect_issue(
                    IssueKind::UnknownVariable,
                    current_token,
                    format!("The variable '{}' is not declared.", current_token.value),
                );
                return NodeRef::void();
            };

            payload.context.emplace_node(ExprNode::VarRef(VarRefExpr {
                token: current_token,
                var_type,
            }))
        }
        _ => {
            payload.cursor.skip();
            payload.collect_issue(
                IssueKind::UnexpectedToken,
                current_token,
                format!(
                    "Unexpected {} '{}', expected an expression.",
                    current_token.kind, current_token.value
                ),
            );

            NodeRef::void()
        }
    }
}

/// Collects an issue for a missing expression at the end of the input.
pub fn unexpected_end_of_input(payload: &mut Payload) -> NodeRef {
    debug!("expression expected at end of input");

    let location = match payload.cursor.last() {
        Some(token) => {
            let mut location = payload.code_ref(token);
            location.column += token.value.chars().count();
            location
        }
        None => Position::new(1, 1, payload.file()),
    };

    payload.collector.collect_issue(
        IssueKind::UnexpectedToken,
        location,
        String::from("Unexpected end of input, expected an expression."),
    );

    NodeRef::void()
}
