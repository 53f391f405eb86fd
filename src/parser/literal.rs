//! Literal coercion.
//!
//! Turns the literal token under the cursor, plus the type the surrounding
//! expression expects (if any), into a typed literal node. Values that do not
//! fit the expected type are reported through the issue collector and yield the
//! void node, so parsing of sibling expressions carries on.

use tracing::debug;

use crate::{
    ast::{
        ast::{ExprNode, NodeRef},
        expressions::{parse_float_text, parse_integer_text, LiteralExpr, LiteralText},
        integer::get_integer_size,
        types::{PrimitiveType, ValueType},
    },
    errors::issues::IssueKind,
    lexer::tokens::Token,
};

use super::payload::Payload;

/// Checks `literal` against the bounds of the integer type `ty`, collecting an
/// overflow or underflow issue when it does not fit.
pub fn can_hold_literal_int(
    payload: &mut Payload,
    ty: ValueType,
    literal: &str,
    literal_token: &Token,
) -> bool {
    let Some(value) = parse_integer_text(literal) else {
        payload.collect_issue(
            IssueKind::MalformedLiteral,
            literal_token,
            format!("The literal '{}' is not a valid integer.", literal),
        );
        return false;
    };

    let Some(int_size) = get_integer_size(ty.get_primitive_type()) else {
        payload.collect_issue(
            IssueKind::InvalidTypeConversion,
            literal_token,
            format!("The type '{}' is not an integer type.", ty),
        );
        return false;
    };

    if value > *int_size.get_max_positive_value() {
        payload.collect_issue(
            IssueKind::IntegerOverflow,
            literal_token,
            format!(
                "The literal '{}' is too large for the integer type '{}'. The maximum value is '{}'.",
                literal,
                ty,
                int_size.get_max_positive_value()
            ),
        );

        return false;
    }

    if value < *int_size.get_max_negative_value() {
        payload.collect_issue(
            IssueKind::IntegerUnderflow,
            literal_token,
            format!(
                "The literal '{}' is too small for the integer type '{}'. The minimum value is '{}'.",
                literal,
                ty,
                int_size.get_max_negative_value()
            ),
        );

        return false;
    }

    true
}

fn is_hex_text(text: &str) -> bool {
    let unsigned = text.trim_start_matches(['-', '+']);
    unsigned.starts_with("0x") || unsigned.starts_with("0X")
}

fn emplace_literal<'t>(payload: &mut Payload<'t>, literal: LiteralExpr<'t>) -> NodeRef {
    payload.context.emplace_node(ExprNode::Literal(literal))
}

fn malformed_literal(payload: &mut Payload, token: &Token) -> NodeRef {
    payload.collect_issue(
        IssueKind::MalformedLiteral,
        token,
        format!("The literal '{}' could not be read as a {}.", token.value, token.kind),
    );

    NodeRef::void()
}

fn cannot_cast(payload: &mut Payload, token: &Token, expected_type: ValueType) {
    debug!(literal = %token.value, %expected_type, "literal cannot be cast, keeping inferred type");

    payload.collect_issue(
        IssueKind::UnexpectedToken,
        token,
        format!(
            "Unexpected {} '{}' where a value of type '{}' is expected.",
            token.kind, token.value, expected_type
        ),
    );
}

#[tracing::instrument(level = "trace", skip(payload))]
pub fn parse_literal_float(payload: &mut Payload, expected_type: Option<ValueType>) -> NodeRef {
    let Some(current_token) = payload.cursor.current() else {
        return super::expr::unexpected_end_of_input(payload);
    };

    // a trailing `f` marks single precision
    let inferred_type = if current_token.value.ends_with('f') {
        PrimitiveType::Float32
    } else {
        PrimitiveType::Float64
    };

    let node = LiteralExpr::float(current_token, inferred_type);
    payload.cursor.skip();

    let Some(expected_type) = expected_type else {
        return emplace_literal(payload, node);
    };

    // floats / doubles
    if expected_type.is_floating_type() {
        let mut text = LiteralText::Token;

        if !node.result_type().will_fit_into(expected_type) {
            // only warn when the value really changes, `1.0` survives the round trip
            let Some(dliteral) = parse_float_text(node.value_text()) else {
                return malformed_literal(payload, current_token);
            };
            let fliteral = dliteral as f32;
            let dliteral2 = fliteral as f64;

            if dliteral != dliteral2 {
                payload.collect_issue(
                    IssueKind::LossOfPrecision,
                    current_token,
                    format!(
                        "The literal '{}' is stored in a 32bit float which will result in the effective value {}",
                        node.value_text(),
                        dliteral2
                    ),
                );

                text = LiteralText::Resolved(dliteral2.to_string());
            }
        }

        let casted_node =
            LiteralExpr::casted_float(current_token, expected_type.get_primitive_type(), text);
        return emplace_literal(payload, casted_node);
    }

    // integers
    if expected_type.is_integer() {
        let Some(dliteral) = parse_float_text(node.value_text()) else {
            return malformed_literal(payload, current_token);
        };
        let dliteral_cmp = dliteral as i64 as f64;

        // a non zero fraction is almost certainly a mistake, so this is an error
        if dliteral != dliteral_cmp {
            let reason = if dliteral.fract() == 0.0 {
                "because it is outside of the 64bit integer range"
            } else {
                "due to non zero decimal values"
            };

            payload.collect_issue(
                IssueKind::InvalidTypeConversion,
                current_token,
                format!(
                    "The floating point number literal '{}' cannot be implicitly converted to an integer type {}.",
                    node.value_text(),
                    reason
                ),
            );

            return NodeRef::void();
        }

        let value_text = node.value_text();
        let int_literal = value_text.split('.').next().unwrap_or(value_text);

        if !can_hold_literal_int(payload, expected_type, int_literal, current_token) {
            return NodeRef::void();
        }

        let casted_node = LiteralExpr::casted_int(
            current_token,
            expected_type.get_primitive_type(),
            LiteralText::Resolved(int_literal.to_string()),
        );
        return emplace_literal(payload, casted_node);
    }

    cannot_cast(payload, current_token, expected_type);
    emplace_literal(payload, node)
}

#[tracing::instrument(level = "trace", skip(payload))]
pub fn parse_literal_int(payload: &mut Payload, expected_type: Option<ValueType>) -> NodeRef {
    let Some(current_token) = payload.cursor.current() else {
        return super::expr::unexpected_end_of_input(payload);
    };

    let Some(intvalue) = parse_integer_text(&current_token.value) else {
        payload.cursor.skip();
        return malformed_literal(payload, current_token);
    };

    // anything outside of the 32bit range defaults to a 64bit integer
    let fits_int32 = get_integer_size(PrimitiveType::Int32)
        .is_some_and(|int_size| int_size.contains(&intvalue));
    let guessed_int_type = if fits_int32 {
        PrimitiveType::Int32
    } else {
        PrimitiveType::Int64
    };

    let node = LiteralExpr::int(current_token, guessed_int_type);
    payload.cursor.skip();

    let Some(expected_type) = expected_type else {
        return emplace_literal(payload, node);
    };

    if expected_type.is_floating_type() {
        // TODO: warn when the integer is not exactly representable in the float type
        // float text has no hex form, so hex literals carry their decimal value
        let text = if is_hex_text(&current_token.value) {
            LiteralText::Resolved(intvalue.to_string())
        } else {
            LiteralText::Token
        };

        let casted_node =
            LiteralExpr::casted_float(current_token, expected_type.get_primitive_type(), text);
        return emplace_literal(payload, casted_node);
    }

    if expected_type.is_integer() {
        if expected_type.is_unsigned_integer() && intvalue.sign() == num_bigint::Sign::Minus {
            payload.collect_issue(
                IssueKind::InvalidTypeConversion,
                current_token,
                format!(
                    "The integer literal '{}' cannot be implicitly converted to an unsigned integer because it is negative.",
                    current_token.value
                ),
            );

            return NodeRef::void();
        }

        if !can_hold_literal_int(payload, expected_type, &current_token.value, current_token) {
            return NodeRef::void();
        }

        let casted_node = LiteralExpr::casted_int(
            current_token,
            expected_type.get_primitive_type(),
            LiteralText::Token,
        );
        return emplace_literal(payload, casted_node);
    }

    cannot_cast(payload, current_token, expected_type);
    emplace_literal(payload, node)
}

/// Boolean literals never coerce and never produce issues.
pub fn parse_literal_bool(payload: &mut Payload) -> NodeRef {
    let Some(current_token) = payload.cursor.current() else {
        return super::expr::unexpected_end_of_input(payload);
    };

    payload.cursor.skip();
    emplace_literal(payload, LiteralExpr::bool(current_token))
}
