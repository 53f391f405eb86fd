//! Unit tests for the parser module.
//!
//! Covers literal coercion for every literal/expected type combination, the
//! primary expression dispatch and the token cursor.

use std::rc::Rc;

use num_bigint::BigInt;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::{
    ast::{
        ast::NodeRef,
        tests::{integer_type, integer_value},
        types::{PrimitiveType, ValueType},
    },
    errors::issues::{IssueKind, Severity},
    lexer::{
        lexer::tokenize,
        tokens::{Token, TokenCollection, TokenKind},
    },
};

use super::{
    cursor::TokenCursor,
    expr::{is_expr_token, parse_expr_ref},
    literal::can_hold_literal_int,
    payload::Payload,
};

#[derive(Debug)]
struct Outcome {
    void: bool,
    result_type: Option<PrimitiveType>,
    is_float_node: bool,
    float_value: Option<f64>,
    value_text: Option<String>,
    override_text: Option<String>,
    issues: Vec<IssueKind>,
    messages: Vec<String>,
}

fn coerce_token(token: Token, expected: Option<PrimitiveType>) -> Outcome {
    let tokens = TokenCollection::from(vec![token]);
    let mut payload = Payload::new(&tokens, Rc::new("test.lang".to_string()));
    let node = parse_expr_ref(&mut payload, expected.map(ValueType::new));
    let literal = payload.context.literal(node);

    assert!(payload.cursor.is_done(), "the literal must be consumed");

    Outcome {
        void: node.is_void(),
        result_type: literal.map(|literal| literal.result_type().get_primitive_type()),
        is_float_node: literal.is_some_and(|literal| literal.float_value().is_some()),
        float_value: literal.and_then(|literal| literal.float_value()),
        value_text: literal.map(|literal| literal.value_text().to_string()),
        override_text: literal.and_then(|literal| literal.override_text().map(String::from)),
        issues: payload.collector.issues().iter().map(|issue| issue.kind).collect(),
        messages: payload
            .collector
            .issues()
            .iter()
            .map(|issue| issue.message.clone())
            .collect(),
    }
}

fn coerce_int(text: &str, expected: Option<PrimitiveType>) -> Outcome {
    coerce_token(Token::new(TokenKind::IntegerLiteral, text, 1, 1), expected)
}

fn coerce_float(text: &str, expected: Option<PrimitiveType>) -> Outcome {
    coerce_token(Token::new(TokenKind::FloatingLiteral, text, 1, 1), expected)
}

// integer literals

#[test]
fn test_int_overflow_uint8() {
    let outcome = coerce_int("300", Some(PrimitiveType::UInt8));

    assert!(outcome.void);
    assert_eq!(outcome.issues, vec![IssueKind::IntegerOverflow]);
    assert_eq!(
        outcome.messages[0],
        "The literal '300' is too large for the integer type 'uint8'. The maximum value is '255'."
    );
}

#[test]
fn test_negative_int_to_unsigned() {
    let outcome = coerce_int("-1", Some(PrimitiveType::UInt8));

    assert!(outcome.void);
    assert_eq!(outcome.issues, vec![IssueKind::InvalidTypeConversion]);
}

#[test]
fn test_negative_zero_to_unsigned_is_fine() {
    let outcome = coerce_int("-0", Some(PrimitiveType::UInt8));

    assert!(!outcome.void);
    assert!(outcome.issues.is_empty());
}

#[test]
fn test_int8_bounds() {
    let outcome = coerce_int("127", Some(PrimitiveType::Int8));
    assert!(outcome.issues.is_empty());
    assert_eq!(outcome.result_type, Some(PrimitiveType::Int8));
    assert_eq!(outcome.override_text, None);

    let outcome = coerce_int("128", Some(PrimitiveType::Int8));
    assert!(outcome.void);
    assert_eq!(outcome.issues, vec![IssueKind::IntegerOverflow]);

    let outcome = coerce_int("-128", Some(PrimitiveType::Int8));
    assert!(outcome.issues.is_empty());

    let outcome = coerce_int("-129", Some(PrimitiveType::Int8));
    assert!(outcome.void);
    assert_eq!(outcome.issues, vec![IssueKind::IntegerUnderflow]);
    assert!(outcome.messages[0].contains("The minimum value is '-128'"));
}

#[test]
fn test_64bit_extremes() {
    assert!(coerce_int("18446744073709551615", Some(PrimitiveType::UInt64))
        .issues
        .is_empty());
    assert_eq!(
        coerce_int("18446744073709551616", Some(PrimitiveType::UInt64)).issues,
        vec![IssueKind::IntegerOverflow]
    );
    assert!(coerce_int("-9223372036854775808", Some(PrimitiveType::Int64))
        .issues
        .is_empty());
    assert_eq!(
        coerce_int("-9223372036854775809", Some(PrimitiveType::Int64)).issues,
        vec![IssueKind::IntegerUnderflow]
    );
    assert_eq!(
        coerce_int("99999999999999999999999999999999999999999", Some(PrimitiveType::Int64)).issues,
        vec![IssueKind::IntegerOverflow]
    );
}

#[test]
fn test_int_default_inference() {
    assert_eq!(
        coerce_int("123456789012", None).result_type,
        Some(PrimitiveType::Int64)
    );
    assert_eq!(coerce_int("5", None).result_type, Some(PrimitiveType::Int32));
    assert_eq!(
        coerce_int("2147483647", None).result_type,
        Some(PrimitiveType::Int32)
    );
    assert_eq!(
        coerce_int("2147483648", None).result_type,
        Some(PrimitiveType::Int64)
    );
    assert_eq!(
        coerce_int("-2147483649", None).result_type,
        Some(PrimitiveType::Int64)
    );
    assert!(coerce_int("123456789012", None).issues.is_empty());
}

#[test]
fn test_hex_literals() {
    let outcome = coerce_int("0xFF", Some(PrimitiveType::UInt8));
    assert!(outcome.issues.is_empty());
    assert_eq!(outcome.value_text.as_deref(), Some("0xFF"));

    let outcome = coerce_int("0x100", Some(PrimitiveType::UInt8));
    assert_eq!(outcome.issues, vec![IssueKind::IntegerOverflow]);
}

#[test]
fn test_int_to_float_keeps_text() {
    let outcome = coerce_int("42", Some(PrimitiveType::Float32));

    assert!(outcome.issues.is_empty());
    assert!(outcome.is_float_node);
    assert_eq!(outcome.result_type, Some(PrimitiveType::Float32));
    assert_eq!(outcome.value_text.as_deref(), Some("42"));
    assert_eq!(outcome.override_text, None);
}

#[test]
fn test_hex_int_to_float_reads_back() {
    let outcome = coerce_int("0xFF", Some(PrimitiveType::Float32));

    assert!(outcome.issues.is_empty());
    assert_eq!(outcome.float_value, Some(255.0));
    assert_eq!(outcome.override_text.as_deref(), Some("255"));

    let outcome = coerce_int("0x10", Some(PrimitiveType::Float64));
    assert_eq!(outcome.float_value, Some(16.0));
}

#[test]
fn test_int_to_float_does_not_check_precision() {
    let outcome = coerce_int("16777217", Some(PrimitiveType::Float32));

    assert!(outcome.issues.is_empty());
    assert_eq!(outcome.result_type, Some(PrimitiveType::Float32));
}

#[test]
fn test_int_to_bool_falls_back() {
    let outcome = coerce_int("5", Some(PrimitiveType::Bool));

    assert!(!outcome.void);
    assert_eq!(outcome.issues, vec![IssueKind::UnexpectedToken]);
    assert_eq!(outcome.result_type, Some(PrimitiveType::Int32));
}

#[test]
fn test_malformed_integer_text() {
    let outcome = coerce_int("12abc", Some(PrimitiveType::Int32));

    assert!(outcome.void);
    assert_eq!(outcome.issues, vec![IssueKind::MalformedLiteral]);
}

// floating literals

#[test]
fn test_exact_float32_round_trip() {
    let outcome = coerce_float("1.0", Some(PrimitiveType::Float32));

    assert!(outcome.issues.is_empty());
    assert_eq!(outcome.result_type, Some(PrimitiveType::Float32));
    assert_eq!(outcome.override_text, None);
}

#[test]
fn test_float32_loss_of_precision() {
    let tokens = TokenCollection::from(vec![Token::new(TokenKind::FloatingLiteral, "0.1", 1, 1)]);
    let mut payload = Payload::new(&tokens, Rc::new("test.lang".to_string()));
    let node = parse_expr_ref(&mut payload, Some(ValueType::new(PrimitiveType::Float32)));

    let literal = payload.context.literal(node).unwrap();
    assert_eq!(literal.result_type(), ValueType::new(PrimitiveType::Float32));
    assert_eq!(literal.override_text(), Some("0.10000000149011612"));
    assert_eq!(literal.float_value(), Some(0.1f32 as f64));

    let issues = payload.collector.issues();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].kind, IssueKind::LossOfPrecision);
    assert_eq!(issues[0].severity, Severity::Warning);
    assert!(issues[0].message.contains("'0.1'"));
    assert!(issues[0].message.contains("0.10000000149011612"));
    assert!(!payload.collector.has_errors());
}

#[test]
fn test_float_precision_inference() {
    assert_eq!(
        coerce_float("2.5f", None).result_type,
        Some(PrimitiveType::Float32)
    );
    assert_eq!(
        coerce_float("2.5", None).result_type,
        Some(PrimitiveType::Float64)
    );
}

#[test]
fn test_single_precision_literal_widens_silently() {
    let outcome = coerce_float("0.1f", Some(PrimitiveType::Float64));

    assert!(outcome.issues.is_empty());
    assert_eq!(outcome.result_type, Some(PrimitiveType::Float64));
    assert_eq!(outcome.override_text, None);

    assert!(coerce_float("0.1f", Some(PrimitiveType::Float32))
        .issues
        .is_empty());
}

#[test]
fn test_float_with_fraction_to_int() {
    let outcome = coerce_float("3.5", Some(PrimitiveType::Int32));

    assert!(outcome.void);
    assert_eq!(outcome.issues, vec![IssueKind::InvalidTypeConversion]);
}

#[test]
fn test_whole_float_beyond_64bit_range_to_int() {
    let outcome = coerce_float("18446744073709551615.0", Some(PrimitiveType::UInt64));

    assert!(outcome.void);
    assert_eq!(outcome.issues, vec![IssueKind::InvalidTypeConversion]);
    assert!(outcome.messages[0].ends_with("because it is outside of the 64bit integer range."));

    let outcome = coerce_float("3.5", Some(PrimitiveType::Int64));
    assert!(outcome.messages[0].ends_with("due to non zero decimal values."));
}

#[test]
fn test_whole_float_to_int() {
    let outcome = coerce_float("3.0", Some(PrimitiveType::Int32));

    assert!(!outcome.void);
    assert!(outcome.issues.is_empty());
    assert!(!outcome.is_float_node);
    assert_eq!(outcome.result_type, Some(PrimitiveType::Int32));
    assert_eq!(outcome.override_text.as_deref(), Some("3"));
}

#[test]
fn test_whole_float_out_of_int_range() {
    let outcome = coerce_float("300.0", Some(PrimitiveType::UInt8));
    assert!(outcome.void);
    assert_eq!(outcome.issues, vec![IssueKind::IntegerOverflow]);

    let outcome = coerce_float("-3.0", Some(PrimitiveType::UInt8));
    assert!(outcome.void);
    assert_eq!(outcome.issues, vec![IssueKind::IntegerUnderflow]);
}

#[test]
fn test_float_to_bool_falls_back() {
    let outcome = coerce_float("1.5", Some(PrimitiveType::Bool));

    assert!(!outcome.void);
    assert_eq!(outcome.issues, vec![IssueKind::UnexpectedToken]);
    assert_eq!(outcome.result_type, Some(PrimitiveType::Float64));
}

// other expressions

#[test]
fn test_bool_literal_never_coerces() {
    let outcome = coerce_token(
        Token::new(TokenKind::BoolLiteral, "true", 1, 1),
        Some(PrimitiveType::Int32),
    );

    assert!(outcome.issues.is_empty());
    assert_eq!(outcome.result_type, Some(PrimitiveType::Bool));
}

#[test]
fn test_variable_references() {
    let tokens = tokenize("count missing", None).unwrap();
    let mut payload = Payload::new(&tokens, Rc::new("test.lang".to_string()));
    payload
        .scope
        .declare_variable("count", ValueType::new(PrimitiveType::UInt16));

    let count = parse_expr_ref(&mut payload, None);
    assert_eq!(
        payload.context.get(count).unwrap().node_description(),
        "varref<uint16>(count)"
    );

    let missing = parse_expr_ref(&mut payload, None);
    assert!(missing.is_void());
    assert_eq!(payload.collector.issues()[0].kind, IssueKind::UnknownVariable);
    assert_eq!(payload.collector.issues()[0].location.column, 7);
}

#[test]
fn test_unexpected_tokens() {
    let tokens = tokenize("; x", None).unwrap();
    let mut payload = Payload::new(&tokens, Rc::new("test.lang".to_string()));

    assert!(!is_expr_token(&payload));
    assert!(parse_expr_ref(&mut payload, None).is_void());
    assert!(is_expr_token(&payload));
    assert_eq!(payload.collector.count_of(IssueKind::UnexpectedToken), 1);
}

#[test]
fn test_end_of_input() {
    let tokens = tokenize("ab", None).unwrap();
    let mut payload = Payload::new(&tokens, Rc::new("test.lang".to_string()));
    payload.cursor.skip();

    assert!(parse_expr_ref(&mut payload, None).is_void());
    let issue = &payload.collector.issues()[0];
    assert_eq!(issue.kind, IssueKind::UnexpectedToken);
    assert_eq!((issue.location.line, issue.location.column), (1, 3));
}

#[test]
fn test_issues_accumulate_across_literals() {
    let tokens = tokenize("300 3.5 7 0.1", Some("test.lang".to_string())).unwrap();
    let mut payload = Payload::new(&tokens, Rc::new("test.lang".to_string()));
    let uint8 = Some(ValueType::new(PrimitiveType::UInt8));

    let nodes: Vec<NodeRef> = (0..3).map(|_| parse_expr_ref(&mut payload, uint8)).collect();
    let last = parse_expr_ref(&mut payload, Some(ValueType::new(PrimitiveType::Float32)));

    assert!(nodes[0].is_void());
    assert!(nodes[1].is_void());
    assert!(!nodes[2].is_void());
    assert!(!last.is_void());
    assert!(payload.cursor.is_done());
    assert_eq!(
        payload
            .collector
            .issues()
            .iter()
            .map(|issue| (issue.kind, issue.location.column))
            .collect::<Vec<_>>(),
        vec![
            (IssueKind::IntegerOverflow, 1),
            (IssueKind::InvalidTypeConversion, 5),
            (IssueKind::LossOfPrecision, 11),
        ]
    );
}

#[test]
fn test_same_literal_twice_gives_independent_nodes() {
    let tokens = tokenize("0.1", None).unwrap();
    let mut payload = Payload::new(&tokens, Rc::new("test.lang".to_string()));
    let float32 = Some(ValueType::new(PrimitiveType::Float32));

    let first = parse_expr_ref(&mut payload, float32);
    payload.cursor.restore(TokenCursor::new(&tokens).snapshot());
    let second = parse_expr_ref(&mut payload, float32);

    assert_ne!(first, second);
    assert_eq!(payload.context.get(first), payload.context.get(second));
    assert_eq!(tokens[0].value, "0.1");
    assert_eq!(payload.collector.len(), 2);
}

#[test]
fn test_can_hold_literal_int_reports_once() {
    let tokens = tokenize("70000", None).unwrap();
    let mut payload = Payload::new(&tokens, Rc::new("test.lang".to_string()));

    assert!(!can_hold_literal_int(
        &mut payload,
        ValueType::new(PrimitiveType::Int16),
        "70000",
        &tokens[0]
    ));
    assert!(can_hold_literal_int(
        &mut payload,
        ValueType::new(PrimitiveType::Int32),
        "70000",
        &tokens[0]
    ));
    assert_eq!(payload.collector.len(), 1);
}

#[test]
fn test_token_cursor() {
    let tokens = tokenize("a b c", None).unwrap();
    let mut cursor = TokenCursor::new(&tokens);

    let start = cursor.snapshot();
    cursor.skip();
    cursor.skip();
    let end = cursor.snapshot();

    assert_eq!(cursor.current().unwrap().value, "c");
    assert_eq!(
        cursor
            .slice(start, end)
            .iter()
            .map(|token| token.value.as_str())
            .collect::<Vec<_>>(),
        vec!["a", "b"]
    );

    cursor.restore(start);
    assert!(cursor.is_type(TokenKind::Identifier));
    assert_eq!(cursor.peek(2).unwrap().value, "c");

    cursor.skip();
    cursor.skip();
    cursor.skip();
    cursor.skip();
    assert!(cursor.is_done());
    assert!(cursor.current().is_none());
}

proptest! {
    #[test]
    fn prop_int_literal_accepted_iff_in_range(primitive in integer_type(), value in integer_value()) {
        let outcome = coerce_int(&value.to_string(), Some(primitive));
        let bound = crate::ast::integer::get_integer_size(primitive).unwrap();
        let in_range = bound.contains(&BigInt::from(value));

        prop_assert_eq!(!outcome.void, in_range);

        if in_range {
            prop_assert!(outcome.issues.is_empty());
            prop_assert_eq!(outcome.result_type, Some(primitive));
        } else if BigInt::from(value) > *bound.get_max_positive_value() {
            prop_assert_eq!(outcome.issues, vec![IssueKind::IntegerOverflow]);
        } else if ValueType::new(primitive).is_unsigned_integer() {
            prop_assert_eq!(outcome.issues, vec![IssueKind::InvalidTypeConversion]);
        } else {
            prop_assert_eq!(outcome.issues, vec![IssueKind::IntegerUnderflow]);
        }
    }
}
