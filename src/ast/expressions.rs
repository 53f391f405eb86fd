use std::fmt::Display;

use num_bigint::BigInt;
use num_traits::Num;

use crate::lexer::tokens::Token;

use super::types::{PrimitiveType, ValueType};

// LITERALS

/// The textual value a literal materializes from. Fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiteralText {
    /// Use the raw text of the originating token
    Token,
    /// Use this text instead of the token's (e.g. a rounded float)
    Resolved(String),
}

/// Literal Expression
///
/// Every variant borrows its originating token from the `TokenCollection`.
/// `expected_type` is set when the node was produced under coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralExpr<'t> {
    Float {
        token: &'t Token,
        result_type: PrimitiveType,
        expected_type: Option<PrimitiveType>,
        text: LiteralText,
    },
    Int {
        token: &'t Token,
        result_type: PrimitiveType,
        expected_type: Option<PrimitiveType>,
        text: LiteralText,
    },
    Bool {
        token: &'t Token,
    },
}

impl<'t> LiteralExpr<'t> {
    pub fn float(token: &'t Token, result_type: PrimitiveType) -> Self {
        LiteralExpr::Float {
            token,
            result_type,
            expected_type: None,
            text: LiteralText::Token,
        }
    }

    pub fn casted_float(token: &'t Token, expected: PrimitiveType, text: LiteralText) -> Self {
        LiteralExpr::Float {
            token,
            result_type: expected,
            expected_type: Some(expected),
            text,
        }
    }

    pub fn int(token: &'t Token, result_type: PrimitiveType) -> Self {
        LiteralExpr::Int {
            token,
            result_type,
            expected_type: None,
            text: LiteralText::Token,
        }
    }

    pub fn casted_int(token: &'t Token, expected: PrimitiveType, text: LiteralText) -> Self {
        LiteralExpr::Int {
            token,
            result_type: expected,
            expected_type: Some(expected),
            text,
        }
    }

    pub fn bool(token: &'t Token) -> Self {
        LiteralExpr::Bool { token }
    }

    pub fn token(&self) -> &'t Token {
        match self {
            LiteralExpr::Float { token, .. }
            | LiteralExpr::Int { token, .. }
            | LiteralExpr::Bool { token } => *token,
        }
    }

    pub fn result_type(&self) -> ValueType {
        match self {
            LiteralExpr::Float { result_type, .. } | LiteralExpr::Int { result_type, .. } => {
                ValueType::new(*result_type)
            }
            LiteralExpr::Bool { .. } => ValueType::new(PrimitiveType::Bool),
        }
    }

    pub fn expected_type(&self) -> Option<PrimitiveType> {
        match self {
            LiteralExpr::Float { expected_type, .. } | LiteralExpr::Int { expected_type, .. } => {
                *expected_type
            }
            LiteralExpr::Bool { .. } => None,
        }
    }

    /// The override text if one was resolved, the token text otherwise.
    pub fn value_text(&self) -> &str {
        match self {
            LiteralExpr::Float { text, token, .. } | LiteralExpr::Int { text, token, .. } => {
                match text {
                    LiteralText::Resolved(resolved) => resolved,
                    LiteralText::Token => &token.value,
                }
            }
            LiteralExpr::Bool { token } => &token.value,
        }
    }

    pub fn override_text(&self) -> Option<&str> {
        match self {
            LiteralExpr::Float {
                text: LiteralText::Resolved(resolved),
                ..
            }
            | LiteralExpr::Int {
                text: LiteralText::Resolved(resolved),
                ..
            } => Some(resolved.as_str()),
            _ => None,
        }
    }

    /// The value as stored, so single precision literals come back rounded.
    pub fn float_value(&self) -> Option<f64> {
        let LiteralExpr::Float { result_type, .. } = self else {
            return None;
        };

        let value = parse_float_text(self.value_text())?;
        match result_type {
            PrimitiveType::Float32 => Some(value as f32 as f64),
            _ => Some(value),
        }
    }

    pub fn int_value(&self) -> Option<BigInt> {
        match self {
            LiteralExpr::Int { .. } => parse_integer_text(self.value_text()),
            _ => None,
        }
    }

    pub fn bool_value(&self) -> Option<bool> {
        match self {
            LiteralExpr::Bool { token } => Some(token.value == "true"),
            _ => None,
        }
    }

    pub fn literal_type_description(&self) -> &'static str {
        self.result_type().get_primitive_type().get_primitive_name()
    }

    pub fn node_description(&self) -> String {
        format!(
            "literal<{}>({})",
            self.literal_type_description(),
            self.value_text()
        )
    }
}

impl Display for LiteralExpr<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.node_description())
    }
}

/// Variable Reference Expression
#[derive(Debug, Clone, PartialEq)]
pub struct VarRefExpr<'t> {
    pub token: &'t Token,
    pub var_type: ValueType,
}

impl VarRefExpr<'_> {
    pub fn node_description(&self) -> String {
        format!("varref<{}>({})", self.var_type, self.token.value)
    }
}

/// Parses decimal or `0x` hexadecimal integer text, with an optional sign.
pub fn parse_integer_text(text: &str) -> Option<BigInt> {
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };

    let digits = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"));

    let magnitude = match digits {
        Some(hex) if !hex.is_empty() && hex.bytes().all(|b| b.is_ascii_hexdigit()) => {
            BigInt::from_str_radix(hex, 16).ok()?
        }
        Some(_) => return None,
        None if !unsigned.is_empty() && unsigned.bytes().all(|b| b.is_ascii_digit()) => {
            BigInt::from_str_radix(unsigned, 10).ok()?
        }
        None => return None,
    };

    Some(if negative { -magnitude } else { magnitude })
}

/// Parses floating literal text, ignoring a trailing single-precision `f`.
pub fn parse_float_text(text: &str) -> Option<f64> {
    text.strip_suffix('f').unwrap_or(text).parse::<f64>().ok()
}
