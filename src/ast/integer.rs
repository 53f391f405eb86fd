//! Exact integer ranges per primitive type.
//!
//! Bounds are kept as arbitrary-precision integers so that checking a literal
//! against them can never overflow itself.

use num_bigint::BigInt;
use num_traits::{One, Zero};

use super::types::PrimitiveType;

/// Inclusive range of an integer type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegerBound {
    max_positive: BigInt,
    max_negative: BigInt,
}

impl IntegerBound {
    pub fn get_max_positive_value(&self) -> &BigInt {
        &self.max_positive
    }

    /// The smallest representable value (zero for unsigned types).
    pub fn get_max_negative_value(&self) -> &BigInt {
        &self.max_negative
    }

    pub fn contains(&self, value: &BigInt) -> bool {
        *value >= self.max_negative && *value <= self.max_positive
    }
}

/// Two's complement bounds for integer types, `None` for everything else.
pub fn get_integer_size(primitive: PrimitiveType) -> Option<IntegerBound> {
    if !PrimitiveType::INTEGERS.contains(&primitive) {
        return None;
    }

    let bits = primitive.bit_width()?;

    let bound = if primitive.is_signed() {
        let half = BigInt::one() << (bits - 1);
        IntegerBound {
            max_positive: &half - BigInt::one(),
            max_negative: -half,
        }
    } else {
        IntegerBound {
            max_positive: (BigInt::one() << bits) - BigInt::one(),
            max_negative: BigInt::zero(),
        }
    };

    Some(bound)
}
