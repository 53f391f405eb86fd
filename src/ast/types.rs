//! Primitive value types.
//!
//! The set is closed: booleans, eight fixed-width integers and two floating
//! point widths. Every literal node resolves to exactly one of them.

use std::fmt::Display;

/// Represents the primitive types of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float32,
    Float64,
}

impl PrimitiveType {
    pub const ALL: [PrimitiveType; 11] = [
        PrimitiveType::Bool,
        PrimitiveType::Int8,
        PrimitiveType::Int16,
        PrimitiveType::Int32,
        PrimitiveType::Int64,
        PrimitiveType::UInt8,
        PrimitiveType::UInt16,
        PrimitiveType::UInt32,
        PrimitiveType::UInt64,
        PrimitiveType::Float32,
        PrimitiveType::Float64,
    ];

    pub const INTEGERS: [PrimitiveType; 8] = [
        PrimitiveType::Int8,
        PrimitiveType::Int16,
        PrimitiveType::Int32,
        PrimitiveType::Int64,
        PrimitiveType::UInt8,
        PrimitiveType::UInt16,
        PrimitiveType::UInt32,
        PrimitiveType::UInt64,
    ];

    pub fn get_primitive_name(&self) -> &'static str {
        match self {
            PrimitiveType::Bool => "bool",
            PrimitiveType::Int8 => "int8",
            PrimitiveType::Int16 => "int16",
            PrimitiveType::Int32 => "int32",
            PrimitiveType::Int64 => "int64",
            PrimitiveType::UInt8 => "uint8",
            PrimitiveType::UInt16 => "uint16",
            PrimitiveType::UInt32 => "uint32",
            PrimitiveType::UInt64 => "uint64",
            PrimitiveType::Float32 => "float32",
            PrimitiveType::Float64 => "float64",
        }
    }

    /// Accepts both the long (`int32`) and short (`i32`) spellings.
    pub fn from_name(name: &str) -> Option<PrimitiveType> {
        let primitive = match name {
            "bool" => PrimitiveType::Bool,
            "int8" | "i8" => PrimitiveType::Int8,
            "int16" | "i16" => PrimitiveType::Int16,
            "int32" | "i32" | "int" => PrimitiveType::Int32,
            "int64" | "i64" => PrimitiveType::Int64,
            "uint8" | "u8" => PrimitiveType::UInt8,
            "uint16" | "u16" => PrimitiveType::UInt16,
            "uint32" | "u32" | "uint" => PrimitiveType::UInt32,
            "uint64" | "u64" => PrimitiveType::UInt64,
            "float32" | "f32" | "float" => PrimitiveType::Float32,
            "float64" | "f64" | "double" => PrimitiveType::Float64,
            _ => return None,
        };

        Some(primitive)
    }

    /// Width in bits, `None` for `bool`.
    pub fn bit_width(&self) -> Option<u32> {
        match self {
            PrimitiveType::Bool => None,
            PrimitiveType::Int8 | PrimitiveType::UInt8 => Some(8),
            PrimitiveType::Int16 | PrimitiveType::UInt16 => Some(16),
            PrimitiveType::Int32 | PrimitiveType::UInt32 | PrimitiveType::Float32 => Some(32),
            PrimitiveType::Int64 | PrimitiveType::UInt64 | PrimitiveType::Float64 => Some(64),
        }
    }

    pub fn is_signed(&self) -> bool {
        matches!(
            self,
            PrimitiveType::Int8
                | PrimitiveType::Int16
                | PrimitiveType::Int32
                | PrimitiveType::Int64
                | PrimitiveType::Float32
                | PrimitiveType::Float64
        )
    }
}

impl Display for PrimitiveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get_primitive_name())
    }
}

/// A value type as seen by the expression parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValueType {
    primitive: PrimitiveType,
}

impl ValueType {
    pub fn new(primitive: PrimitiveType) -> Self {
        ValueType { primitive }
    }

    pub fn get_primitive_type(&self) -> PrimitiveType {
        self.primitive
    }

    pub fn is_integer(&self) -> bool {
        PrimitiveType::INTEGERS.contains(&self.primitive)
    }

    pub fn is_unsigned_integer(&self) -> bool {
        self.is_integer() && !self.primitive.is_signed()
    }

    pub fn is_floating_type(&self) -> bool {
        matches!(
            self.primitive,
            PrimitiveType::Float32 | PrimitiveType::Float64
        )
    }

    /// Whether every value of `self` is representable in `other` without loss.
    pub fn will_fit_into(&self, other: ValueType) -> bool {
        if *self == other {
            return true;
        }

        let (Some(width), Some(other_width)) =
            (self.primitive.bit_width(), other.primitive.bit_width())
        else {
            return false;
        };

        if self.is_floating_type() {
            return other.is_floating_type() && width <= other_width;
        }

        if other.is_floating_type() {
            // the integer must fit into the mantissa
            let mantissa = if other_width == 32 { 24 } else { 53 };
            return width <= mantissa;
        }

        match (self.is_unsigned_integer(), other.is_unsigned_integer()) {
            (false, false) | (true, true) => width <= other_width,
            (true, false) => width < other_width,
            (false, true) => false,
        }
    }
}

impl From<PrimitiveType> for ValueType {
    fn from(primitive: PrimitiveType) -> Self {
        ValueType::new(primitive)
    }
}

impl Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.primitive)
    }
}
