//! Parser side of the literal front end.
//!
//! The surrounding expression parser is not part of this crate; what lives here
//! is the seam it drives:
//!
//! - `cursor`: a read cursor over the token collection
//! - `payload`: the per-pass state (cursor, node arena, issues, scope)
//! - `expr`: the primary expression entry point
//! - `literal`: literal coercion against an optional expected type

pub mod cursor;
pub mod expr;
pub mod literal;
pub mod payload;

#[cfg(test)]
mod tests;
