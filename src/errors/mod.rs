//! Error types and diagnostics for the literal front end.
//!
//! Two disjoint channels live here:
//!
//! - `errors`: hard lexical failures that abort a tokenization pass
//! - `issues`: soft diagnostics collected while coercing literals, so that
//!   surrounding parsing can continue and every problem is reported together

pub mod errors;
pub mod issues;
