/// AST module
/// Contains the typed literal nodes and the type domain behind them
///
/// Submodules:
/// - ast: Expression node union, node handles and the node arena
/// - expressions: Literal and variable reference expressions
/// - integer: Exact integer bounds per primitive type
/// - types: Primitive and value types
pub mod ast;
pub mod expressions;
pub mod integer;
pub mod types;
