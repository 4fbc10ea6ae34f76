/// Operand-type dispatch for binary operators.
pub mod core;

/// Integer arithmetic and comparison.
pub mod integer;

/// String operators.
pub mod string;
