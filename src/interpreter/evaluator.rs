/// Core evaluation logic.
///
/// Contains the statement and expression dispatch, block sequencing with
/// `return` propagation, and the public `evaluate` boundary where runtime
/// errors become `Error` values.
pub mod core;

/// Prefix operator evaluation.
///
/// Implements `!` under the truthiness rule and integer negation.
pub mod unary;

/// Binary operator evaluation.
///
/// Dispatches on the pair of operand types: integer arithmetic and
/// comparison, string concatenation, and identity equality for everything
/// else.
pub mod binary;

/// Function evaluation.
///
/// Handles calls to user-defined functions and to the builtin registry,
/// argument checking, and unwrapping of returned values.
pub mod function;
