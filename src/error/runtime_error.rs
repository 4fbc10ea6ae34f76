use thiserror::Error;

use crate::{
    ast::{InfixOperator, PrefixOperator},
    interpreter::value::core::ValueKind,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during evaluation.
///
/// The `Display` output is the message carried by an `Error` value.
pub enum RuntimeError {
    /// Tried to use a name bound neither in scope nor as a builtin.
    #[error("identifier not found: {name}")]
    IdentifierNotFound {
        /// The name that was looked up.
        name: String,
    },
    /// A prefix operator was applied to an operand it does not support.
    #[error("unknown operator: {operator}{operand}")]
    UnknownPrefixOperator {
        /// The operator.
        operator: PrefixOperator,
        /// The operand's type.
        operand:  ValueKind,
    },
    /// A binary operator is not defined for these operand types.
    #[error("unknown operator: {left} {operator} {right}")]
    UnknownInfixOperator {
        /// The left operand's type.
        left:     ValueKind,
        /// The operator.
        operator: InfixOperator,
        /// The right operand's type.
        right:    ValueKind,
    },
    /// The operands of a binary operator have different types.
    #[error("type mismatch: {left} {operator} {right}")]
    TypeMismatch {
        /// The left operand's type.
        left:     ValueKind,
        /// The operator.
        operator: InfixOperator,
        /// The right operand's type.
        right:    ValueKind,
    },
    /// Attempted integer division by zero.
    #[error("division by zero: {dividend} / 0")]
    DivisionByZero {
        /// The left operand of the division.
        dividend: i64,
    },
    /// The callee of a call expression is not callable.
    #[error("not a function: {kind}")]
    NotAFunction {
        /// The callee's type.
        kind: ValueKind,
    },
    /// The wrong number of arguments was supplied to a function.
    #[error("wrong number of arguments: want={expected}, got={found}")]
    ArgumentCountMismatch {
        /// The number of parameters the function declares.
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
    },
    /// A builtin received an argument of a type it does not handle.
    #[error("argument to `{builtin}` not supported, got {kind}")]
    UnsupportedArgument {
        /// The builtin's name.
        builtin: &'static str,
        /// The rejected argument's type.
        kind:    ValueKind,
    },
}
