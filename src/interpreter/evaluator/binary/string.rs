use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::core::{Value, ValueKind},
    },
};

/// Applies a binary operator to two strings. Only `+` (concatenation) is
/// defined.
pub fn eval_string_infix(operator: InfixOperator, left: &str, right: &str) -> EvalResult<Value> {
    match operator {
        InfixOperator::Add => Ok(Value::from(format!("{left}{right}"))),
        _ => Err(RuntimeError::UnknownInfixOperator { left: ValueKind::String,
                                                      operator,
                                                      right: ValueKind::String }),
    }
}
