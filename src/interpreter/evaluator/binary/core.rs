use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::{integer::eval_integer_infix, string::eval_string_infix},
            core::EvalResult,
        },
        value::core::Value,
    },
};

/// Evaluates a binary operation between two values.
///
/// Dispatch happens on the pair of operand types, in this order:
/// - two integers: arithmetic and comparison,
/// - two strings: concatenation only,
/// - different types: a type mismatch,
/// - any other pair of equal types: `==` and `!=` by identity, any other
///   operator is unknown.
///
/// # Example
/// ```
/// use simian::{
///     ast::InfixOperator,
///     interpreter::{evaluator::binary::core::eval_infix, value::core::Value},
/// };
///
/// let result = eval_infix(InfixOperator::Add, &Value::Integer(3), &Value::Integer(4));
/// assert_eq!(result.unwrap(), Value::Integer(7));
///
/// let result = eval_infix(InfixOperator::Equal, &Value::TRUE, &Value::FALSE);
/// assert_eq!(result.unwrap(), Value::FALSE);
///
/// let err = eval_infix(InfixOperator::Add, &Value::Integer(1), &Value::from("a")).unwrap_err();
/// assert_eq!(err.to_string(), "type mismatch: INTEGER + STRING");
/// ```
pub fn eval_infix(operator: InfixOperator, left: &Value, right: &Value) -> EvalResult<Value> {
    match (left, right) {
        (Value::Integer(l), Value::Integer(r)) => eval_integer_infix(operator, *l, *r),
        (Value::String(l), Value::String(r)) => eval_string_infix(operator, l, r),
        _ if left.kind() != right.kind() => Err(RuntimeError::TypeMismatch { left: left.kind(),
                                                                             operator,
                                                                             right: right.kind() }),
        _ => match operator {
            InfixOperator::Equal => Ok(Value::from(left == right)),
            InfixOperator::NotEqual => Ok(Value::from(left != right)),
            _ => Err(RuntimeError::UnknownInfixOperator { left: left.kind(),
                                                          operator,
                                                          right: right.kind() }),
        },
    }
}
