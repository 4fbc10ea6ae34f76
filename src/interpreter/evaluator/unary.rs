use crate::{
    ast::PrefixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates a prefix operation on an already evaluated operand.
///
/// Supported operators:
/// - `Not`: logical negation of the operand's truthiness; defined for every
///   value.
/// - `Negate`: integer negation. Negating `i64::MIN` wraps to itself.
///
/// # Example
/// ```
/// use simian::{
///     ast::PrefixOperator,
///     interpreter::{evaluator::unary::eval_prefix, value::core::Value},
/// };
///
/// let v = eval_prefix(PrefixOperator::Negate, &Value::Integer(5)).unwrap();
/// assert_eq!(v, Value::Integer(-5));
///
/// let v = eval_prefix(PrefixOperator::Not, &Value::Integer(0)).unwrap();
/// assert_eq!(v, Value::TRUE);
///
/// let err = eval_prefix(PrefixOperator::Negate, &Value::TRUE).unwrap_err();
/// assert_eq!(err.to_string(), "unknown operator: -BOOLEAN");
/// ```
pub fn eval_prefix(operator: PrefixOperator, operand: &Value) -> EvalResult<Value> {
    match operator {
        PrefixOperator::Not => Ok(Value::from(!operand.is_truthy())),
        PrefixOperator::Negate => match operand {
            Value::Integer(n) => Ok(Value::Integer(n.wrapping_neg())),
            _ => Err(RuntimeError::UnknownPrefixOperator { operator,
                                                           operand: operand.kind() }),
        },
    }
}
