use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Applies a binary operator to two integers.
///
/// Arithmetic wraps on overflow. Division truncates toward zero; dividing by
/// zero is an error.
pub fn eval_integer_infix(operator: InfixOperator, left: i64, right: i64) -> EvalResult<Value> {
    use InfixOperator::{
        Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Sub,
    };

    let value = match operator {
        Add => Value::Integer(left.wrapping_add(right)),
        Sub => Value::Integer(left.wrapping_sub(right)),
        Mul => Value::Integer(left.wrapping_mul(right)),
        Div => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero { dividend: left });
            }
            Value::Integer(left.wrapping_div(right))
        },
        Less => Value::from(left < right),
        LessEqual => Value::from(left <= right),
        Greater => Value::from(left > right),
        GreaterEqual => Value::from(left >= right),
        Equal => Value::from(left == right),
        NotEqual => Value::from(left != right),
    };

    Ok(value)
}
