use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Returns the length of a string in bytes.
///
/// Accepts exactly one argument, which must be a string.
///
/// # Example
/// ```
/// use simian::interpreter::{evaluator::function::len::len, value::core::Value};
///
/// assert_eq!(len(&[Value::from("hello")]).unwrap(), Value::Integer(5));
///
/// let err = len(&[Value::Integer(1)]).unwrap_err();
/// assert_eq!(err.to_string(), "argument to `len` not supported, got INTEGER");
/// ```
pub fn len(args: &[Value]) -> EvalResult<Value> {
    match args {
        [Value::String(s)] => Ok(Value::Integer(i64::try_from(s.len()).unwrap_or(i64::MAX))),
        [other] => Err(RuntimeError::UnsupportedArgument { builtin: "len",
                                                           kind:    other.kind(), }),
        _ => Err(RuntimeError::ArgumentCountMismatch { expected: 1,
                                                       found:    args.len(), }),
    }
}
