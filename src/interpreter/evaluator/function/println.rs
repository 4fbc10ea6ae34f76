use std::fmt::Write;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Prints its arguments to standard output and returns `null`.
///
/// Arguments are concatenated without a separator, followed by a newline.
/// Nothing is printed when the concatenation is empty. Only strings,
/// integers and booleans can be printed.
pub fn println(args: &[Value]) -> EvalResult<Value> {
    let mut line = String::new();

    for arg in args {
        match arg {
            Value::String(_) | Value::Integer(_) | Value::Boolean(_) => {
                let _ = write!(line, "{arg}");
            },
            _ => {
                return Err(RuntimeError::UnsupportedArgument { builtin: "println",
                                                               kind:    arg.kind(), });
            },
        }
    }

    if !line.is_empty() {
        println!("{line}");
    }
    Ok(Value::NULL)
}
