use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::EvalResult,
            function::{len, println},
        },
        value::core::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values and returns a
/// value or the error describing why it rejected them.
type BuiltinFn = fn(&[Value]) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `Variadic` accepts any number, including none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    Variadic,
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - the arity it accepts,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `Builtin` (one registry entry),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        /// A host function callable from scripts.
        #[derive(Debug)]
        pub struct Builtin {
            /// The name scripts call it by.
            pub name:  &'static str,
            /// The argument counts it accepts.
            pub arity: Arity,
            func:      BuiltinFn,
        }
        static BUILTIN_TABLE: &[Builtin] = &[
            $(
                Builtin { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of every registered builtin.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "len"     => { arity: Arity::Exact(1), func: len::len },
    "println" => { arity: Arity::Variadic, func: println::println },
}

impl Builtin {
    /// Checks the argument count, then runs the builtin.
    ///
    /// # Example
    /// ```
    /// use simian::interpreter::{evaluator::function::builtin::lookup, value::core::Value};
    ///
    /// let len = lookup("len").unwrap();
    ///
    /// assert_eq!(len.call(&[Value::from("four")]).unwrap(), Value::Integer(4));
    /// assert!(len.call(&[]).is_err());
    /// ```
    pub fn call(&self, args: &[Value]) -> EvalResult<Value> {
        if let Arity::Exact(expected) = self.arity
           && args.len() != expected
        {
            return Err(RuntimeError::ArgumentCountMismatch { expected,
                                                             found: args.len() });
        }

        tracing::trace!(name = self.name, args = args.len(), "calling builtin");
        (self.func)(args)
    }
}

/// Finds the builtin registered under `name`.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static Builtin> {
    BUILTIN_TABLE.iter().find(|builtin| builtin.name == name)
}
