use std::{fmt, rc::Rc};

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::function::builtin::Builtin, value::function::Function},
};

/// Represents a runtime value in the interpreter.
///
/// Booleans and null are only ever produced through [`Value::TRUE`],
/// [`Value::FALSE`] and [`Value::NULL`] (or `Value::from(bool)`, which returns
/// those constants), so comparing two of them is comparing identities.
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// An immutable string.
    String(Rc<str>),
    /// A boolean value (`true` or `false`).
    Boolean(bool),
    /// The absence of a value.
    Null,
    /// A user-defined function together with its captured environment.
    Function(Rc<Function>),
    /// A host-provided function from the builtin registry.
    Builtin(&'static Builtin),
    /// A runtime error, as seen at the public evaluation boundary.
    Error(RuntimeError),
}

/// The type tag of a [`Value`], as named in runtime error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Integer,
    String,
    Boolean,
    Null,
    Function,
    Builtin,
    Error,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Integer => "INTEGER",
            Self::String => "STRING",
            Self::Boolean => "BOOLEAN",
            Self::Null => "NULL",
            Self::Function => "FUNCTION",
            Self::Builtin => "BUILTIN",
            Self::Error => "ERROR",
        };
        write!(f, "{name}")
    }
}

impl Value {
    /// The shared `true` value.
    pub const TRUE: Self = Self::Boolean(true);
    /// The shared `false` value.
    pub const FALSE: Self = Self::Boolean(false);
    /// The shared `null` value.
    pub const NULL: Self = Self::Null;

    /// Returns the type tag of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Integer(_) => ValueKind::Integer,
            Self::String(_) => ValueKind::String,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Null => ValueKind::Null,
            Self::Function(_) => ValueKind::Function,
            Self::Builtin(_) => ValueKind::Builtin,
            Self::Error(_) => ValueKind::Error,
        }
    }

    /// Maps this value to a boolean for use in conditionals.
    ///
    /// `null`, `false` and the integer `0` are falsy; every other value is
    /// truthy.
    ///
    /// # Example
    /// ```
    /// use simian::interpreter::value::core::Value;
    ///
    /// assert!(!Value::NULL.is_truthy());
    /// assert!(!Value::Integer(0).is_truthy());
    /// assert!(Value::Integer(-3).is_truthy());
    /// assert!(Value::from("").is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        match self {
            Self::Null | Self::Boolean(false) | Self::Integer(0) => false,
            _ => true,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        if v { Self::TRUE } else { Self::FALSE }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(Rc::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(Rc::from(v))
    }
}

/// Structural equality for scalars, identity for functions.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Null, Self::Null) => true,
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::Builtin(a), Self::Builtin(b)) => a.name == b.name,
            (Self::Error(a), Self::Error(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Null => write!(f, "null"),
            Self::Function(function) => write!(f, "{function}"),
            Self::Builtin(builtin) => write!(f, "builtin function {}", builtin.name),
            Self::Error(error) => write!(f, "ERROR: {error}"),
        }
    }
}
