/// Call evaluation.
///
/// Evaluates the callee and the arguments, then applies user-defined
/// functions in a fresh enclosed scope or hands the arguments to a builtin.
pub mod core;

/// The builtin registry.
///
/// A static table mapping names to host functions and their arity.
pub mod builtin;

/// `len(string)`.
pub mod len;

/// `println(args...)`.
pub mod println;
