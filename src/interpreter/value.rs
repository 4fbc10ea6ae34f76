/// User-defined function values.
///
/// Defines the `Function` type produced by evaluating a function literal: the
/// parameter list, the body and the environment captured at the definition
/// site. The captured environment is what makes closures work.
pub mod function;

pub mod core;
