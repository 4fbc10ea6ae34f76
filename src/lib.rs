//! # simian
//!
//! simian is a small, dynamically typed scripting language with integers,
//! strings, booleans, first-class functions and closures. Source text is
//! parsed by a Pratt parser that collects syntax errors as diagnostics, and
//! the resulting tree is run by a tree-walking evaluator.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Program,
    error::{ParseError, RunError},
    interpreter::{
        environment::{Env, Environment},
        evaluator::core::eval_program,
        parser::core::Parser,
        value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and related types
/// that represent source code as a tree, together with the canonical text
/// form each node renders to. The AST is built by the parser and traversed
/// by the evaluator.
pub mod ast;
/// Provides error types for parsing and evaluation.
///
/// # Responsibilities
/// - Defines the diagnostics the parser records, with line and column.
/// - Defines the runtime errors the evaluator raises.
/// - Combines both for callers that run source text end to end.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, environments and
/// value representations.
pub mod interpreter;
/// The interactive read-eval-print loop.
pub mod repl;

pub use interpreter::evaluator::core::evaluate;

/// Parses `source` into a program.
///
/// # Returns
/// The program and every diagnostic recorded while parsing it. The program
/// is returned even when there are diagnostics; statements that failed to
/// parse are missing from it.
///
/// # Example
/// ```
/// use simian::parse;
///
/// let (program, errors) = parse("let x = 5; let = 10;");
///
/// assert_eq!(program.statements.len(), 1);
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors[0].to_string(),
///            "Error on line 1, column 16: expected next token to be IDENT, got = instead.");
/// ```
#[must_use]
pub fn parse(source: &str) -> (Program, Vec<ParseError>) {
    Parser::from_source(source).parse_program()
}

/// A sequence of runs sharing one outermost environment.
///
/// Bindings made by one run are visible to the next, which is how the REPL
/// keeps its state between lines.
///
/// # Example
/// ```
/// use simian::{Session, interpreter::value::core::Value};
///
/// let session = Session::new();
///
/// assert_eq!(session.run("let x = 40;").unwrap(), None);
/// assert_eq!(session.run("x + 2").unwrap(), Some(Value::Integer(42)));
/// assert!(session.run("y").is_err());
/// ```
#[derive(Debug)]
pub struct Session {
    env: Env,
}

impl Session {
    /// Creates a session with an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self { env: Environment::new() }
    }

    /// Parses and evaluates `source` in this session's environment.
    ///
    /// Nothing is evaluated if the source has syntax errors.
    ///
    /// # Returns
    /// The value of the last statement, or `None` if there is none.
    pub fn run(&self, source: &str) -> Result<Option<Value>, RunError> {
        let (program, errors) = parse(source);
        if !errors.is_empty() {
            return Err(RunError::Syntax(errors));
        }

        Ok(eval_program(&program, &self.env)?)
    }

    /// The session's outermost environment.
    #[must_use]
    pub const fn environment(&self) -> &Env {
        &self.env
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs a complete script in a fresh session.
///
/// When `pipe_mode` is set, the value of the script's last statement is
/// printed, if it has one.
///
/// # Examples
/// ```
/// use simian::run_script;
///
/// // A well-formed script runs to completion.
/// assert!(run_script("let add = fn(a, b) { a + b }; add(1, 2)", false).is_ok());
///
/// // An unbound name is a runtime error.
/// assert!(run_script("let y = x + 1;", false).is_err());
///
/// // A syntax error stops the script before it runs.
/// assert!(run_script("let 5;", false).is_err());
/// ```
pub fn run_script(source: &str, pipe_mode: bool) -> Result<(), RunError> {
    let result = Session::new().run(source)?;

    if pipe_mode && let Some(value) = result {
        println!("{value}");
    }

    Ok(())
}
