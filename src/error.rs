/// Parsing errors.
///
/// Defines the diagnostics the parser records while building the AST. Parse
/// errors are accumulated rather than returned early, so a single parse may
/// produce several of them.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors travel through the evaluator's result channel and halt the
/// statement sequence they occur in.
pub mod runtime_error;

use std::fmt;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// The failure of a complete parse-then-evaluate run.
///
/// The two channels stay separate: a run either fails before evaluation with
/// every diagnostic the parser recorded, or fails during evaluation with the
/// single runtime error that stopped it.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// The source had syntax errors; nothing was evaluated.
    Syntax(Vec<ParseError>),
    /// Evaluation stopped on a runtime error.
    Runtime(RuntimeError),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax(errors) => {
                for (i, error) in errors.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "\t{error}")?;
                }
                Ok(())
            },
            Self::Runtime(error) => write!(f, "ERROR: {error}"),
        }
    }
}

impl From<RuntimeError> for RunError {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}
