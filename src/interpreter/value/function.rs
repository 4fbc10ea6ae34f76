use std::fmt;

use crate::{
    ast::{Block, Identifier},
    interpreter::environment::Env,
};

/// A closure: parameters and body copied out of a function literal, plus the
/// environment that was active where the literal was evaluated.
pub struct Function {
    /// Parameter names, bound positionally at call time.
    pub parameters: Vec<Identifier>,
    /// The body evaluated on each call.
    pub body:       Block,
    /// The defining environment. Call frames enclose it.
    pub env:        Env,
}

// The captured environment may contain this very function, so it is left out.
impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
         .field("parameters", &self.parameters)
         .field("body", &self.body)
         .finish_non_exhaustive()
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parameters = self.parameters
                             .iter()
                             .map(|p| p.name.as_str())
                             .collect::<Vec<_>>()
                             .join(", ");
        write!(f, "fn({parameters}) {}", self.body)
    }
}
