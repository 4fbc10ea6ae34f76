/// Parser state and token handling.
///
/// Declares the `Parser` struct, the one-token lookahead window over the
/// token stream and the diagnostic list, plus the `parse_program` entry point.
pub mod core;

/// Precedence climbing.
///
/// Holds the precedence table and the prefix/infix rule tables that drive
/// `parse_expression`.
pub mod expression;

/// Prefix parse rules: literals, identifiers, unary operators, grouping,
/// `if` and `fn`.
pub mod prefix;

/// Infix parse rules: binary operators and calls.
pub mod infix;

/// Statement dispatch and `let`/`return` recovery.
pub mod statement;

/// Braced blocks.
pub mod block;

/// Parameter and argument lists.
pub mod utils;
