/// Lexical scopes for evaluation.
///
/// An environment maps names to values and links to the scope that encloses
/// it. Function values capture the environment they were created in, which
/// is what makes closures work.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST, evaluates expressions and statements, applies
/// operators and functions, and produces a value. Runtime errors stop
/// evaluation of the enclosing statement sequence and surface as
/// `Value::Error` at the public boundary.
///
/// # Responsibilities
/// - Evaluates every AST node kind.
/// - Propagates `return` out of nested blocks to the nearest function call.
/// - Reports runtime errors such as unknown identifiers or type mismatches.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// corresponding to an identifier, literal, operator, delimiter or keyword,
/// tagged with its line and column.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A Pratt parser: prefix and infix rules are looked up by token kind, and
/// operator precedence decides how far each expression extends. Syntax
/// errors are collected as diagnostics instead of stopping the parse.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum and its type tags.
/// - Defines truthiness, equality and the printed form of values.
/// - Defines user-defined function values and their captured environment.
pub mod value;
