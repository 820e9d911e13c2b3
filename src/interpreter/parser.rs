/// Parser entry point and statement sequencing.
///
/// Strips grouping wrappers, splits a token range into statements and routes
/// each range to the right construct.
pub mod core;

/// Keyword statements.
///
/// Parses `fun NAME { ... }`, `var NAME = expr` and `return expr`, and
/// registers declared names in the environment.
pub mod statement;

/// Operator splitting.
///
/// Finds the rightmost, lowest-precedence operator outside parentheses and
/// builds binary operations and assignments around it.
pub mod binary;

/// Function calls.
///
/// Parses `NAME(arg, ...)` for names known to the function table.
pub mod call;

/// Single-token expressions.
///
/// Classifies a lone symbol as an integer, a double or a known variable.
pub mod literal;
