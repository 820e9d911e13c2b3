/// The binding module exposes host functions to scripts.
///
/// Host callables with `i32`/`f64` parameters are wrapped in an adapter that
/// reads the parameter stack, checks every argument's kind and wraps the
/// result back into a runtime value.
pub mod binding;
/// A positional view over tokens with balanced-delimiter and precedence
/// searches. The parser works entirely in terms of cursor ranges.
pub mod cursor;
/// The engine ties the pipeline together behind one long-lived environment.
pub mod engine;
/// Variables, functions and the argument scratch stack shared by parsing and
/// evaluation.
pub mod environment;
/// The evaluator module reduces syntax trees to runtime values.
///
/// # Responsibilities
/// - Evaluates every node kind against a shared environment.
/// - Dispatches calls to script bodies and host functions.
/// - Reports runtime errors such as undefined names, kind mismatches and
///   integer overflow.
pub mod evaluator;
/// The lexer module splits source text into tokens.
///
/// Delimiters come from a fixed table; everything between them is a symbol.
/// Lexing cannot fail.
pub mod lexer;
/// The parser module builds the syntax tree from a token range.
///
/// # Responsibilities
/// - Splits ranges into statements and recognizes `fun`, `var` and `return`.
/// - Chooses each expression's operator by rightmost-lowest-precedence search.
/// - Registers declared names so later statements resolve them.
pub mod parser;
/// The value module defines runtime values and their arithmetic.
pub mod value;
