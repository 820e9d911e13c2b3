//! # bean
//!
//! bean is a small embeddable scripting language. Scripts declare variables
//! and zero-argument functions, do integer and floating arithmetic, and call
//! functions bound from the host program.
//!
//! ```
//! use bean::{Engine, interpreter::value::core::Value};
//!
//! let mut engine = Engine::new();
//! engine.bind("add_two_ints", |a: i32, b: i32| a + b);
//!
//! let result = engine.evaluate("var x = (1 + 2); add_two_ints(x, 4) * 2").unwrap();
//! assert_eq!(result, Value::Int(14));
//! assert_eq!(engine.get_variable("x"), Some(Value::Int(3)));
//! ```

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
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

/// Defines the structure of parsed code.
///
/// This module declares the `Node` enum that represents a program as a tree,
/// together with its JSON rendering. The tree is built by the parser and
/// walked by the evaluator.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// Every error carries the line it was raised on. `Error` is the type
/// returned at the engine boundary.
pub mod error;
/// The lexer, parser, evaluator, runtime values and host bindings.
pub mod interpreter;
/// Numeric text helpers shared by the parser and the evaluator.
pub mod util;

pub use crate::{
    error::Error,
    interpreter::{
        engine::{Engine, EngineOptions},
        value::core::Value,
    },
};

/// Evaluates a script with a fresh engine.
///
/// # Returns
/// The value of the last statement.
///
/// # Examples
/// ```
/// use bean::{Value, evaluate};
///
/// assert_eq!(evaluate("9 * 7 / 4").unwrap(), Value::Double(15.75));
///
/// // Assignment to a name that was never declared.
/// assert!(evaluate("y = 1").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<Value, Error> {
    Engine::new().evaluate(source)
}
