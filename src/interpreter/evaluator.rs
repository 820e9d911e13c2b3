/// Core evaluation logic.
///
/// Reduces every node kind to a runtime value against a shared
/// [`Environment`](crate::interpreter::environment::Environment).
pub mod core;

/// Function evaluation.
///
/// Dispatches calls to script bodies and bound host functions, including
/// argument marshalling and call-depth accounting.
pub mod function;
