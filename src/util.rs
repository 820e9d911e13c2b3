/// Numeric literal helpers.
///
/// The lexer never classifies numbers itself: every run of non-delimiter
/// characters becomes a `symbol`. This module decides whether such a symbol is
/// an integer literal, a floating literal, or neither, without losing range
/// information along the way.
pub mod num;
