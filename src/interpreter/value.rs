/// The runtime value model.
///
/// Declares the `Value` enum (`None`, `Int`, `Double`, `Reference`, `Native`),
/// its kind tags, conversions from host types, and the assignable reference
/// box.
pub mod core;

/// Numeric promotion and arithmetic.
///
/// `Int op Int` stays an `Int` for `+ - *`; any `Double` operand promotes the
/// result to `Double`; `/` and `^` always produce a `Double`.
pub mod arith;
