use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

impl Value {
    /// Applies a binary arithmetic operator to two values.
    ///
    /// References on either side are read through first. The promotion rules
    /// are:
    /// - `Int + Int`, `Int - Int`, `Int * Int` stay `Int` and are checked for
    ///   32-bit overflow.
    /// - `/` and `^` (`pow`) always produce a `Double`, so `1 / 2` is `0.5`.
    ///   Division by zero follows IEEE rules and yields an infinity or NaN.
    /// - Any `Double` operand promotes the result to `Double`.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Errors
    /// - `RuntimeError::Overflow` if an integer result leaves the `i32` range.
    /// - `RuntimeError::TypeMismatch` if either operand is `None` or `Native`.
    ///
    /// # Example
    /// ```
    /// use bean::{ast::BinaryOperator, interpreter::value::core::Value};
    ///
    /// let sum = Value::Int(1).apply(BinaryOperator::Add, &Value::Double(2.1), 1).unwrap();
    /// assert_eq!(sum, Value::Double(3.1));
    ///
    /// let half = Value::Int(1).apply(BinaryOperator::Div, &Value::Int(2), 1).unwrap();
    /// assert_eq!(half, Value::Double(0.5));
    /// ```
    pub fn apply(&self, op: BinaryOperator, right: &Self, line: usize) -> EvalResult<Self> {
        use BinaryOperator::{Add, Div, Mul, Pow, Sub};

        let left = self.get();
        let right = right.get();

        match (&left, &right) {
            (Self::Int(a), Self::Int(b)) if matches!(op, Add | Sub | Mul) => {
                let result = match op {
                    Add => a.checked_add(*b),
                    Sub => a.checked_sub(*b),
                    _ => a.checked_mul(*b),
                };
                result.map(Self::Int)
                      .ok_or(RuntimeError::Overflow { line })
            },
            _ => {
                let (Some(a), Some(b)) = (left.as_number(), right.as_number()) else {
                    return Err(RuntimeError::TypeMismatch { details: format!("cannot apply '{op}' to {} and {}",
                                                                             left.kind(),
                                                                             right.kind()),
                                                            line });
                };

                Ok(Self::Double(match op {
                                    Add => a + b,
                                    Sub => a - b,
                                    Mul => a * b,
                                    Div => a / b,
                                    Pow => a.powf(b),
                                }))
            },
        }
    }

    /// Widens a numeric value to `f64`.
    fn as_number(&self) -> Option<f64> {
        match self {
            Self::Int(n) => Some(f64::from(*n)),
            Self::Double(d) => Some(*d),
            _ => None,
        }
    }
}
