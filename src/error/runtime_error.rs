use thiserror::Error;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Assigned to a name that was never declared with `var`.
    #[error("Error on line {line}: Undefined variable '{name}'.")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a name that has no function registered under it.
    #[error("Error on line {line}: Undefined function '{name}'.")]
    UndefinedFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Operand or argument kinds do not fit the operation.
    #[error("Error on line {line}: Type mismatch: {details}.")]
    TypeMismatch {
        /// Details about the mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A function received a different number of arguments than it takes.
    #[error("Error on line {line}: Function '{name}' expects {expected} argument(s) but got \
             {found}.")]
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// Number of parameters declared.
        expected: usize,
        /// Number of arguments supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Integer arithmetic left the `i32` range.
    #[error("Error on line {line}: Integer overflow while trying to compute result.")]
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to `set` a value that is not a reference.
    #[error("Error on line {line}: This value is not assignable.")]
    NotAssignable {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Script function calls nested past the configured limit.
    #[error("Error on line {line}: Call to '{name}' exceeds the maximum call depth of {limit}.")]
    RecursionLimit {
        /// The function whose call crossed the limit.
        name:  String,
        /// The configured limit.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl RuntimeError {
    /// Returns the line the error was reported on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UndefinedVariable { line, .. }
            | Self::UndefinedFunction { line, .. }
            | Self::TypeMismatch { line, .. }
            | Self::ArgumentCountMismatch { line, .. }
            | Self::Overflow { line }
            | Self::NotAssignable { line }
            | Self::RecursionLimit { line, .. } => *line,
        }
    }
}
