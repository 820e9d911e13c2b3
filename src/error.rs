use std::path::PathBuf;

use thiserror::Error;

/// Parsing errors.
///
/// Malformed `fun`/`var`/`return` forms, unmatched delimiters, and symbols
/// that resolve to nothing. The lexer itself never fails, so these are the
/// earliest errors a script can produce.
pub mod parse_error;
/// Runtime errors.
///
/// Undefined names, kind mismatches in arithmetic or native bindings, integer
/// overflow, and runaway recursion.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// The error returned at the engine boundary.
///
/// Wraps whichever stage failed first. Scripts are deterministic, so the same
/// text always fails the same way.
#[derive(Debug, Error)]
pub enum Error {
    /// The script could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The script parsed but failed while running.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    /// A script file could not be read.
    #[error("Failed to read script file '{}': {source}", .path.display())]
    Io {
        /// The path that was requested.
        path:   PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Returns the originating source line, if the error has one.
    ///
    /// # Example
    /// ```
    /// let err = bean::evaluate("var x = 1;\ny = 2;").unwrap_err();
    /// assert_eq!(err.line(), Some(2));
    /// ```
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::Parse(e) => Some(e.line()),
            Self::Runtime(e) => Some(e.line()),
            Self::Io { .. } => None,
        }
    }

    /// Returns `true` if parsing failed.
    #[must_use]
    pub const fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }

    /// Returns `true` if evaluation failed.
    #[must_use]
    pub const fn is_runtime(&self) -> bool {
        matches!(self, Self::Runtime(_))
    }
}
