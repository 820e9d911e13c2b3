use thiserror::Error;

/// Represents all errors that can occur while building the AST.
///
/// Lexing cannot fail, so every variant here comes from the parser. Each one
/// carries the line of the offending token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Found a token that does not fit where it appears.
    #[error("Error on line {line}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// Description of the token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of a token range while a construct was incomplete.
    #[error("Error on line {line}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// `fun NAME` was not followed by `{`.
    #[error("Error on line {line}: Expected '{{' after function name.")]
    ExpectedOpeningBrace {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A function body was opened with `{` but never closed.
    #[error("Error on line {line}: Expected closing brace '}}' but none found.")]
    ExpectedClosingBrace {
        /// The source line where the error occurred.
        line: usize,
    },
    /// `var NAME` was not followed by `=`.
    #[error("Error on line {line}: Expected '=' after variable name.")]
    ExpectedEquals {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A parenthesis has no partner.
    #[error("Error on line {line}: Unmatched parenthesis.")]
    UnmatchedParen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A single symbol is neither a number, a known variable nor a callable
    /// function.
    #[error("Error on line {line}: Unable to parse symbol '{symbol}'.")]
    UnresolvedSymbol {
        /// The text of the symbol.
        symbol: String,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// Tokens remained after a complete construct.
    #[error("Error on line {line}: Extra tokens after expression: {token}.")]
    UnexpectedTrailingTokens {
        /// The first extra token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The left side of `=` is not a single name.
    #[error("Error on line {line}: Left side of '=' must be a variable name.")]
    InvalidAssignmentTarget {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A binary operator is missing its left or right operand.
    #[error("Error on line {line}: Operator '{operator}' is missing an operand.")]
    MissingOperand {
        /// The operator lexeme.
        operator: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Tried to declare a reserved word as a name.
    #[error("Error on line {line}: Identifier {name} is reserved.")]
    IdentifierReserved {
        /// The reserved identifier.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An integer literal does not fit in 32 bits.
    #[error("Error on line {line}: Literal is too large.")]
    LiteralTooLarge {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl ParseError {
    /// Returns the line the error was reported on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::UnexpectedEndOfInput { line }
            | Self::ExpectedOpeningBrace { line }
            | Self::ExpectedClosingBrace { line }
            | Self::ExpectedEquals { line }
            | Self::UnmatchedParen { line }
            | Self::UnresolvedSymbol { line, .. }
            | Self::UnexpectedTrailingTokens { line, .. }
            | Self::InvalidAssignmentTarget { line }
            | Self::MissingOperand { line, .. }
            | Self::IdentifierReserved { line, .. }
            | Self::LiteralTooLarge { line } => *line,
        }
    }
}
