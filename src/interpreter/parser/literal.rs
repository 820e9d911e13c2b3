use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        environment::Environment,
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
    },
    util::num::{NumericText, classify},
};

/// Parses a range made of exactly one token.
///
/// The token is tried as an integer literal, then a floating literal, then a
/// variable already known to `env`.
///
/// # Errors
/// - `LiteralTooLarge` for an integer that does not fit in 32 bits.
/// - `UnresolvedSymbol` for any other unknown name.
/// - `UnexpectedToken` if the token is not a symbol.
pub fn parse_single(token: &Token, env: &Environment) -> ParseResult<Node> {
    if token.kind != TokenKind::Symbol {
        return Err(ParseError::UnexpectedToken { token: token.to_string(),
                                                 line:  token.line, });
    }

    let text = token.text.clone();
    let line = token.line;

    match classify(&text) {
        NumericText::Int(_) => Ok(Node::IntLiteral { text, line }),
        NumericText::IntOutOfRange => Err(ParseError::LiteralTooLarge { line }),
        NumericText::Double(_) => Ok(Node::DoubleLiteral { text, line }),
        NumericText::NotNumeric if env.is_variable(&text) => Ok(Node::VariableRef { name: text, line }),
        NumericText::NotNumeric => Err(ParseError::UnresolvedSymbol { symbol: text, line }),
    }
}
