use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        cursor::TokenCursor,
        environment::Environment,
        lexer::TokenKind,
        parser::core::{ParseResult, parse_expression},
    },
    util::num::{NumericText, classify},
};

/// Parses a range with no operator outside parentheses as a function call.
///
/// The range must be `NAME ( ARGS )` where `NAME` is in the function table.
/// Arguments are split on every comma inside the parentheses, nested or not,
/// so a call that takes several arguments cannot itself be an argument.
///
/// # Errors
/// - `UnresolvedSymbol` if the leading name is not a function, variable or
///   number.
/// - `UnexpectedTrailingTokens` if anything follows the name other than one
///   balanced argument list.
/// - `UnexpectedToken` if the range does not start with a name.
/// - `MissingOperand` for an empty argument between commas.
pub fn parse_call(range: &TokenCursor, env: &mut Environment) -> ParseResult<Node> {
    let name = range.first().clone();

    if name.kind != TokenKind::Symbol {
        return Err(ParseError::UnexpectedToken { token: name.to_string(),
                                                 line:  name.line, });
    }

    let next = range.get(1);

    if !env.is_function(&name.text) {
        if env.is_variable(&name.text) || classify(&name.text) != NumericText::NotNumeric {
            return Err(ParseError::UnexpectedTrailingTokens { token: next.to_string(),
                                                              line:  next.line, });
        }
        return Err(ParseError::UnresolvedSymbol { symbol: name.text,
                                                  line:   name.line, });
    }

    if next.kind != TokenKind::LParen {
        return Err(ParseError::UnexpectedTrailingTokens { token: next.to_string(),
                                                          line:  next.line, });
    }

    let close = range.find_matching(TokenKind::LParen, TokenKind::RParen)
                     .ok_or(ParseError::UnmatchedParen { line: next.line })?;

    if close + 1 < range.len() {
        let extra = range.get(close + 1);
        return Err(ParseError::UnexpectedTrailingTokens { token: extra.to_string(),
                                                          line:  extra.line, });
    }

    let inner = range.slice(2, close);
    let arguments = if inner.is_empty() {
        Vec::new()
    } else {
        inner.split(TokenKind::Comma)
             .into_iter()
             .map(|argument| parse_argument(argument, env))
             .collect::<ParseResult<Vec<_>>>()?
    };

    tracing::trace!(name = %name.text, arguments = arguments.len(), "parsed call");

    Ok(Node::FunctionCall { name: name.text,
                            arguments,
                            line: name.line })
}

fn parse_argument(argument: TokenCursor, env: &mut Environment) -> ParseResult<Node> {
    if argument.is_empty() {
        return Err(ParseError::MissingOperand { operator: ",".into(),
                                                line:     argument.line(), });
    }
    parse_expression(argument, env)
}
