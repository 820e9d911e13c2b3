use std::rc::Rc;

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        cursor::TokenCursor,
        environment::Environment,
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, parse_expression, parse_statements},
    },
    util::num::{NumericText, classify},
};

/// Words that start a statement and cannot be used as names.
pub const KEYWORDS: [&str; 3] = ["fun", "var", "return"];

/// Returns `true` if the token is one of the statement keywords.
#[must_use]
pub fn is_keyword(token: &Token) -> bool {
    token.kind == TokenKind::Symbol && KEYWORDS.contains(&token.text.as_str())
}

/// Index one past the last token of the statement starting at `start`: the
/// next top-level `;`, or the end of the range.
#[must_use]
pub fn statement_end(range: &TokenCursor, start: usize) -> usize {
    range.slice(start, range.len())
         .find_first_top_level(TokenKind::Semicolon)
         .map_or(range.len(), |offset| start + offset)
}

/// Parses `fun NAME { BODY }` starting at the `fun` keyword.
///
/// The name is registered as a declared function before the body is parsed,
/// so the body and every later statement can call it.
///
/// # Parameters
/// - `range`: The statement sequence being parsed.
/// - `index`: Position of the `fun` keyword.
/// - `env`: Environment used for name registration.
///
/// # Returns
/// The `FunctionDef` node and the index just past the closing brace.
///
/// # Errors
/// - `UnexpectedToken` or `IdentifierReserved` for a bad name.
/// - `ExpectedOpeningBrace` if the name is not followed by `{`.
/// - `ExpectedClosingBrace` if the body is never closed.
pub fn parse_function(range: &TokenCursor,
                      index: usize,
                      env: &mut Environment)
                      -> ParseResult<(Node, usize)> {
    let line = range.get(index).line;
    let name = expect_name(range, index + 1, line)?;

    if range.get(index + 2).kind != TokenKind::LBrace {
        return Err(ParseError::ExpectedOpeningBrace { line });
    }

    let close = range.slice(index + 2, range.len())
                     .find_matching(TokenKind::LBrace, TokenKind::RBrace)
                     .map(|offset| index + 2 + offset)
                     .ok_or(ParseError::ExpectedClosingBrace { line })?;

    env.declare_function(&name);
    let body = parse_statements(&range.slice(index + 3, close), env)?;

    Ok((Node::FunctionDef { name,
                            body: Rc::new(body),
                            line },
        close + 1))
}

/// Parses `var NAME = EXPR` starting at the `var` keyword.
///
/// The name becomes a known variable once its initializer has parsed.
///
/// # Returns
/// The `DeclareAndAssign` node and the index of the terminating `;` (or the
/// end of the range).
///
/// # Errors
/// - `UnexpectedToken` or `IdentifierReserved` for a bad name.
/// - `ExpectedEquals` if the name is not followed by `=`.
/// - `UnexpectedEndOfInput` if the initializer is missing.
pub fn parse_variable(range: &TokenCursor,
                      index: usize,
                      env: &mut Environment)
                      -> ParseResult<(Node, usize)> {
    let line = range.get(index).line;
    let name = expect_name(range, index + 1, line)?;

    if range.get(index + 2).kind != TokenKind::Equals {
        return Err(ParseError::ExpectedEquals { line });
    }

    let end = statement_end(range, index + 3);
    let value = parse_expression(range.slice(index + 3, end), env)?;
    env.declare_variable(&name);

    Ok((Node::DeclareAndAssign { name,
                                 value: Box::new(value),
                                 line },
        end))
}

/// Parses `return EXPR` starting at the `return` keyword.
///
/// # Returns
/// The `Return` node and the index of the terminating `;` (or the end of the
/// range).
pub fn parse_return(range: &TokenCursor,
                    index: usize,
                    env: &mut Environment)
                    -> ParseResult<(Node, usize)> {
    let line = range.get(index).line;
    let end = statement_end(range, index + 1);
    let value = parse_expression(range.slice(index + 1, end), env)?;

    Ok((Node::Return { value: Box::new(value),
                       line },
        end))
}

/// Reads the name after `fun` or `var`.
fn expect_name(range: &TokenCursor, index: usize, line: usize) -> ParseResult<String> {
    let token = range.get(index);

    if !token.is_valid() {
        return Err(ParseError::UnexpectedEndOfInput { line });
    }
    if token.kind != TokenKind::Symbol || classify(&token.text) != NumericText::NotNumeric {
        return Err(ParseError::UnexpectedToken { token: token.to_string(),
                                                 line:  token.line, });
    }
    if is_keyword(token) {
        return Err(ParseError::IdentifierReserved { name: token.text.clone(),
                                                    line: token.line, });
    }

    Ok(token.text.clone())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::interpreter::{environment::Function, lexer::tokenize, parser::core::parse};

    #[test]
    fn functions_are_declared_before_their_body() {
        let mut env = Environment::new();
        let ast = parse(tokenize("fun loop { loop() }"), &mut env).unwrap();

        let Node::FunctionDef { name, body, .. } = ast else {
            panic!("expected a function definition");
        };
        assert_eq!(name, "loop");
        assert!(matches!(*body, Node::FunctionCall { ref name, .. } if name == "loop"));
        assert!(matches!(env.function("loop"), Some(Function::Declared)));
    }

    #[test]
    fn variables_are_known_after_their_initializer() {
        let mut env = Environment::new();
        let err = parse(tokenize("var x = x + 1"), &mut env).unwrap_err();
        assert_eq!(err,
                   ParseError::UnresolvedSymbol { symbol: "x".into(),
                                                  line:   1, });

        let mut env = Environment::new();
        assert!(parse(tokenize("var x = 1; var y = x"), &mut env).is_ok());
        assert!(env.is_variable("x") && env.is_variable("y"));
    }

    #[test]
    fn malformed_declarations() {
        let mut env = Environment::new();

        assert_eq!(parse(tokenize("fun f return 1"), &mut env),
                   Err(ParseError::ExpectedOpeningBrace { line: 1 }));
        assert_eq!(parse(tokenize("fun f {\nreturn 1"), &mut env),
                   Err(ParseError::ExpectedClosingBrace { line: 1 }));
        assert_eq!(parse(tokenize("var x 3"), &mut env), Err(ParseError::ExpectedEquals { line: 1 }));
        assert_eq!(parse(tokenize("var return = 3"), &mut env),
                   Err(ParseError::IdentifierReserved { name: "return".into(),
                                                        line: 1, }));
        assert_eq!(parse(tokenize("var 7 = 3"), &mut env),
                   Err(ParseError::UnexpectedToken { token: "symbol(7)".into(),
                                                     line:  1, }));
        assert_eq!(parse(tokenize("var"), &mut env), Err(ParseError::UnexpectedEndOfInput { line: 1 }));
        assert_eq!(parse(tokenize("var x ="), &mut env),
                   Err(ParseError::UnexpectedEndOfInput { line: 1 }));
    }

    #[test]
    fn statements_after_a_body_continue() {
        let mut env = Environment::new();
        let ast = parse(tokenize("fun get_pi { return 3.14159265 } get_pi()"), &mut env).unwrap();

        let Node::StatementList { statements, .. } = ast else {
            panic!("expected a statement list");
        };
        assert_eq!(statements.len(), 2);
        assert!(matches!(statements[1], Node::FunctionCall { ref arguments, .. } if arguments.is_empty()));
    }
}
