use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        cursor::TokenCursor,
        environment::Environment,
        lexer::{Token, TokenKind},
        parser::{
            binary::parse_binary,
            call::parse_call,
            literal::parse_single,
            statement::{is_keyword, parse_function, parse_return, parse_variable, statement_end},
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole program.
///
/// The environment is updated as declarations are seen: every `fun` name is
/// registered before its body is parsed and every `var` name after its
/// initializer, so later statements can refer to them. Names registered by a
/// parse that fails later stay registered.
///
/// # Parameters
/// - `tokens`: Output of the lexer, whitespace included.
/// - `env`: The environment used for name resolution.
///
/// # Returns
/// The single statement of the program, or a `StatementList` if there are
/// zero or several.
///
/// # Errors
/// The first `ParseError` found.
///
/// # Example
/// ```
/// use bean::{
///     ast::Node,
///     interpreter::{environment::Environment, lexer::tokenize, parser::core::parse},
/// };
///
/// let mut env = Environment::new();
/// let ast = parse(tokenize("var x = 1; x + 2"), &mut env).unwrap();
///
/// assert!(matches!(ast, Node::StatementList { ref statements, .. } if statements.len() == 2));
/// assert!(env.is_variable("x"));
/// ```
pub fn parse(tokens: Vec<Token>, env: &mut Environment) -> ParseResult<Node> {
    let cursor = TokenCursor::new(tokens);
    check_parentheses(&cursor)?;

    let ast = parse_statements(&cursor, env)?;
    tracing::debug!(root = ast.type_name(), "parsed program");
    Ok(ast)
}

/// Parses a range as a sequence of statements.
///
/// Statements end at a top-level `;`, or, for `fun`, at the brace that
/// closes the body. Stray semicolons are skipped.
///
/// # Returns
/// The only statement if there is exactly one, otherwise a `StatementList`.
pub fn parse_statements(range: &TokenCursor, env: &mut Environment) -> ParseResult<Node> {
    let line = range.line();
    let mut statements = Vec::new();
    let mut index = 0;

    while index < range.len() {
        let token = range.get(index);

        let (statement, next) = match token.kind {
            TokenKind::Semicolon => {
                index += 1;
                continue;
            },
            TokenKind::Symbol if token.text == "fun" => parse_function(range, index, env)?,
            TokenKind::Symbol if token.text == "var" => parse_variable(range, index, env)?,
            TokenKind::Symbol if token.text == "return" => parse_return(range, index, env)?,
            _ => {
                let end = statement_end(range, index);
                (parse_expression(range.slice(index, end), env)?, end)
            },
        };

        statements.push(statement);
        index = next;
    }

    if statements.len() == 1
       && let Some(statement) = statements.pop()
    {
        return Ok(statement);
    }

    Ok(Node::StatementList { statements, line })
}

/// Parses a range as a single expression.
///
/// Wrapping `( ... )` and `{ ... }` pairs that span the whole range are
/// removed first. A range that turns out to hold statements (a leading
/// keyword or a top-level `;`) is handed back to [`parse_statements`].
///
/// # Errors
/// - `UnexpectedEndOfInput` for an empty range.
/// - `UnmatchedParen` if parentheses do not balance.
/// - Any error from the sub-parsers.
pub fn parse_expression(mut range: TokenCursor, env: &mut Environment) -> ParseResult<Node> {
    strip_wrappers(&mut range);

    if range.is_empty() {
        return Err(ParseError::UnexpectedEndOfInput { line: range.line() });
    }

    if is_keyword(range.first()) || range.find_first_top_level(TokenKind::Semicolon).is_some() {
        return parse_statements(&range, env);
    }

    check_parentheses(&range)?;

    if range.len() == 1 {
        return parse_single(range.first(), env);
    }

    if let Some(node) = parse_binary(&range, env)? {
        return Ok(node);
    }

    parse_call(&range, env)
}

/// Removes every `()` or `{}` pair that encloses the entire range.
fn strip_wrappers(range: &mut TokenCursor) {
    while range.is_wrapped(TokenKind::LParen, TokenKind::RParen)
          || range.is_wrapped(TokenKind::LBrace, TokenKind::RBrace)
    {
        range.strip_ends();
    }
}

/// Checks that every `(` in the range has a matching `)`.
fn check_parentheses(range: &TokenCursor) -> ParseResult<()> {
    let mut open = Vec::new();

    for token in range.iter() {
        match token.kind {
            TokenKind::LParen => open.push(token.line),
            TokenKind::RParen => {
                if open.pop().is_none() {
                    return Err(ParseError::UnmatchedParen { line: token.line });
                }
            },
            _ => {},
        }
    }

    match open.first() {
        Some(&line) => Err(ParseError::UnmatchedParen { line }),
        None => Ok(()),
    }
}
