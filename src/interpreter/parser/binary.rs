use crate::{
    ast::{BinaryOperator, Node},
    error::ParseError,
    interpreter::{
        cursor::TokenCursor,
        environment::Environment,
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            statement::is_keyword,
        },
    },
    util::num::{NumericText, classify},
};

/// Operator kinds grouped by precedence, lowest first.
const PRECEDENCE_LEVELS: [&[TokenKind]; 4] = [&[TokenKind::Equals],
                                              &[TokenKind::Plus, TokenKind::Minus],
                                              &[TokenKind::Star, TokenKind::Slash],
                                              &[TokenKind::Caret, TokenKind::Pow]];

/// Splits a range at its lowest-precedence operator.
///
/// Levels are tried from lowest to highest precedence. Within a level the
/// rightmost operator that is not inside parentheses wins, so operators of
/// equal precedence group to the left: `8 - 4 - 2` is `(8 - 4) - 2`. This
/// holds for `^` as well.
///
/// # Returns
/// - `Ok(Some(node))` with an `Assign` or `BinaryOp` node.
/// - `Ok(None)` if the range has no operator outside parentheses.
///
/// # Errors
/// - `MissingOperand` if either side of the operator is empty.
/// - `InvalidAssignmentTarget` if the left side of `=` is not a single name.
/// - Any error from parsing the operands.
pub fn parse_binary(range: &TokenCursor, env: &mut Environment) -> ParseResult<Option<Node>> {
    let Some(split) = PRECEDENCE_LEVELS.iter()
                                       .find_map(|level| range.find_rightmost_of(level))
    else {
        return Ok(None);
    };

    let operator = range.get(split).clone();
    let left = range.slice(0, split);
    let right = range.slice(split + 1, range.len());

    if left.is_empty() || right.is_empty() {
        return Err(ParseError::MissingOperand { operator: operator.text,
                                                line:     operator.line, });
    }

    if operator.kind == TokenKind::Equals {
        return parse_assignment(&left, right, &operator, env).map(Some);
    }

    let op = BinaryOperator::from_token(operator.kind).ok_or_else(|| {
                 ParseError::UnexpectedToken { token: operator.to_string(),
                                               line:  operator.line, }
             })?;

    let left = parse_expression(left, env)?;
    let right = parse_expression(right, env)?;

    Ok(Some(Node::BinaryOp { op,
                             left: Box::new(left),
                             right: Box::new(right),
                             line: operator.line }))
}

/// Builds `NAME = EXPR`.
///
/// The target is not resolved here; assigning to an undeclared name is a
/// runtime error.
fn parse_assignment(target: &TokenCursor,
                    value: TokenCursor,
                    operator: &Token,
                    env: &mut Environment)
                    -> ParseResult<Node> {
    let name = target.first();

    if target.len() != 1
       || name.kind != TokenKind::Symbol
       || is_keyword(name)
       || classify(&name.text) != NumericText::NotNumeric
    {
        return Err(ParseError::InvalidAssignmentTarget { line: operator.line });
    }

    let name = name.text.clone();
    let value = parse_expression(value, env)?;

    Ok(Node::Assign { name,
                      value: Box::new(value),
                      line: operator.line })
}
