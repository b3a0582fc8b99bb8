use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, Position, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect_token, parse_comma_separated},
        },
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `-`  (numeric negation)
/// - `!`  (logical not)
///
/// Unary operators are right-associative, so an input like `!-x` is parsed as
/// `!( -x )`. They bind more loosely than `**`, so `-2 ** 2` is `-(2 ** 2)`.
///
/// Grammar:
/// ```text
///     unary := ("-" | "!") unary
///            | power
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let op = match tokens.peek() {
        Some((Token::Minus, pos)) => Some((UnaryOperator::Negate, *pos)),
        Some((Token::Bang, pos)) => Some((UnaryOperator::Not, *pos)),
        _ => None,
    };

    match op {
        Some((op, pos)) => {
            tokens.next();
            let expr = parse_unary(tokens)?;
            Ok(Expr::UnaryOp { op,
                               expr: Box::new(expr),
                               pos })
        },
        None => parse_power(tokens),
    }
}

/// Parses exponentiation.
///
/// The exponent is itself a unary expression, which makes `**`
/// right-associative (`a ** b ** c` is `a ** (b ** c)`) and allows negative
/// exponents such as `2 ** -1`.
///
/// Grammar: `power := primary ("**" unary)?`
pub(crate) fn parse_power<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let base = parse_primary(tokens)?;

    let Some((Token::DoubleStar, _)) = tokens.peek() else {
        return Ok(base);
    };
    let pos = base.position();
    tokens.next();

    let exponent = parse_unary(tokens)?;
    Ok(Expr::BinaryOp { left: Box::new(base),
                        op: BinaryOperator::Pow,
                        right: Box::new(exponent),
                        pos })
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - numeric literals
/// - `true` and `false`, which evaluate to `1` and `0`
/// - identifiers
/// - function calls, including `print(...)`, the call form of the `print`
///   keyword
/// - parenthesized expressions
///
/// Grammar (simplified):
/// ```text
///     primary := number | "true" | "false"
///              | identifier ( "(" arguments ")" )?
///              | "print" "(" arguments ")"
///              | "(" expression ")"
/// ```
///
/// # Errors
/// Returns a `ParseError` if no primary expression starts at the current
/// token, a call's argument list is malformed, or a closing parenthesis is
/// missing.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let (tok, pos) = tokens.next()
                           .ok_or_else(|| ParseError::UnexpectedEndOfInput { expected:
                                                                                 "expression".to_string() })?;
    let pos = *pos;

    match tok {
        Token::Number(value) => Ok(Expr::Literal { value: *value,
                                                   pos }),
        Token::True => Ok(Expr::Literal { value: 1.0, pos }),
        Token::False => Ok(Expr::Literal { value: 0.0, pos }),
        Token::Identifier(name) => {
            if let Some((Token::LParen, _)) = tokens.peek() {
                tokens.next();
                let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
                return Ok(Expr::Call { name: name.clone(),
                                       arguments,
                                       pos });
            }
            Ok(Expr::Variable { name: name.clone(),
                                pos })
        },
        Token::Print => {
            expect_token(tokens, &Token::LParen, "'(' after print in an expression")?;
            let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
            Ok(Expr::Call { name: "print".to_string(),
                            arguments,
                            pos })
        },
        Token::LParen => {
            let expr = parse_expression(tokens)?;
            expect_token(tokens, &Token::RParen, "')'")?;
            Ok(expr)
        },
        tok => Err(ParseError::UnexpectedToken { expected: "expression".to_string(),
                                                 found: tok.to_string(),
                                                 pos }),
    }
}
