use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, LogicalOperator, Position},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses logical-or expressions.
///
/// The rule is: `logical_or := logical_and ("||" logical_and)*`
pub fn parse_logical_or<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let mut left = parse_logical_and(tokens)?;
    while let Some((Token::OrOr, _)) = tokens.peek() {
        let pos = left.position();
        tokens.next();
        let right = parse_logical_and(tokens)?;
        left = Expr::LogicalOp { left: Box::new(left),
                                 op: LogicalOperator::Or,
                                 right: Box::new(right),
                                 pos };
    }
    Ok(left)
}

/// Parses logical-and expressions.
///
/// The rule is: `logical_and := relational ("&&" relational)*`
pub fn parse_logical_and<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let mut left = parse_relational(tokens)?;
    while let Some((Token::AndAnd, _)) = tokens.peek() {
        let pos = left.position();
        tokens.next();
        let right = parse_relational(tokens)?;
        left = Expr::LogicalOp { left: Box::new(left),
                                 op: LogicalOperator::And,
                                 right: Box::new(right),
                                 pos };
    }
    Ok(left)
}

/// Parses relational and equality operators.
///
/// Relational operators do not chain: `a < b < c` leaves the second `<`
/// unconsumed, which the enclosing statement then rejects.
///
/// The rule is: `relational := additive (("<=" | "<" | "==" | "!=" | ">=" |
/// ">") additive)?`
pub fn parse_relational<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let left = parse_additive(tokens)?;

    if let Some((token, _)) = tokens.peek()
       && let Some(op) = token_to_binary_operator(token)
       && is_relational_op(op)
    {
        let pos = left.position();
        tokens.next();
        let right = parse_additive(tokens)?;
        return Ok(Expr::BinaryOp { left: Box::new(left),
                                   op,
                                   right: Box::new(right),
                                   pos });
    }

    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let mut left = parse_multiplicative(tokens)?;
    while let Some((token, _)) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token)
          && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
    {
        let pos = left.position();
        tokens.next();
        let right = parse_multiplicative(tokens)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                pos };
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators: `*`, `/` and `%`.
///
/// The rule is: `multiplicative := unary (("*" | "/" | "%") unary)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let mut left = parse_unary(tokens)?;
    while let Some((token, _)) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token)
          && matches!(op, BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)
    {
        let pos = left.position();
        tokens.next();
        let right = parse_unary(tokens)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                pos };
    }
    Ok(left)
}

/// Maps a token to its corresponding arithmetic or relational operator.
///
/// Returns `None` for all other tokens, including the logical operators,
/// which have their own precedence levels.
///
/// # Example
/// ```
/// use bella::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::DoubleStar),
///            Some(BinaryOperator::Pow));
/// assert_eq!(token_to_binary_operator(&Token::AndAnd), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::DoubleStar => Some(BinaryOperator::Pow),
        Token::Less => Some(BinaryOperator::Less),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        Token::Greater => Some(BinaryOperator::Greater),
        _ => None,
    }
}

/// Returns `true` for the six comparison operators.
const fn is_relational_op(op: BinaryOperator) -> bool {
    matches!(op,
             BinaryOperator::Less
             | BinaryOperator::LessEqual
             | BinaryOperator::Equal
             | BinaryOperator::NotEqual
             | BinaryOperator::GreaterEqual
             | BinaryOperator::Greater)
}
