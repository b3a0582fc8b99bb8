use std::iter::Peekable;

use crate::{
    ast::{Expr, Position, Program},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_logical_or, statement::parse_statement, utils::expect_token},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole program from a token list.
///
/// Statements are parsed until the tokens run out. A program may be empty.
///
/// Grammar: `program := statement*`
///
/// # Example
/// ```
/// use bella::interpreter::{lexer::tokenize, parser::core::parse_program};
///
/// let tokens = tokenize("let x = 1; print x;").unwrap();
/// let program = parse_program(&tokens).unwrap();
///
/// assert_eq!(program.statements.len(), 2);
/// ```
pub fn parse_program(tokens: &[(Token, Position)]) -> ParseResult<Program> {
    let mut iter = tokens.iter().peekable();
    let mut statements = Vec::new();

    while iter.peek().is_some() {
        statements.push(parse_statement(&mut iter)?);
    }

    Ok(Program { statements })
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, the ternary conditional, and
/// recursively descends through the precedence hierarchy.
///
/// Grammar: `expression := conditional`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)>
{
    parse_conditional(tokens)
}

/// Parses a ternary conditional.
///
/// The condition and the `then` branch are logical-or expressions; the `else`
/// branch is a full expression, which makes the operator right-associative:
/// `a ? b : c ? d : e` parses as `a ? b : (c ? d : e)`.
///
/// Grammar: `conditional := logical_or ("?" logical_or ":" conditional)?`
///
/// # Errors
/// Returns a `ParseError` if the `:` is missing or a branch fails to parse.
pub fn parse_conditional<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let condition = parse_logical_or(tokens)?;

    let Some((Token::Question, _)) = tokens.peek() else {
        return Ok(condition);
    };
    let pos = condition.position();
    tokens.next();

    let then_branch = parse_logical_or(tokens)?;
    expect_token(tokens, &Token::Colon, "':' in conditional expression")?;
    let else_branch = parse_conditional(tokens)?;

    Ok(Expr::Conditional { condition: Box::new(condition),
                           then_branch: Box::new(then_branch),
                           else_branch: Box::new(else_branch),
                           pos })
}
