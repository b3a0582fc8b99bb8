use std::iter::Peekable;

use crate::{
    ast::{FunctionDef, Position, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{expect_token, parse_comma_separated, parse_identifier},
        },
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - a variable declaration (`let x = 1;`),
/// - a function declaration (`function f(x) = x * x;`),
/// - a print statement (`print x;`),
/// - a while loop (`while x < 3 { ... }`),
/// - an assignment (`x = x + 1;`).
///
/// The leading token selects the construct; Bella has no expression
/// statements.
///
/// # Errors
/// Returns a `ParseError` if no statement starts at the current token or the
/// selected construct is malformed.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, Position)>
{
    match tokens.peek() {
        Some((Token::Let, _)) => parse_variable_declaration(tokens),
        Some((Token::Function, _)) => parse_function_declaration(tokens),
        Some((Token::Print, pos)) => {
            let pos = *pos;
            tokens.next();
            let expr = parse_expression(tokens)?;
            expect_token(tokens, &Token::Semicolon, "';' after print statement")?;
            Ok(Statement::Print { expr, pos })
        },
        Some((Token::While, pos)) => {
            let pos = *pos;
            tokens.next();
            let condition = parse_expression(tokens)?;
            let body = parse_block(tokens)?;
            Ok(Statement::While { condition,
                                  body,
                                  pos })
        },
        Some((Token::Identifier(_), _)) => parse_assignment(tokens),
        Some((tok, pos)) => Err(ParseError::UnexpectedToken { expected: "statement".to_string(),
                                                              found:    tok.to_string(),
                                                              pos:      *pos, }),
        None => Err(ParseError::UnexpectedEndOfInput { expected: "statement".to_string() }),
    }
}

/// Parses a variable declaration statement.
///
/// A declaration has the form `let <identifier> = <expression>;`.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the identifier is missing,
/// - `=` or `;` is missing,
/// - the expression is malformed.
fn parse_variable_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, Position)>
{
    expect_token(tokens, &Token::Let, "'let'")?;
    let (name, pos) = parse_identifier(tokens)?;
    expect_token(tokens, &Token::Equals, "'=' in variable declaration")?;
    let value = parse_expression(tokens)?;
    expect_token(tokens, &Token::Semicolon, "';' after variable declaration")?;

    Ok(Statement::VariableDeclaration { name, value, pos })
}

/// Parses a function declaration of the form
/// `function <name>(param1, param2, ...) = <expression>;`.
///
/// Parameter names must be distinct.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the name or the parameter list is malformed,
/// - a parameter name is repeated,
/// - the `=` or `;` is missing,
/// - the body expression fails to parse.
fn parse_function_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, Position)>
{
    expect_token(tokens, &Token::Function, "'function'")?;
    let (name, pos) = parse_identifier(tokens)?;
    expect_token(tokens, &Token::LParen, "'(' after function name")?;

    let declared = parse_comma_separated(tokens, parse_identifier, &Token::RParen)?;
    let mut params: Vec<String> = Vec::with_capacity(declared.len());
    for (param, param_pos) in declared {
        if params.contains(&param) {
            return Err(ParseError::DuplicateParameter { name: param,
                                                        pos:  param_pos, });
        }
        params.push(param);
    }

    expect_token(tokens, &Token::Equals, "'=' in function declaration")?;
    let body = parse_expression(tokens)?;
    expect_token(tokens, &Token::Semicolon, "';' after function declaration")?;

    Ok(Statement::Function(FunctionDef { name,
                                         params,
                                         body,
                                         pos }))
}

/// Parses an assignment of the form `<identifier> = <expression>;`.
///
/// # Errors
/// Returns a `ParseError` if the `=` or `;` is missing or the expression is
/// malformed.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let (name, pos) = parse_identifier(tokens)?;
    expect_token(tokens, &Token::Equals, "'=' in assignment")?;
    let value = parse_expression(tokens)?;
    expect_token(tokens, &Token::Semicolon, "';' after assignment")?;

    Ok(Statement::Assignment { name, value, pos })
}
