//! # bella
//!
//! bella is an evaluator for Bella, a small expression-oriented teaching
//! language written in Rust. Programs declare variables and single-expression
//! functions, assign, loop and print numbers. Booleans are the numbers `0`
//! and `1`.
//!
//! Function declarations are staged: the body is evaluated once with its
//! parameters unbound, and the closed-form result is compiled into bytecode
//! that every call runs.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Program,
    error::ParseError,
    interpreter::{lexer::tokenize, parser::core::parse_program},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and related types
/// that represent the syntactic structure of a program as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source positions to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing
/// or evaluating code. Every error carries the line and column it was raised
/// against.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, the environment,
/// the function compiler and the print channel.
pub mod interpreter;

pub use crate::{
    error::Error,
    interpreter::{
        environment::Environment,
        evaluator::core::evaluate,
        output::{Capture, Output, Stdout},
    },
};

/// Parses source text into a program.
///
/// # Errors
/// Returns an error if the text contains an unknown character or does not
/// follow the grammar.
///
/// # Example
/// ```
/// let program = bella::parse("function f(x) = x * x; print f(3);").unwrap();
/// assert_eq!(program.statements.len(), 2);
///
/// assert!(bella::parse("print 1 +;").is_err());
/// ```
pub fn parse(source: &str) -> Result<Program, ParseError> {
    let tokens = tokenize(source)?;
    parse_program(&tokens)
}

/// Parses and evaluates a program against `env`.
///
/// Parsing completes before anything is evaluated, so a syntax error anywhere
/// in the source means no statement runs.
///
/// # Errors
/// Returns an error if parsing fails or if any runtime error occurs.
///
/// # Examples
/// ```
/// use bella::{Capture, Environment, run};
///
/// let capture = Capture::default();
/// let mut env = Environment::with_output(capture.clone());
///
/// run("function sq(x) = x * x; print sq(7);", &mut env).unwrap();
/// assert_eq!(capture.values(), vec![49.0]);
///
/// // `y` was never declared.
/// assert!(run("print y + 1;", &mut env).is_err());
/// ```
pub fn run(source: &str, env: &mut Environment) -> Result<(), Error> {
    let program = parse(source)?;
    evaluate(&program, env)?;
    Ok(())
}
