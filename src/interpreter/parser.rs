/// Core parsing entry points.
///
/// Contains the program and expression entry points and the ternary
/// conditional, the lowest level of the precedence ladder.
pub mod core;

/// Prefix, power and primary expressions.
///
/// Handles `-` and `!`, right-associative `**`, literals, identifiers, calls
/// and parenthesized expressions.
pub mod unary;

/// Binary operator parsing.
///
/// Implements the logical, relational, additive and multiplicative levels of
/// the precedence ladder.
pub mod binary;

/// Block parsing.
///
/// Parses brace-delimited statement sequences used as `while` bodies.
pub mod block;

/// Utility functions for the parser.
///
/// Provides token expectations, identifier parsing and comma-separated lists.
pub mod utils;

/// Statement parsing.
///
/// Implements declarations, assignments, `print` and `while`.
pub mod statement;
