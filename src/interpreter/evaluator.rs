/// Binary operator evaluation logic.
///
/// Handles arithmetic, relational and logical operators, in both concrete
/// and symbolic form.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements numeric negation and logical not.
pub mod unary;

/// Core evaluation logic.
///
/// Contains the evaluator, its specialization stage, statement dispatch and
/// the [`core::evaluate`] entry point.
pub mod core;

/// Evaluation of `while` loops.
pub mod while_loop;

/// Utility functions for evaluation.
///
/// Provides the truthy/falsy helpers and the evaluation of variables, blocks
/// and conditionals.
pub mod utils;

/// Function evaluation.
///
/// Handles built-in and user-defined function calls, argument checking and
/// function declarations.
pub mod function;
