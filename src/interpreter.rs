/// The compiler module turns specialized function bodies into bytecode.
///
/// A function body evaluated with its parameters unbound yields a formula.
/// The compiler lowers that formula into a flat instruction list that runs on
/// a value stack every time the function is called.
///
/// # Responsibilities
/// - Represents symbolic values as formula trees.
/// - Lowers formulas into stack bytecode with patched jumps.
/// - Runs the bytecode with concrete arguments.
pub mod compiler;
/// The environment module holds the symbol table.
///
/// A single flat mapping from names to bindings, seeded with the built-in
/// constants and functions, together with the print channel.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// manages variable state and drives function specialization.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Enforces the truthy/falsy invariant and the write-access rule.
/// - Reports runtime errors with the position of the offending node.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// corresponding to a keyword, identifier, number, operator or delimiter,
/// paired with its line and column.
pub mod lexer;
/// The output module defines the print channel.
pub mod output;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of the program.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates correct grammar and syntax, reporting errors with positions.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares environment bindings, callables and the operands
/// that expressions evaluate to, which are either concrete numbers or
/// symbolic formulas.
pub mod value;
