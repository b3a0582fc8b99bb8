/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code, such as unknown characters, unexpected tokens or a program that ends
/// in the middle of a statement.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, including
/// while a function body is being specialized and when a specialized function
/// is later called.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any error produced while running a Bella program.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The source text could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluation failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
