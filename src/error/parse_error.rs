use thiserror::Error;

use crate::ast::Position;

/// Represents all errors that can occur during lexing or parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The lexer found a character that does not start any token.
    #[error("Error on {pos}: Unexpected character '{found}'.")]
    UnexpectedCharacter {
        /// The offending text.
        found: String,
        /// Where the character was found.
        pos:   Position,
    },
    /// Found an unexpected token while parsing.
    #[error("Error on {pos}: Expected {expected}, found '{found}'.")]
    UnexpectedToken {
        /// A description of what the parser was looking for.
        expected: String,
        /// The token encountered.
        found:    String,
        /// Where the token was found.
        pos:      Position,
    },
    /// Reached the end of input unexpectedly.
    #[error("Error at end of input: Expected {expected}.")]
    UnexpectedEndOfInput {
        /// A description of what the parser was looking for.
        expected: String,
    },
    /// A function declares the same parameter name twice.
    #[error("Error on {pos}: Parameter '{name}' is declared more than once.")]
    DuplicateParameter {
        /// The repeated parameter name.
        name: String,
        /// Position of the second declaration.
        pos:  Position,
    },
}
