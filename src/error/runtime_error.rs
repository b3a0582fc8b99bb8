use thiserror::Error;

use crate::ast::Position;

/// Represents all errors that can occur during evaluation.
///
/// Every variant carries the position of the node it was raised against.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    /// An identifier has no binding and is not a parameter of the function
    /// being specialized.
    #[error("Error on {pos}: {name} is referenced, but has not been instantiated.")]
    UnboundName {
        /// The name of the identifier.
        name: String,
        /// Where the identifier was referenced.
        pos:  Position,
    },
    /// A declaration or assignment violates the write-access rule.
    #[error("Error on {pos}: {name} is not writable: {details}.")]
    NotWritable {
        /// The name being written.
        name:    String,
        /// Why the write was rejected.
        details: String,
        /// Where the write was attempted.
        pos:     Position,
    },
    /// The target of a call is not a function.
    #[error("Error on {pos}: {name} is not a function.")]
    NotAFunction {
        /// The name of the call target.
        name: String,
        /// Where the call was made.
        pos:  Position,
    },
    /// A function was referenced where a number is required.
    #[error("Error on {pos}: {name} is a function, not a number.")]
    NotANumber {
        /// The name of the function.
        name: String,
        /// Where the function was referenced.
        pos:  Position,
    },
    /// The wrong number of arguments was supplied to a function.
    #[error("Error on {pos}: {name} expects {expected} argument(s), but {found} were given.")]
    ArityMismatch {
        /// The name of the function.
        name:     String,
        /// The declared arity.
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
        /// Where the call was made.
        pos:      Position,
    },
    /// A value used as a boolean was neither `0` nor `1`.
    #[error("Error on {pos}: {value} is not a truthy or falsey value.")]
    InvalidBooleanOperand {
        /// The offending value.
        value: f64,
        /// Position of the operand expression.
        pos:   Position,
    },
}

impl RuntimeError {
    /// Returns the source position the error was raised against.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnboundName { pos, .. }
            | Self::NotWritable { pos, .. }
            | Self::NotAFunction { pos, .. }
            | Self::NotANumber { pos, .. }
            | Self::ArityMismatch { pos, .. }
            | Self::InvalidBooleanOperand { pos, .. } => *pos,
        }
    }
}
