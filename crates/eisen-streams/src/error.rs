//! Errors raised by the stream operations.

use eisen_rings::ArithmeticError;
use thiserror::Error;

/// Failure of a stream operation.
///
/// Every variant is a contract violation by the caller; nothing is retried
/// and no partial output is returned alongside an error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StreamError {
    /// Delta arithmetic failed, typically a zero delta.
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),

    /// The deltas do not satisfy the operation's precondition.
    #[error("precondition violated: {0}")]
    PreconditionViolated(String),

    /// An input sequence is shorter than the clock requires.
    #[error("sequence {sequence} exhausted: index {index} but length {len}")]
    SequenceExhausted {
        /// Which input ran out.
        sequence: &'static str,
        /// The index that was requested.
        index: usize,
        /// Length of that input.
        len: usize,
    },

    /// Invalid stream configuration.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result alias for stream operations.
pub type Result<T> = std::result::Result<T, StreamError>;
