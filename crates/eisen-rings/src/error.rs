//! Errors raised by ring and field arithmetic.

use thiserror::Error;

/// Contract violations detected by Eisenstein arithmetic.
///
/// None of these are transient: they are surfaced to the caller at the
/// point of detection and no partial result is produced.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// A value of the wrong kind was supplied where an integral or
    /// rational one is required.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Division, inversion or Euclidean division by a zero-norm value.
    #[error("division by zero")]
    DivisionByZero,

    /// An operation the structure does not support, such as true
    /// division inside the Eisenstein integers.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),
}

/// Result alias for ring and field arithmetic.
pub type Result<T> = std::result::Result<T, ArithmeticError>;
