//! Error types for the calculator.
//!
//! Arithmetic failures live in [`CalcError`]; everything the crate can return
//! is unified under [`Error`], which also carries an [`ErrorKind`] so callers
//! can filter on the kind of failure without matching every variant.

use thiserror::Error;

use crate::operand::Operand;

/// Errors raised by the arithmetic operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// An operand does not support the requested numeric operation.
    #[error("unsupported operand type(s) for {op}: '{}' and '{}'", .lhs.type_name(), .rhs.type_name())]
    TypeMismatch {
        /// Operator symbol, `+` or `-`.
        op: char,
        /// The left-hand operand.
        lhs: Operand,
        /// The right-hand operand.
        rhs: Operand,
    },
}

/// A unified error type for the entire crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Arithmetic error.
    #[error(transparent)]
    Calc(#[from] CalcError),

    /// Failed to write output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Coarse classification of [`Error`], used to scope suppression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// [`CalcError::TypeMismatch`].
    TypeMismatch,
    /// [`Error::Io`].
    Io,
    /// [`Error::Config`].
    Config,
}

impl Error {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Calc(CalcError::TypeMismatch { .. }) => ErrorKind::TypeMismatch,
            Self::Io(_) => ErrorKind::Io,
            Self::Config(_) => ErrorKind::Config,
        }
    }
}

/// A specialized Result type for calculator operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_mismatch_display() {
        let err = CalcError::TypeMismatch {
            op: '-',
            lhs: Operand::Int(43),
            rhs: Operand::from("1"),
        };
        assert_eq!(
            err.to_string(),
            "unsupported operand type(s) for -: 'int' and 'str'"
        );
    }

    #[test]
    fn test_error_conversion() {
        let calc_err = CalcError::TypeMismatch {
            op: '+',
            lhs: Operand::from("a"),
            rhs: Operand::Int(1),
        };
        let err: Error = calc_err.into();
        assert!(matches!(err, Error::Calc(CalcError::TypeMismatch { .. })));
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    }

    #[test]
    fn test_io_error_kind() {
        let err: Error = std::io::Error::other("pipe closed").into();
        assert_eq!(err.kind(), ErrorKind::Io);
        assert_eq!(err.to_string(), "IO error: pipe closed");
    }
}
