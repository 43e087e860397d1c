//! Binary integer operations.
//!
//! Operands are `i32` and results are `i64`, so neither the sum nor the
//! difference of two accepted operands can overflow.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CalcError;
use crate::operand::Operand;

/// The arithmetic operations the calculator exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BinaryOp {
    /// `a + b`
    Add,
    /// `a - b`
    Sub,
}

impl BinaryOp {
    /// Operator symbol used in output and error messages.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
        }
    }

    /// Applies the operation.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::TypeMismatch`] if either operand is not an integer.
    pub fn apply(self, lhs: Operand, rhs: Operand) -> Result<i64, CalcError> {
        debug!(op = %self.symbol(), %lhs, %rhs, "applying operation");

        let (Some(a), Some(b)) = (lhs.as_int(), rhs.as_int()) else {
            debug!(op = %self.symbol(), lhs = lhs.type_name(), rhs = rhs.type_name(), "operand type mismatch");
            return Err(CalcError::TypeMismatch {
                op: self.symbol(),
                lhs,
                rhs,
            });
        };

        let (a, b) = (i64::from(a), i64::from(b));
        Ok(match self {
            Self::Add => a + b,
            Self::Sub => a - b,
        })
    }
}

/// Adds two numbers.
///
/// # Examples
///
/// ```
/// assert_eq!(calculator::add(41, 1).unwrap(), 42);
/// assert!(calculator::add(41, "1").is_err());
/// ```
///
/// # Errors
///
/// Returns [`CalcError::TypeMismatch`] if either operand is not an integer.
pub fn add(a: impl Into<Operand>, b: impl Into<Operand>) -> Result<i64, CalcError> {
    BinaryOp::Add.apply(a.into(), b.into())
}
