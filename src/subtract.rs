//! Subtraction, exported as its own module.

use crate::error::CalcError;
use crate::operand::Operand;
use crate::ops::BinaryOp;

/// Subtracts two numbers, returning `a - b`.
///
/// # Examples
///
/// ```
/// use calculator::subtract::sub;
///
/// assert_eq!(sub(43, 1).unwrap(), 42);
/// assert!(sub(43, "1").is_err());
/// ```
///
/// # Errors
///
/// Returns [`CalcError::TypeMismatch`] if either operand is not an integer.
pub fn sub(a: impl Into<Operand>, b: impl Into<Operand>) -> Result<i64, CalcError> {
    BinaryOp::Sub.apply(a.into(), b.into())
}
