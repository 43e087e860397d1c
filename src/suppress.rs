//! Scoped suppression of a single error kind.

use tracing::debug;

use crate::error::{Error, ErrorKind, Result};

/// Runs `f`, discarding an error of the given kind.
///
/// Returns `Ok(Some(value))` on success and `Ok(None)` when `f` fails with an
/// error of `kind`. Errors of any other kind are returned unchanged.
///
/// ```
/// use calculator::{ErrorKind, subtract::sub, suppress};
///
/// let out = suppress(ErrorKind::TypeMismatch, || Ok(sub(43, "1")?)).unwrap();
/// assert_eq!(out, None);
/// ```
///
/// # Errors
///
/// Any error from `f` whose kind is not `kind`.
pub fn suppress<T, F>(kind: ErrorKind, f: F) -> Result<Option<T>>
where
    F: FnOnce() -> Result<T>,
{
    match f() {
        Ok(value) => Ok(Some(value)),
        Err(err) if err.kind() == kind => {
            debug!(?kind, error = %err, "suppressed error");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subtract::sub;

    #[test]
    fn test_suppress_passes_through_success() {
        let out = suppress(ErrorKind::TypeMismatch, || Ok(sub(43, 1)?)).unwrap();
        assert_eq!(out, Some(42));
    }

    #[test]
    fn test_suppress_discards_matching_kind() {
        let mut ran_after = false;
        let out = suppress(ErrorKind::TypeMismatch, || {
            let diff = sub(43, "1")?;
            ran_after = true;
            Ok(diff)
        })
        .unwrap();
        assert_eq!(out, None);
        assert!(!ran_after);
    }

    #[test]
    fn test_suppress_propagates_other_kinds() {
        let result: Result<Option<()>> = suppress(ErrorKind::TypeMismatch, || {
            Err(Error::Config("bad flag".to_string()))
        });
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_suppress_other_kind_does_not_swallow_type_mismatch() {
        let result = suppress(ErrorKind::Io, || Ok(sub(43, "1")?));
        assert_eq!(result.unwrap_err().kind(), ErrorKind::TypeMismatch);
    }
}
