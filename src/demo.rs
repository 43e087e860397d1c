//! The demonstration run.

use std::io::Write;

use tracing::info;

use crate::error::{ErrorKind, Result};
use crate::ops::add;
use crate::subtract::sub;
use crate::suppress::suppress;

/// Prints the demonstration lines to `out`.
///
/// The third line subtracts a text value and is skipped entirely when the
/// resulting type mismatch is suppressed.
///
/// # Errors
///
/// Returns [`crate::Error::Io`] if writing to `out` fails.
pub fn run(out: &mut impl Write) -> Result<()> {
    info!("running calculator demo");

    writeln!(out, "41 + 1 = {}", add(41, 1)?)?;
    writeln!(out, "43 - 1 = {}", sub(43, 1)?)?;

    suppress(ErrorKind::TypeMismatch, || {
        writeln!(out, "43 - '1' = {}", sub(43, "1")?)?;
        Ok(())
    })?;

    Ok(())
}
