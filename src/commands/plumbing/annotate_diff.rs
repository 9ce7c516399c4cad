use crate::artifacts::core::error::CheckerError;
use crate::artifacts::diff::annotate::annotate;
use std::io::{Read, Write};

/// Annotates a unified diff read from `reader` and writes the result to `writer`.
pub fn annotate_diff<R: Read, W: Write + ?Sized>(
    mut reader: R,
    writer: &mut W,
) -> Result<(), CheckerError> {
    let mut raw = Vec::new();
    reader.read_to_end(&mut raw)?;

    write!(writer, "{}", annotate(&String::from_utf8_lossy(&raw)))?;

    Ok(())
}
