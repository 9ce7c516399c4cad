use crate::areas::git::ChangeSource;
use crate::artifacts::core::error::CheckerError;
use std::io::Write;
use std::path::Path;

/// Prints the paths changed by the last update of `root`, one per line.
pub fn changed_files<W: Write + ?Sized>(
    changes: &dyn ChangeSource,
    root: &Path,
    writer: &mut W,
) -> Result<(), CheckerError> {
    for path in changes.changed_paths(root)? {
        writeln!(writer, "{path}")?;
    }

    Ok(())
}
