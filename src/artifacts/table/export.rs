use crate::artifacts::core::error::CheckerError;
use crate::artifacts::table::columns::RenderRow;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

pub const EXPORT_HEADER: [&str; 4] = ["number", "file_path", "file_name", "changes"];

/// One CSV record of the export file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRecord {
    pub number: usize,
    pub file_path: String,
    pub file_name: String,
    pub changes: String,
}

impl From<&RenderRow> for ExportRecord {
    fn from(row: &RenderRow) -> Self {
        ExportRecord {
            number: row.number,
            file_path: row.directory.clone(),
            file_name: row.file_name.clone(),
            changes: row.annotated.clone(),
        }
    }
}

/// Writes the header record and one record per row.
///
/// Quoting is left to the CSV writer, so diffs with newlines, quotes or
/// commas read back unchanged.
pub fn write_export<W: Write>(writer: W, rows: &[RenderRow]) -> Result<(), csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    writer.write_record(EXPORT_HEADER)?;
    for row in rows {
        writer.serialize(ExportRecord::from(row))?;
    }
    writer.flush()?;

    Ok(())
}

pub fn export_to_file(path: &Path, rows: &[RenderRow]) -> Result<(), CheckerError> {
    let to_export_error = |source: csv::Error| CheckerError::Export {
        path: path.to_path_buf(),
        source,
    };

    let file = std::fs::File::create(path).map_err(|e| to_export_error(e.into()))?;
    write_export(file, rows).map_err(to_export_error)?;

    tracing::debug!(path = %path.display(), records = rows.len(), "wrote export");

    Ok(())
}

pub fn read_export<R: std::io::Read>(reader: R) -> Result<Vec<ExportRecord>, csv::Error> {
    csv::Reader::from_reader(reader)
        .deserialize()
        .collect::<Result<Vec<ExportRecord>, _>>()
}
