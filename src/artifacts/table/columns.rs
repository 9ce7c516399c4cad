use crate::artifacts::diff::changed_path::ChangedPath;
use crate::artifacts::diff::diff_record::DiffRecord;

pub const NUMBER_HEADER: &str = "Number";
pub const DIRECTORY_HEADER: &str = "File Path";
pub const FILE_NAME_HEADER: &str = "File Name";
pub const CHANGES_HEADER: &str = "Changes";

/// What one table line (or export record) shows about a changed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRow {
    pub number: usize,
    pub directory: String,
    pub file_name: String,
    pub change_size: usize,
    pub annotated: String,
}

impl RenderRow {
    /// Builds the row for the record at `index` (zero-based) of the sequence being rendered.
    pub fn new(index: usize, record: &DiffRecord) -> Self {
        RenderRow {
            number: index + 1,
            directory: record.path().directory(),
            file_name: record.path().file_name(),
            change_size: record.change_size(),
            annotated: record.annotated().to_string(),
        }
    }

    pub fn from_records(records: &[DiffRecord]) -> Vec<Self> {
        records
            .iter()
            .enumerate()
            .map(|(index, record)| RenderRow::new(index, record))
            .collect()
    }
}

/// Widths of the content-sized columns, never narrower than their headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWidths {
    pub number: usize,
    pub directory: usize,
    pub file_name: usize,
}

impl Default for ColumnWidths {
    fn default() -> Self {
        ColumnWidths {
            number: NUMBER_HEADER.len(),
            directory: DIRECTORY_HEADER.len(),
            file_name: FILE_NAME_HEADER.len(),
        }
    }
}

impl ColumnWidths {
    pub fn from_paths(paths: &[ChangedPath]) -> Self {
        paths
            .iter()
            .enumerate()
            .fold(ColumnWidths::default(), |widths, (index, path)| {
                widths.widen(index + 1, &path.directory(), &path.file_name())
            })
    }

    pub fn from_rows(rows: &[RenderRow]) -> Self {
        rows.iter().fold(ColumnWidths::default(), |widths, row| {
            widths.widen(row.number, &row.directory, &row.file_name)
        })
    }

    fn widen(self, number: usize, directory: &str, file_name: &str) -> Self {
        ColumnWidths {
            number: self.number.max(number.to_string().len()),
            directory: self.directory.max(directory.chars().count()),
            file_name: self.file_name.max(file_name.chars().count()),
        }
    }
}
