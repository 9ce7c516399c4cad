use crate::areas::checker::Checker;
use crate::areas::config::OutputMode;
use crate::areas::source_tree::SourceTree;
use crate::artifacts::core::error::CheckerError;
use crate::artifacts::diff::changed_path::ChangedPath;
use crate::artifacts::diff::diff_record::DiffRecord;
use crate::artifacts::status::reconciliation::Reconciliation;
use crate::artifacts::table::boxed::{Highlight, render_table};
use crate::artifacts::table::columns::RenderRow;
use crate::artifacts::table::export::export_to_file;
use std::io::Write;
use std::path::Path;

const FOUND_HEADING: &str = "Files found in both projects:";
const MISSING_HEADING: &str = "Files not found in Updated Source Project:";

impl Checker {
    pub fn check(&self) -> Result<(), CheckerError> {
        let changed = self.changes().changed_paths(self.config().target())?;
        tracing::debug!(count = changed.len(), "listed changed paths");

        let source_tree = SourceTree::open(self.config().source())?;
        let reconciliation = source_tree.reconcile(&changed);

        match self.config().mode() {
            OutputMode::Table => {
                self.print_table(&self.fetch_records(reconciliation.found()), Highlight::None)
            }
            OutputMode::VerboseTable => self.print_verbose_tables(&reconciliation),
            OutputMode::Export(path) => {
                self.export(&self.fetch_records(reconciliation.found()), path)
            }
        }
    }

    fn fetch_records(&self, paths: &[ChangedPath]) -> Vec<DiffRecord> {
        paths
            .iter()
            .map(|path| DiffRecord::fetch(self.changes(), self.config().target(), path))
            .collect()
    }

    fn print_table(
        &self,
        records: &[DiffRecord],
        highlight: Highlight,
    ) -> Result<(), CheckerError> {
        let rows = RenderRow::from_records(records);
        let mut writer = self.writer();
        render_table(&mut **writer, &rows, highlight)?;

        Ok(())
    }

    fn print_verbose_tables(&self, reconciliation: &Reconciliation) -> Result<(), CheckerError> {
        if !reconciliation.found().is_empty() {
            writeln!(self.writer(), "\n{FOUND_HEADING}")?;
            self.print_table(&self.fetch_records(reconciliation.found()), Highlight::Found)?;
        }

        if !reconciliation.not_found().is_empty() {
            // nothing to diff against in the source project
            let records = reconciliation
                .not_found()
                .iter()
                .cloned()
                .map(DiffRecord::without_diff)
                .collect::<Vec<_>>();

            writeln!(self.writer(), "\n{MISSING_HEADING}")?;
            self.print_table(&records, Highlight::Missing)?;
        }

        Ok(())
    }

    fn export(&self, records: &[DiffRecord], path: &Path) -> Result<(), CheckerError> {
        let rows = RenderRow::from_records(records);
        export_to_file(path, &rows)?;

        writeln!(
            self.writer(),
            "Wrote {} common file(s) to {}",
            rows.len(),
            path.display()
        )?;

        Ok(())
    }
}
