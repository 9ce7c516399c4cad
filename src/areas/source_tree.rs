use crate::artifacts::core::error::CheckerError;
use crate::artifacts::diff::changed_path::ChangedPath;
use crate::artifacts::status::reconciliation::Reconciliation;
use std::path::Path;

/// The second project, checked for the presence of changed paths.
#[derive(Debug)]
pub struct SourceTree {
    path: Box<Path>,
}

impl SourceTree {
    pub fn open(path: &Path) -> Result<Self, CheckerError> {
        if !path.is_dir() {
            return Err(CheckerError::SourceTree {
                path: path.to_path_buf(),
            });
        }

        Ok(SourceTree {
            path: path.to_path_buf().into_boxed_path(),
        })
    }

    /// Whether `path` exists under the tree, as a file or a directory.
    ///
    /// Any lookup error, permission denied included, counts as absent.
    pub fn contains(&self, path: &ChangedPath) -> bool {
        std::fs::metadata(self.path.join(path)).is_ok()
    }

    pub fn reconcile(&self, paths: &[ChangedPath]) -> Reconciliation {
        let (found, not_found): (Vec<_>, Vec<_>) =
            paths.iter().cloned().partition(|path| self.contains(path));

        tracing::debug!(
            source = %self.path.display(),
            found = found.len(),
            not_found = not_found.len(),
            "reconciled changed paths"
        );

        Reconciliation::new(found, not_found)
    }
}
