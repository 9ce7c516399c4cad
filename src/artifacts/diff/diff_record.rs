use crate::areas::git::ChangeSource;
use crate::artifacts::diff::annotate::annotate;
use crate::artifacts::diff::changed_path::ChangedPath;
use std::path::Path;

/// A changed path together with its raw and annotated diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffRecord {
    path: ChangedPath,
    raw: String,
    annotated: String,
}

impl DiffRecord {
    /// Retrieves the diff of `path` under `root` and annotates it.
    pub fn fetch(source: &dyn ChangeSource, root: &Path, path: &ChangedPath) -> Self {
        Self::from_raw(path.clone(), source.file_diff(root, path))
    }

    pub fn from_raw(path: ChangedPath, raw: String) -> Self {
        let annotated = annotate(&raw);
        DiffRecord {
            path,
            raw,
            annotated,
        }
    }

    /// A record for a path that has nothing to be diffed against.
    pub fn without_diff(path: ChangedPath) -> Self {
        DiffRecord {
            path,
            raw: String::new(),
            annotated: String::new(),
        }
    }

    pub fn path(&self) -> &ChangedPath {
        &self.path
    }

    pub fn annotated(&self) -> &str {
        &self.annotated
    }

    /// Size of the change in characters of raw diff text.
    pub fn change_size(&self) -> usize {
        self.raw.chars().count()
    }
}
