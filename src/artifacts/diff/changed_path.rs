use std::fmt;
use std::path::Path;

/// A path, relative to the tree root, reported by git as changed by the last update.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChangedPath(String);

impl ChangedPath {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parent directory with a trailing separator, `./` for top-level files.
    pub fn directory(&self) -> String {
        let parent = Path::new(&self.0)
            .parent()
            .map(|parent| parent.to_string_lossy().into_owned())
            .filter(|parent| !parent.is_empty())
            .unwrap_or_else(|| ".".to_string());

        format!("{parent}/")
    }

    pub fn file_name(&self) -> String {
        Path::new(&self.0)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.0.clone())
    }
}

impl AsRef<Path> for ChangedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl From<&str> for ChangedPath {
    fn from(path: &str) -> Self {
        ChangedPath(path.to_string())
    }
}

impl fmt::Display for ChangedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
