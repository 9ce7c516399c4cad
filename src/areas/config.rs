use crate::artifacts::core::error::CheckerError;
use std::path::{Path, PathBuf};

/// How the result of a check is reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputMode {
    /// One uncoloured table of the files found in both projects.
    Table,
    /// A highlighted table of found files and one of files missing from the source.
    VerboseTable,
    /// CSV export of the found files.
    Export(PathBuf),
}

impl OutputMode {
    /// Debug output takes precedence over an export file.
    pub fn select(debug: bool, output: Option<PathBuf>) -> Self {
        match (debug, output) {
            (true, _) => OutputMode::VerboseTable,
            (false, Some(path)) => OutputMode::Export(path),
            (false, None) => OutputMode::Table,
        }
    }
}

/// Everything a check run needs to know, resolved once from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckerConfig {
    target: PathBuf,
    source: PathBuf,
    base_revision: String,
    mode: OutputMode,
}

impl CheckerConfig {
    pub fn try_new(
        target: Option<PathBuf>,
        source: Option<PathBuf>,
        base_revision: impl Into<String>,
        mode: OutputMode,
    ) -> Result<Self, CheckerError> {
        match (target, source) {
            (Some(target), Some(source)) => Ok(CheckerConfig {
                target,
                source,
                base_revision: base_revision.into(),
                mode,
            }),
            _ => Err(CheckerError::Configuration(
                "both target and source must be specified".to_string(),
            )),
        }
    }

    /// Root of the project whose git history lists the changed files.
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Root of the project checked for the changed files.
    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn base_revision(&self) -> &str {
        &self.base_revision
    }

    pub fn mode(&self) -> &OutputMode {
        &self.mode
    }
}
