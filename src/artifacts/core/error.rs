use std::path::PathBuf;
use thiserror::Error;

/// Errors that end a check run.
///
/// Per-path diff failures and filesystem lookups never surface here: they
/// degrade to an empty diff and a not-found classification respectively.
#[derive(Error, Debug)]
pub enum CheckerError {
    #[error("{0}")]
    Configuration(String),
    #[error("`{command}` exited with {}: {stderr}", exit_status(.exit_code))]
    ExternalTool {
        command: String,
        exit_code: Option<i32>,
        stderr: String,
    },
    #[error("failed to run `{command}`: {source}")]
    ToolUnavailable {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("source directory {path} does not exist or is not a directory")]
    SourceTree { path: PathBuf },
    #[error("failed to write export to {path}: {source}")]
    Export {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

fn exit_status(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "a signal".to_string(),
    }
}

impl CheckerError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, CheckerError::Configuration(_))
    }
}
