//! Access to the target project's version-control history
//!
//! Everything the checker needs from git is two queries: which paths changed
//! since the previous update point, and the diff of one of those paths. They
//! sit behind [`ChangeSource`] so the rest of the pipeline can run against a
//! fake in tests.

use crate::artifacts::core::error::CheckerError;
use crate::artifacts::diff::changed_path::ChangedPath;
use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

/// The previous position of `HEAD`, i.e. the state before the last update.
pub const DEFAULT_BASE_REVISION: &str = "HEAD@{1}";

/// Keeps non-ASCII and special characters in paths verbatim instead of
/// C-quoting them, so reported paths can be looked up on disk.
const UNQUOTED_PATHS: [&str; 2] = ["-c", "core.quotePath=false"];

pub trait ChangeSource {
    /// Paths changed between the base revision and the current state of `root`.
    fn changed_paths(&self, root: &Path) -> Result<Vec<ChangedPath>, CheckerError>;

    /// Raw unified diff of `path` under `root`, empty when it cannot be retrieved.
    fn file_diff(&self, root: &Path, path: &ChangedPath) -> String;
}

/// [`ChangeSource`] backed by the `git` command-line tool.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: String,
    base_revision: String,
}

impl GitCli {
    pub fn new(base_revision: impl Into<String>) -> Self {
        GitCli {
            program: "git".to_string(),
            base_revision: base_revision.into(),
        }
    }

    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Runs git in `root` and returns its stdout.
    fn run(&self, root: &Path, args: &[OsString]) -> Result<String, CheckerError> {
        let command = self.describe(root, args);
        tracing::debug!(%command, "running git");

        let output = Command::new(&self.program)
            .arg("-C")
            .arg(root)
            .args(UNQUOTED_PATHS)
            .args(args)
            .output()
            .map_err(|source| CheckerError::ToolUnavailable {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(CheckerError::ExternalTool {
                command,
                exit_code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn describe(&self, root: &Path, args: &[OsString]) -> String {
        let args = args
            .iter()
            .map(|arg| arg.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ");

        format!(
            "{} -C {} {} {}",
            self.program,
            root.display(),
            UNQUOTED_PATHS.join(" "),
            args
        )
    }
}

impl ChangeSource for GitCli {
    fn changed_paths(&self, root: &Path) -> Result<Vec<ChangedPath>, CheckerError> {
        let args = ["diff", "--name-only", self.base_revision.as_str()].map(OsString::from);
        let stdout = self.run(root, &args)?;

        Ok(parse_name_only(&stdout))
    }

    fn file_diff(&self, root: &Path, path: &ChangedPath) -> String {
        let args = [
            OsString::from("diff"),
            OsString::from(&self.base_revision),
            OsString::from("--"),
            OsString::from(path.as_str()),
        ];

        match self.run(root, &args) {
            Ok(diff) => diff,
            Err(e) => {
                tracing::warn!(
                    path = %path,
                    error = %e,
                    "could not retrieve diff, reporting it as empty"
                );
                String::new()
            }
        }
    }
}

/// Parses `git diff --name-only` output, one path per line.
fn parse_name_only(stdout: &str) -> Vec<ChangedPath> {
    stdout
        .trim()
        .split('\n')
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .map(ChangedPath::from)
        .collect()
}
