//! Plumbing commands (single pipeline stages)
//!
//! Plumbing commands expose one stage of the check on its own, for scripting
//! and for inspecting what the porcelain command works with.
//!
//! ## Commands
//!
//! - `changed-files`: List the paths changed by the last update of a project
//! - `annotate-diff`: Annotate a unified diff with old and new line numbers

pub mod annotate_diff;
pub mod changed_files;
