//! Components a check is run against
//!
//! - `checker`: The check itself, holding configuration, git access and output
//! - `config`: Resolved run configuration and output mode
//! - `git`: Changed-path and per-file diff queries against git
//! - `source_tree`: Presence checks in the source project

pub mod checker;
pub mod config;
pub mod git;
pub mod source_tree;
