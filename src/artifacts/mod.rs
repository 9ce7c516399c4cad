//! Data structures and algorithms of a check
//!
//! - `core`: Shared utilities (errors, pager wrapper)
//! - `diff`: Changed paths, diff records and diff annotation
//! - `status`: Presence of changed paths in the source project
//! - `table`: Table and CSV rendering of the report

pub mod core;
pub mod diff;
pub mod status;
pub mod table;
