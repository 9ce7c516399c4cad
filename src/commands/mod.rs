//! Command implementations
//!
//! - `plumbing`: Single pipeline stages (changed-files, annotate-diff)
//! - `porcelain`: The full check, rendered as tables or exported as CSV

pub mod plumbing;
pub mod porcelain;
