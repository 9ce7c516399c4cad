//! Presence of changed paths in the source tree
//!
//! - `reconciliation`: the found / not found partition of a changed-path list

pub mod reconciliation;
