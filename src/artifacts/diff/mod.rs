//! Changed paths and their diffs
//!
//! - `changed_path`: a relative path reported by git as changed
//! - `annotate`: line-number annotation of unified diff text
//! - `diff_record`: a changed path paired with its raw and annotated diff

pub mod annotate;
pub mod changed_path;
pub mod diff_record;
