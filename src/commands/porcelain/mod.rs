//! Porcelain commands (user-facing operations)
//!
//! ## Commands
//!
//! - `check`: Compare the files changed by the last update of the target
//!   project with the source project and report them as tables or CSV

pub mod check;
