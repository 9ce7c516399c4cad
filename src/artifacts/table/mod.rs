//! Report rendering
//!
//! - `columns`: rows and the content-sized column widths they need
//! - `boxed`: the box-drawn terminal table
//! - `export`: the CSV export

pub mod boxed;
pub mod columns;
pub mod export;
