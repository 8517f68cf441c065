//! # headdiff
//!
//! Compare the column headers of two CSV files and print a short structural
//! diff plus a preview of the leading rows, reading only the start of each file.

pub mod cli;
pub mod error;
pub mod reader;
pub mod diff;
pub mod output;
pub mod commands;

pub use error::{HeaderDiffError, Result};
pub use diff::HeaderDiff;
pub use output::{ComparisonReport, ReportConfig, ReportRenderer};

/// Number of data rows shown in each preview (the header is shown in addition)
pub const PREVIEW_ROWS: usize = 3;

/// Maximum number of column names listed per difference section
pub const MAX_LISTED_COLUMNS: usize = 80;

/// Maximum number of fields shown per preview record
pub const PREVIEW_FIELDS: usize = 8;
