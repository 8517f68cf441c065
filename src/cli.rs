//! Command-line interface for headdiff

use clap::Parser;
use std::path::PathBuf;

/// Message printed ahead of clap's usage text when the paths are missing or extra
pub const USAGE_HINT: &str = "Expected 2 args: <csv1> <csv2>";

/// Compare the column headers of two CSV files and preview their first rows
///
/// The two paths are the whole interface: there are no flags, so any
/// argument (even one starting with `-`) counts toward the two.
#[derive(Parser, Debug)]
#[command(name = "headdiff")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// First CSV file
    #[arg(value_name = "CSV1", allow_hyphen_values = true)]
    pub first: PathBuf,

    /// Second CSV file
    #[arg(value_name = "CSV2", allow_hyphen_values = true)]
    pub second: PathBuf,
}
