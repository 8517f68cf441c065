//! Comparison command: read both files, diff the headers, print the report

use crate::cli::Cli;
use crate::diff::HeaderDiff;
use crate::error::Result;
use crate::output::{ComparisonReport, ReportConfig, ReportRenderer};
use crate::reader::{read_header, read_preview};
use std::io::Write;
use std::path::Path;

/// Execute a parsed command line, writing the report to stdout
pub fn execute_command(cli: &Cli) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    compare_to_writer(&cli.first, &cli.second, &ReportConfig::default(), &mut out)
}

/// Gather headers, their difference and both previews
///
/// Steps run in order and the first failure aborts the rest.
pub fn compare_files(first: &Path, second: &Path, config: &ReportConfig) -> Result<ComparisonReport> {
    log::debug!("Comparing {} with {}", first.display(), second.display());

    let first_header = read_header(first)?;
    let second_header = read_header(second)?;

    let diff = HeaderDiff::compute(&first_header, &second_header);

    let first_preview = read_preview(first, config.preview_rows)?;
    let second_preview = read_preview(second, config.preview_rows)?;

    Ok(ComparisonReport {
        first_path: first.to_path_buf(),
        second_path: second.to_path_buf(),
        first_columns: first_header.len(),
        second_columns: second_header.len(),
        diff,
        first_preview,
        second_preview,
    })
}

/// Compare two files and write the rendered report
///
/// Nothing is written unless every read succeeds.
pub fn compare_to_writer<W: Write>(
    first: &Path,
    second: &Path,
    config: &ReportConfig,
    out: &mut W,
) -> Result<()> {
    let report = compare_files(first, second, config)?;
    let text = ReportRenderer::new(*config).render(&report);

    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}
