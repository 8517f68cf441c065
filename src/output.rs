//! Plain-text report formatting

use crate::diff::HeaderDiff;
use crate::reader::Preview;
use crate::{MAX_LISTED_COLUMNS, PREVIEW_FIELDS, PREVIEW_ROWS};
use std::fmt::{self, Write};
use std::path::{Path, PathBuf};

/// Fixed limits applied when rendering a report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportConfig {
    /// Data rows per preview, header excluded
    pub preview_rows: usize,
    /// Column names listed per difference section before summarising
    pub max_listed: usize,
    /// Fields shown per preview record
    pub preview_fields: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            preview_rows: PREVIEW_ROWS,
            max_listed: MAX_LISTED_COLUMNS,
            preview_fields: PREVIEW_FIELDS,
        }
    }
}

/// Everything gathered for one comparison of two files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonReport {
    pub first_path: PathBuf,
    pub second_path: PathBuf,
    pub first_columns: usize,
    pub second_columns: usize,
    pub diff: HeaderDiff,
    pub first_preview: Preview,
    pub second_preview: Preview,
}

/// Renders a [`ComparisonReport`] as human-readable text
#[derive(Debug, Clone, Default)]
pub struct ReportRenderer {
    config: ReportConfig,
}

impl ReportRenderer {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    /// Render the whole report into a string
    pub fn render(&self, report: &ComparisonReport) -> String {
        Rendered {
            renderer: self,
            report,
        }
        .to_string()
    }

    pub fn write_to<W: Write>(&self, report: &ComparisonReport, out: &mut W) -> fmt::Result {
        writeln!(out, "File 1: {}  columns={}", report.first_path.display(), report.first_columns)?;
        writeln!(out, "File 2: {}  columns={}", report.second_path.display(), report.second_columns)?;
        writeln!(out)?;

        self.write_column_list(out, "Only in file 1", &report.diff.only_in_first)?;
        self.write_column_list(out, "Only in file 2", &report.diff.only_in_second)?;

        self.write_preview(out, &report.first_path, &report.first_preview)?;
        self.write_preview(out, &report.second_path, &report.second_preview)?;

        Ok(())
    }

    fn write_column_list<W: Write>(&self, out: &mut W, title: &str, columns: &[String]) -> fmt::Result {
        writeln!(out, "{} ({}):", title, columns.len())?;
        for column in columns.iter().take(self.config.max_listed) {
            writeln!(out, "  - {}", column)?;
        }
        if columns.len() > self.config.max_listed {
            writeln!(out, "  ... ({} more)", columns.len() - self.config.max_listed)?;
        }
        writeln!(out)
    }

    fn write_preview<W: Write>(&self, out: &mut W, path: &Path, preview: &Preview) -> fmt::Result {
        writeln!(
            out,
            "Preview: {} (header + {} rows)",
            path.display(),
            self.config.preview_rows
        )?;
        for (i, record) in preview.records.iter().enumerate() {
            let shown = &record[..record.len().min(self.config.preview_fields)];
            writeln!(
                out,
                "  row[{}]: cols={}  first_{}={}",
                i,
                record.len(),
                self.config.preview_fields,
                quoted_list(shown)
            )?;
        }
        writeln!(out)
    }
}

struct Rendered<'a> {
    renderer: &'a ReportRenderer,
    report: &'a ComparisonReport,
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.renderer.write_to(self.report, f)
    }
}

/// Format fields as a bracketed list of quoted strings: `['id', 'it\'s']`
fn quoted_list(fields: &[String]) -> String {
    let quoted: Vec<String> = fields.iter().map(|field| quote_field(field)).collect();
    format!("[{}]", quoted.join(", "))
}

/// Single-quote a field, switching to double quotes when that avoids escaping
fn quote_field(field: &str) -> String {
    let quote = if field.contains('\'') && !field.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(field.len() + 2);
    out.push(quote);
    for c in field.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() || (c.is_whitespace() && c != ' ') => {
                let code = c as u32;
                if code <= 0xff {
                    out.push_str(&format!("\\x{:02x}", code));
                } else if code <= 0xffff {
                    out.push_str(&format!("\\u{:04x}", code));
                } else {
                    out.push_str(&format!("\\U{:08x}", code));
                }
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}
