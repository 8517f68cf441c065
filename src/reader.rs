//! Streaming CSV access: the header record and a bounded preview
//!
//! Each read opens its own [`CsvSource`], pulls only the records it needs
//! and drops the source (closing the file) before returning, on success and
//! on error alike. Nothing past the requested records is parsed.

use crate::error::{HeaderDiffError, Result};
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

const DELIMITER: u8 = b',';
const QUOTE: u8 = b'"';
const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// One parsed CSV record as an ordered list of fields
pub type Record = Vec<String>;

/// Header record plus the leading data records of a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    /// Record 0 is the header, the rest are data rows in file order
    pub records: Vec<Record>,
}

impl Preview {
    pub fn header(&self) -> &[String] {
        self.records.first().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn data_rows(&self) -> &[Record] {
        self.records.get(1..).unwrap_or(&[])
    }

    /// Total record count, header included
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Where the boundary scanner is within the current record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    FieldStart,
    Unquoted,
    Quoted,
    QuoteInQuoted,
}

/// An open CSV file that yields records on demand
///
/// Record boundaries are found here so that blank lines come back as empty
/// records instead of being skipped; the fields of each non-blank record
/// are parsed by the `csv` crate.
pub struct CsvSource {
    path: PathBuf,
    input: BufReader<File>,
    builder: ReaderBuilder,
    raw: Vec<u8>,
    record: StringRecord,
    records_read: usize,
}

impl CsvSource {
    /// Open a file for record-at-a-time reading
    pub fn open(path: &Path) -> Result<Self> {
        let metadata =
            std::fs::metadata(path).map_err(|e| HeaderDiffError::file_access(path, e))?;
        if !metadata.is_file() {
            return Err(HeaderDiffError::not_a_file(path));
        }

        let file = File::open(path).map_err(|e| HeaderDiffError::file_access(path, e))?;
        let mut input = BufReader::new(file);
        skip_bom(&mut input).map_err(|e| HeaderDiffError::file_access(path, e))?;

        // flexible because preview rows may be ragged
        let mut builder = ReaderBuilder::new();
        builder
            .delimiter(DELIMITER)
            .quote(QUOTE)
            .has_headers(false)
            .flexible(true);

        log::debug!("Opened {}", path.display());

        Ok(Self {
            path: path.to_path_buf(),
            input,
            builder,
            raw: Vec::new(),
            record: StringRecord::new(),
            records_read: 0,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of records parsed so far, blank ones included
    pub fn records_read(&self) -> usize {
        self.records_read
    }

    /// Parse the next record, or `None` at end of input
    ///
    /// A blank line yields an empty record.
    pub fn next_record(&mut self) -> Result<Option<Record>> {
        let found = self
            .scan_record()
            .map_err(|e| HeaderDiffError::file_access(&self.path, e))?;
        if !found {
            return Ok(None);
        }
        self.records_read += 1;

        if self.raw.is_empty() {
            return Ok(Some(Vec::new()));
        }

        let mut reader = self.builder.from_reader(self.raw.as_slice());
        let more = reader
            .read_record(&mut self.record)
            .map_err(|e| HeaderDiffError::parse(&self.path, e))?;
        if !more {
            return Ok(Some(Vec::new()));
        }

        Ok(Some(self.record.iter().map(str::to_string).collect()))
    }

    /// Parse the first record, failing if the input has none
    pub fn header(&mut self) -> Result<Record> {
        self.next_record()?
            .ok_or_else(|| HeaderDiffError::empty_file(&self.path))
    }

    /// Copy the bytes of one record, minus its terminator, into `raw`
    ///
    /// Returns false only when the input is exhausted before any byte.
    /// `\n`, `\r\n` and a lone `\r` end a record outside quotes.
    fn scan_record(&mut self) -> std::io::Result<bool> {
        self.raw.clear();
        let mut state = ScanState::FieldStart;
        let mut consumed_any = false;

        loop {
            let byte = match next_byte(&mut self.input)? {
                Some(byte) => byte,
                None => return Ok(consumed_any),
            };
            consumed_any = true;

            let ends_record = match state {
                ScanState::Quoted => {
                    if byte == QUOTE {
                        state = ScanState::QuoteInQuoted;
                    }
                    false
                }
                _ if byte == b'\n' || byte == b'\r' => true,
                ScanState::QuoteInQuoted if byte == QUOTE => {
                    state = ScanState::Quoted;
                    false
                }
                ScanState::FieldStart if byte == QUOTE => {
                    state = ScanState::Quoted;
                    false
                }
                _ if byte == DELIMITER => {
                    state = ScanState::FieldStart;
                    false
                }
                _ => {
                    state = ScanState::Unquoted;
                    false
                }
            };

            if ends_record {
                if byte == b'\r' && peek_byte(&mut self.input)? == Some(b'\n') {
                    self.input.consume(1);
                }
                return Ok(true);
            }
            self.raw.push(byte);
        }
    }
}

fn peek_byte<R: BufRead>(input: &mut R) -> std::io::Result<Option<u8>> {
    Ok(input.fill_buf()?.first().copied())
}

fn next_byte<R: BufRead>(input: &mut R) -> std::io::Result<Option<u8>> {
    let byte = peek_byte(input)?;
    if byte.is_some() {
        input.consume(1);
    }
    Ok(byte)
}

/// Drop a UTF-8 byte order mark at the very start of the input
fn skip_bom<R: BufRead>(input: &mut R) -> std::io::Result<()> {
    if input.fill_buf()?.starts_with(UTF8_BOM) {
        input.consume(UTF8_BOM.len());
    }
    Ok(())
}

/// Read only the header record of a CSV file
pub fn read_header(path: &Path) -> Result<Record> {
    let mut source = CsvSource::open(path)?;
    let header = source.header()?;
    log::debug!("Read header of {}: {} columns", path.display(), header.len());
    Ok(header)
}

/// Read the header and at most `rows` data records of a CSV file
///
/// A file with fewer data rows yields a shorter preview without error.
pub fn read_preview(path: &Path, rows: usize) -> Result<Preview> {
    let mut source = CsvSource::open(path)?;

    let mut records = Vec::with_capacity(rows + 1);
    records.push(source.header()?);

    while records.len() <= rows {
        match source.next_record()? {
            Some(record) => records.push(record),
            None => break,
        }
    }

    log::debug!(
        "Read preview of {}: {} records parsed",
        source.path().display(),
        source.records_read()
    );

    Ok(Preview { records })
}
