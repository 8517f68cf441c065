//! Edge case tests for CSV content

use crate::common::TestFixture;
use headdiff::reader::{read_header, read_preview};
use headdiff::commands::compare_files;
use headdiff::{HeaderDiffError, ReportConfig, ReportRenderer};

#[test]
fn test_empty_file_is_parse_error() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.create_csv_raw("empty.csv", "").unwrap();

    let err = read_header(&path).unwrap_err();
    assert!(err.is_parse());
    assert!(matches!(err, HeaderDiffError::EmptyFile { .. }));

    let err = read_preview(&path, 3).unwrap_err();
    assert!(matches!(err, HeaderDiffError::EmptyFile { .. }));
}

#[test]
fn test_header_with_invalid_utf8_is_parse_error() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.create_csv_raw("latin1.csv", b"id,caf\xe9\n1,2\n").unwrap();

    let err = read_header(&path).unwrap_err();
    assert!(matches!(err, HeaderDiffError::Parse { .. }));
    assert!(err.to_string().contains("latin1.csv"));
}

#[test]
fn test_header_read_ignores_broken_later_records() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_csv_raw("broken_body.csv", b"a,b\n\xff\xfe,\xfd\n")
        .unwrap();

    assert_eq!(read_header(&path).unwrap(), vec!["a", "b"]);
}

#[test]
fn test_preview_does_not_parse_past_bound() {
    let fixture = TestFixture::new().unwrap();
    let mut content = b"a,b\n1,2\n3,4\n5,6\n".to_vec();
    content.extend_from_slice(b"\xff\xff,bad\n");
    let path = fixture.create_csv_raw("tail.csv", content).unwrap();

    let preview = read_preview(&path, 3).unwrap();
    assert_eq!(preview.len(), 4);

    // One more row would reach the invalid record
    let err = read_preview(&path, 4).unwrap_err();
    assert!(matches!(err, HeaderDiffError::Parse { .. }));
}

#[test]
fn test_quoted_fields_with_commas_and_newlines() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_csv_raw(
            "quoted.csv",
            "id,\"full name\",\"notes, misc\"\n1,\"Doe, Jane\",\"line one\nline two\"\n2,x,y\n",
        )
        .unwrap();

    let header = read_header(&path).unwrap();
    assert_eq!(header, vec!["id", "full name", "notes, misc"]);

    let preview = read_preview(&path, 3).unwrap();
    assert_eq!(preview.len(), 3);
    assert_eq!(preview.data_rows()[0], vec!["1", "Doe, Jane", "line one\nline two"]);
}

#[test]
fn test_crlf_line_endings() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.create_csv_raw("crlf.csv", "a,b\r\n1,2\r\n").unwrap();

    assert_eq!(read_header(&path).unwrap(), vec!["a", "b"]);
    assert_eq!(read_preview(&path, 3).unwrap().data_rows()[0], vec!["1", "2"]);
}

#[test]
fn test_unicode_column_names() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.create_csv_raw("unicode.csv", "名前,café,🚀\n").unwrap();

    assert_eq!(read_header(&path).unwrap(), vec!["名前", "café", "🚀"]);
}

#[test]
fn test_header_only_file() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.create_csv_raw("header_only.csv", "a,b,c").unwrap();

    let preview = read_preview(&path, 3).unwrap();
    assert_eq!(preview.len(), 1);
    assert_eq!(preview.header(), ["a", "b", "c"]);
}

#[test]
fn test_single_blank_line_is_an_empty_header() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.create_csv_raw("blank.csv", "\n").unwrap();

    assert!(read_header(&path).unwrap().is_empty());

    let preview = read_preview(&path, 3).unwrap();
    assert_eq!(preview.len(), 1);
    assert!(preview.header().is_empty());
}

#[test]
fn test_leading_blank_line_is_the_header() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.create_csv_raw("leading_blank.csv", "\nid,x\n1,2\n").unwrap();

    assert!(read_header(&path).unwrap().is_empty());

    let preview = read_preview(&path, 3).unwrap();
    assert_eq!(preview.data_rows()[0], vec!["id", "x"]);
    assert_eq!(preview.data_rows()[1], vec!["1", "2"]);
}

#[test]
fn test_blank_data_line_keeps_its_place() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.create_csv_raw("gap.csv", "a,b\n\n1,2\n").unwrap();

    let preview = read_preview(&path, 3).unwrap();
    assert_eq!(preview.len(), 3);
    assert!(preview.data_rows()[0].is_empty());
    assert_eq!(preview.data_rows()[1], vec!["1", "2"]);
}

#[test]
fn test_blank_file_reports_zero_columns() {
    let fixture = TestFixture::new().unwrap();
    let blank = fixture.create_csv_raw("blank.csv", "\n").unwrap();
    let other = fixture.create_csv_raw("other.csv", "a\n").unwrap();

    let report = compare_files(&blank, &other, &ReportConfig::default()).unwrap();
    assert_eq!(report.first_columns, 0);
    assert_eq!(report.diff.only_in_second, vec!["a"]);

    let text = ReportRenderer::default().render(&report);
    assert!(text.starts_with("File 1: "));
    assert!(text.contains("  row[0]: cols=0  first_8=[]\n"));
}

#[test]
fn test_leading_bom_is_not_part_of_first_column() {
    let fixture = TestFixture::new().unwrap();
    let with_bom = fixture.create_csv_raw("bom.csv", "\u{feff}id,name\n1,a\n").unwrap();
    let without = fixture.create_csv_raw("plain.csv", "id,name\n").unwrap();

    let report = compare_files(&with_bom, &without, &ReportConfig::default()).unwrap();
    assert!(report.diff.is_empty());
}
