//! CSV source reader with encoding auto-detection.
//!
//! Turns the tile spreadsheet export into [`InputRow`]s. Values stay text
//! here; typing happens in [`crate::transform`].

use std::io::Read;
use std::path::Path;

use crate::error::{SourceError, SourceResult};
use crate::models::InputRow;

/// Options controlling how the source is read.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Field delimiter.
    pub delimiter: u8,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

/// Result of parsing with metadata
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Data rows, in file order
    pub rows: Vec<InputRow>,
    /// Detected encoding
    pub encoding: String,
    /// Column headers
    pub headers: Vec<String>,
}

/// Detect the encoding of raw bytes.
///
/// Valid UTF-8 wins outright. Otherwise chardet picks between the Latin-1
/// family and Windows-1252; anything more exotic is read as Windows-1252,
/// the usual encoding of spreadsheet exports.
pub fn detect_encoding(bytes: &[u8]) -> String {
    if std::str::from_utf8(bytes).is_ok() {
        return "utf-8".to_string();
    }

    let charset = chardet::detect(bytes).0;
    match charset.to_lowercase().as_str() {
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        _ => "windows-1252".to_string(),
    }
}

/// Decode bytes to a string using the specified encoding.
///
/// A leading byte order mark is dropped.
pub fn decode_content(bytes: &[u8], encoding: &str) -> String {
    let decoded = match encoding.to_lowercase().as_str() {
        "utf-8" | "utf8" | "ascii" => String::from_utf8_lossy(bytes),
        "iso-8859-1" | "latin-1" | "latin1" => encoding_rs::ISO_8859_15.decode(bytes).0,
        _ => encoding_rs::WINDOWS_1252.decode(bytes).0,
    };
    decoded.trim_start_matches('\u{feff}').to_string()
}

/// Parse CSV from a reader into rows.
///
/// The first record is the header. Blank lines are skipped. Values are kept
/// exactly as written, surrounding spaces included. A row with a different
/// field count than the header is an error rather than being padded.
pub fn parse_csv<R: Read>(reader: R, options: &ParseOptions) -> SourceResult<(Vec<String>, Vec<InputRow>)> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(true)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()
        .map_err(SourceError::from_csv)?
        .iter()
        .map(str::to_string)
        .collect();

    if headers.iter().all(|h| h.is_empty()) {
        return Err(SourceError::EmptyFile);
    }

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(SourceError::from_csv)?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        rows.push(InputRow::new(
            line,
            headers.iter().map(String::as_str).zip(record.iter()),
        ));
    }

    Ok((headers, rows))
}

/// Parse CSV text with auto-detected encoding.
pub fn parse_bytes(bytes: &[u8], options: &ParseOptions) -> SourceResult<ParseResult> {
    let encoding = detect_encoding(bytes);
    let content = decode_content(bytes, &encoding);
    let (headers, rows) = parse_csv(content.as_bytes(), options)?;

    Ok(ParseResult {
        rows,
        encoding,
        headers,
    })
}

/// Read and parse a CSV file.
///
/// # Example
/// ```ignore
/// let result = parse_csv_file("data.csv", &ParseOptions::default())?;
/// println!("Encoding: {}, rows: {}", result.encoding, result.rows.len());
/// ```
pub fn parse_csv_file<P: AsRef<Path>>(path: P, options: &ParseOptions) -> SourceResult<ParseResult> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_bytes(&bytes, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(csv: &str) -> SourceResult<(Vec<String>, Vec<InputRow>)> {
        parse_csv(csv.as_bytes(), &ParseOptions::default())
    }

    #[test]
    fn test_simple_csv() {
        let (headers, rows) = parse("Index,SpeedFactor\n0,5\n1,3").unwrap();

        assert_eq!(headers, vec!["Index", "SpeedFactor"]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("Index"), Some("0"));
        assert_eq!(rows[0].get("SpeedFactor"), Some("5"));
        assert_eq!(rows[1].get("SpeedFactor"), Some("3"));
    }

    #[test]
    fn test_line_numbers_count_header() {
        let (_, rows) = parse("Index,SpeedFactor\n0,5\n1,3").unwrap();
        assert_eq!(rows[0].line, 2);
        assert_eq!(rows[1].line, 3);
    }

    #[test]
    fn test_quoted_values() {
        let (_, rows) = parse("Index,Name\n4,\"Brick, wall\"").unwrap();
        assert_eq!(rows[0].get("Name"), Some("Brick, wall"));
    }

    #[test]
    fn test_values_not_trimmed() {
        let (_, rows) = parse("Index,IsNPC,Name\n 7 ,\" TRUE\",  padded  ").unwrap();
        assert_eq!(rows[0].get("Index"), Some(" 7 "));
        assert_eq!(rows[0].get("IsNPC"), Some(" TRUE"));
        assert_eq!(rows[0].get("Name"), Some("  padded  "));
    }

    #[test]
    fn test_empty_lines_skipped() {
        let (_, rows) = parse("a,b\n1,2\n\n3,4\n").unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_ragged_row_is_error() {
        let err = parse("a,b,c\n1,2").unwrap_err();
        match err {
            SourceError::Parse { line, message } => {
                assert_eq!(line, 2);
                assert!(message.contains("expected 3 fields"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_csv_error() {
        assert!(matches!(parse(""), Err(SourceError::EmptyFile)));
    }

    #[test]
    fn test_custom_delimiter() {
        let options = ParseOptions { delimiter: b';' };
        let (_, rows) = parse_csv("a;b\n1;2".as_bytes(), &options).unwrap();
        assert_eq!(rows[0].get("b"), Some("2"));
    }

    #[test]
    fn test_utf8_bom_stripped() {
        let bytes = b"\xEF\xBB\xBFIndex,SpeedFactor\n0,1";
        let result = parse_bytes(bytes, &ParseOptions::default()).unwrap();
        assert_eq!(result.headers[0], "Index");
    }

    #[test]
    fn test_windows_1252_decoding() {
        // "Pav\xe9" is "Pavé" in Windows-1252 and invalid as UTF-8.
        let bytes: &[u8] = b"Index,Name\n1,Pav\xe9";
        let decoded = decode_content(bytes, "windows-1252");
        assert!(decoded.ends_with("Pavé"));
    }

    #[test]
    fn test_detect_encoding() {
        assert_eq!(detect_encoding(b"Index,Name\n1,Grass"), "utf-8");
        assert_eq!(detect_encoding("Index,Name\n1,Pavé".as_bytes()), "utf-8");

        let latin = detect_encoding(b"Index,Name\n1,Pav\xe9");
        assert!(latin == "iso-8859-1" || latin == "windows-1252");
    }

    #[test]
    fn test_missing_file() {
        let err = parse_csv_file("/nonexistent/tiles.csv", &ParseOptions::default()).unwrap_err();
        assert!(matches!(err, SourceError::Io { .. }));
    }
}
