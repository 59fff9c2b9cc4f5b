//! High-level pipeline: CSV source to rendered tile catalog.
//!
//! # Example
//!
//! ```rust,ignore
//! use tiledata::{convert_file, ConvertOptions};
//!
//! let result = convert_file(Path::new("data.csv"), &ConvertOptions::default())?;
//! println!("{}", result.json);
//! ```

use std::collections::HashSet;
use std::path::Path;

use crate::config::ConvertOptions;
use crate::error::PipelineResult;
use crate::logs::{log_info, log_info_indent, log_success, log_warning, log_warning_indent};
use crate::models::{is_known_column, InputRow, TileCatalog, INDEX_COLUMN};
use crate::output::serialize;
use crate::parser::{parse_bytes, parse_csv_file, ParseResult};

use super::catalog::build_catalog;

/// Source file information
#[derive(Debug, Clone)]
pub struct SourceInfo {
    pub encoding: String,
    pub headers: Vec<String>,
    pub row_count: usize,
}

/// Result of a complete conversion
#[derive(Debug, Clone)]
pub struct ConvertResult {
    pub catalog: TileCatalog,
    /// Rendered JSON document
    pub json: String,
    pub source: SourceInfo,
}

/// Convert a CSV file into a rendered tile catalog.
///
/// Nothing is written anywhere; the caller decides where `json` goes once
/// the whole conversion has succeeded.
pub fn convert_file(path: &Path, options: &ConvertOptions) -> PipelineResult<ConvertResult> {
    log_info(format!("Reading {}", path.display()));
    let parsed = parse_csv_file(path, &options.parse)?;
    convert_parsed(parsed, options)
}

/// Convert in-memory CSV bytes.
pub fn convert_bytes(bytes: &[u8], options: &ConvertOptions) -> PipelineResult<ConvertResult> {
    let parsed = parse_bytes(bytes, &options.parse)?;
    convert_parsed(parsed, options)
}

fn convert_parsed(parsed: ParseResult, options: &ConvertOptions) -> PipelineResult<ConvertResult> {
    log_info_indent(format!("Encoding: {}", parsed.encoding), 1);
    log_info_indent(format!("Columns: {}", parsed.headers.join(", ")), 1);
    log_info_indent(format!("Rows: {}", parsed.rows.len()), 1);

    report_passthrough_columns(&parsed.headers);
    report_duplicates(&parsed.rows);

    let catalog = build_catalog(&parsed.rows)?;
    log_success(format!("Built {} tile records", catalog.len()));

    let json = serialize(&catalog, options.indent)?;

    Ok(ConvertResult {
        source: SourceInfo {
            encoding: parsed.encoding,
            row_count: parsed.rows.len(),
            headers: parsed.headers,
        },
        catalog,
        json,
    })
}

fn report_passthrough_columns(headers: &[String]) {
    let unknown: Vec<&str> = headers
        .iter()
        .map(String::as_str)
        .filter(|h| !is_known_column(h))
        .collect();

    if !unknown.is_empty() {
        log_warning(format!("Copying unrecognised columns as text: {}", unknown.join(", ")));
    }
}

fn report_duplicates(rows: &[InputRow]) {
    let mut seen = HashSet::new();
    for row in rows {
        if let Some(id) = row.get(INDEX_COLUMN) {
            if !seen.insert(id) {
                log_warning_indent(
                    format!("Line {}: Index '{}' repeated, replacing earlier row", row.line, id),
                    1,
                );
            }
        }
    }
}
