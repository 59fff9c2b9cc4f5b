//! Rendering and writing the tile catalog document.

use std::io::Write;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::{OutputError, OutputResult};
use crate::models::TileCatalog;

/// Indentation used by the original tile tools.
pub const DEFAULT_INDENT: usize = 3;

/// Render the catalog as an indented JSON object of objects.
///
/// Keys follow catalog order; inside a record the typed fields come first,
/// then passthrough columns sorted by name.
pub fn serialize(catalog: &TileCatalog, indent: usize) -> OutputResult<String> {
    let indent = " ".repeat(indent);
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());

    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    catalog.serialize(&mut ser)?;

    Ok(String::from_utf8(buf)?)
}

/// Parse a rendered document back into a catalog.
pub fn deserialize(json: &str) -> OutputResult<TileCatalog> {
    Ok(serde_json::from_str(json)?)
}

/// Write the document to `path`, or to stdout when no path is given.
pub fn write_output(content: &str, path: Option<&Path>) -> OutputResult<()> {
    match path {
        Some(p) => std::fs::write(p, format!("{}\n", content)).map_err(|source| OutputError::Io {
            path: p.to_path_buf(),
            source,
        }),
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", content)
                .and_then(|_| handle.flush())
                .map_err(|source| OutputError::Io {
                    path: "<stdout>".into(),
                    source,
                })
        }
    }
}
