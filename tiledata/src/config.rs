//! Conversion settings and source location resolution.

use std::path::{Path, PathBuf};

use crate::output::DEFAULT_INDENT;
use crate::parser::ParseOptions;

/// Source file used when neither the command line nor the environment names one.
pub const DEFAULT_SOURCE: &str = "data.csv";

/// Environment variable naming the source file (also read from `.env`).
pub const SOURCE_ENV_VAR: &str = "TILEDATA_SOURCE";

/// Options for the conversion pipeline
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// CSV reading options
    pub parse: ParseOptions,

    /// Spaces per indentation level in the output document
    pub indent: usize,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            parse: ParseOptions::default(),
            indent: DEFAULT_INDENT,
        }
    }
}

/// Pick the source path: explicit argument, then environment, then default.
pub fn resolve_source(cli: Option<&Path>) -> PathBuf {
    resolve_source_with(cli, std::env::var(SOURCE_ENV_VAR).ok())
}

fn resolve_source_with(cli: Option<&Path>, env: Option<String>) -> PathBuf {
    if let Some(path) = cli {
        return path.to_path_buf();
    }
    match env {
        Some(value) if !value.trim().is_empty() => PathBuf::from(value.trim()),
        _ => PathBuf::from(DEFAULT_SOURCE),
    }
}
