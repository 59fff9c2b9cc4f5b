//! Error types for the tile data conversion pipeline.
//!
//! - [`SourceError`] - reading and parsing the CSV source
//! - [`TransformError`] - coercing rows into typed tile records
//! - [`OutputError`] - rendering and writing the JSON document
//! - [`PipelineError`] - top-level orchestration errors
//!
//! Every error is fatal: nothing in the pipeline recovers locally, and
//! `From` conversions let `?` carry errors up to the binary.

use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

// =============================================================================
// Source Errors
// =============================================================================

/// Errors while accessing or parsing the tabular source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The source file cannot be opened or read.
    #[error("Cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source has no header row.
    #[error("CSV source is empty")]
    EmptyFile,

    /// Malformed CSV (bad quoting, ragged rows, invalid UTF-8 after decoding).
    #[error("Line {line}: {message}")]
    Parse { line: u64, message: String },
}

impl SourceError {
    pub(crate) fn from_csv(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        let message = match err.kind() {
            csv::ErrorKind::UnequalLengths { expected_len, len, .. } => {
                format!("expected {} fields, found {}", expected_len, len)
            }
            _ => err.to_string(),
        };
        SourceError::Parse { line, message }
    }
}

// =============================================================================
// Transformation Errors
// =============================================================================

/// Errors while building the tile catalog.
#[derive(Debug, Error)]
pub enum TransformError {
    /// A numeric column holds text that is not a decimal integer.
    #[error("Line {line}, column '{field}' (value '{value}'): not a decimal integer")]
    MalformedField {
        line: u64,
        field: String,
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// A required column is absent from the row.
    #[error("Line {line}: missing column '{field}'")]
    MissingField { line: u64, field: String },
}

// =============================================================================
// Output Errors
// =============================================================================

/// Errors while rendering or writing the output document.
#[derive(Debug, Error)]
pub enum OutputError {
    /// The catalog could not be rendered as JSON.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The rendered document is not valid UTF-8.
    #[error("Rendered document is not UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    /// The output file could not be written.
    #[error("Cannot write '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level error returned by [`crate::transform::pipeline::convert_file`].
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    #[error("Transform error: {0}")]
    Transform(#[from] TransformError),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

pub type SourceResult<T> = Result<T, SourceError>;

pub type TransformResult<T> = Result<T, TransformError>;

pub type OutputResult<T> = Result<T, OutputError>;

pub type PipelineResult<T> = Result<T, PipelineError>;
