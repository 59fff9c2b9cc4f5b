//! # tiledata - tile definition table to JSON catalog
//!
//! Converts the tile metadata spreadsheet (exported as CSV) into a typed JSON
//! document keyed by tile `Index`, ready for the game to load at startup.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   CSV File  │────▶│   Parser    │────▶│  Transform  │────▶│ Catalog JSON│
//! │ (UTF8/1252) │     │ (auto-enc)  │     │  (coerce)   │     │  (indented) │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tiledata::{convert_file, ConvertOptions};
//!
//! let result = convert_file(Path::new("data.csv"), &ConvertOptions::default())?;
//! println!("{}", result.json);
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`models`] - Rows, tile records and the catalog
//! - [`parser`] - CSV reading with encoding detection
//! - [`transform`] - Coercion, catalog building and the pipeline
//! - [`output`] - JSON rendering and writing
//! - [`config`] - Options and source resolution
//! - [`logs`] - Progress logging on stderr

// Core modules
pub mod error;
pub mod models;

// Ambient
pub mod config;
pub mod logs;

// Parsing
pub mod parser;

// Transformation
pub mod transform;

// Output
pub mod output;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{OutputError, PipelineError, SourceError, TransformError};

pub use models::{InputRow, TileCatalog, TileRecord};

pub use parser::{parse_csv, parse_csv_file, ParseOptions, ParseResult};

pub use transform::{build_catalog, convert_bytes, convert_file, ConvertResult, SourceInfo};

pub use output::{serialize, write_output};

pub use config::{resolve_source, ConvertOptions};
