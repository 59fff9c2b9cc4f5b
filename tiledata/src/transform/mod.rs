//! Transformation module.
//!
//! - Coerce: text to integer / sentinel boolean
//! - Catalog: rows to keyed tile records
//! - Pipeline: parse, build and render in one call

pub mod catalog;
pub mod coerce;
pub mod pipeline;

pub use catalog::{build_catalog, transform_row};
pub use coerce::{to_bool, to_integer, TRUE_SENTINEL};
pub use pipeline::{convert_bytes, convert_file, ConvertResult, SourceInfo};
