//! Field coercion from CSV text to typed values.

use crate::error::{TransformError, TransformResult};

/// The only text that coerces to `true`.
pub const TRUE_SENTINEL: &str = "TRUE";

/// Sentinel-match boolean: exactly `"TRUE"` is true, anything else is false.
///
/// Case-sensitive and exact. `"true"`, `"True"`, `"1"` and `""` are all false.
pub fn to_bool(text: &str) -> bool {
    text == TRUE_SENTINEL
}

/// Parse a decimal integer, tolerating surrounding whitespace and a sign.
pub fn to_integer(line: u64, field: &str, text: &str) -> TransformResult<i64> {
    text.trim()
        .parse::<i64>()
        .map_err(|source| TransformError::MalformedField {
            line,
            field: field.to_string(),
            value: text.to_string(),
            source,
        })
}
