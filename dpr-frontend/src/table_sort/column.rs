//! Column identifier resolution.

use serde_json::Value;

use crate::error::SortError;

/// Sentinel returned by [`column_index_value`] when no header matches.
pub const NOT_FOUND: i64 = -1;

/// Position of the first header whose identifier equals `column`.
///
/// `headers` yields each header's logical identifier, `None` for headers that
/// do not declare one. An empty `column` never matches.
pub fn column_index<'a>(
    headers: impl IntoIterator<Item = Option<&'a str>>,
    column: &str,
) -> Option<usize> {
    if column.is_empty() {
        return None;
    }
    headers.into_iter().position(|header| header == Some(column))
}

/// Loosely typed variant of [`column_index`] for untyped input.
///
/// `headers` must be an array whose items are identifier strings (anything
/// else counts as a header without an identifier) and `column` must be a
/// string. Returns the index or [`NOT_FOUND`].
pub fn column_index_value(headers: &Value, column: &Value) -> Result<i64, SortError> {
    let Value::Array(headers) = headers else {
        return Err(SortError::Type("headers must be an array"));
    };
    let Value::String(column) = column else {
        return Err(SortError::Type("column must be a string"));
    };

    let index = column_index(headers.iter().map(Value::as_str), column);
    Ok(index.map_or(NOT_FOUND, |i| i as i64))
}
