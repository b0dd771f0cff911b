//! # Dataset Loading
//!
//! Reads the dataset document from disk, parses it as JSON, and enforces
//! the top-level shape contract: the value must be an array of records.
//!
//! Any failure here is fatal to the run; nothing downstream can proceed
//! without a loaded dataset.

use std::path::Path;

use serde_json::Value;

use crate::error::DatasetError;

/// Load the dataset at `path` as an array of joke records.
///
/// # Errors
///
/// Returns [`DatasetError::Read`] if the file cannot be read,
/// [`DatasetError::Parse`] if it is not valid JSON, and
/// [`DatasetError::NotAnArray`] if the top-level value is not an array.
pub fn load_dataset(path: &Path) -> Result<Vec<Value>, DatasetError> {
    let content = std::fs::read_to_string(path).map_err(|e| DatasetError::Read {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let value: Value = serde_json::from_str(&content).map_err(|e| DatasetError::Parse {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    match value {
        Value::Array(records) => Ok(records),
        other => Err(DatasetError::NotAnArray {
            path: path.display().to_string(),
            found: json_kind(&other).to_string(),
        }),
    }
}

/// JSON kind name for shape diagnostics.
fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
