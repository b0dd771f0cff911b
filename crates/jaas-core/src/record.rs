//! # Record Access & Schema Capability
//!
//! Field accessors for opaque joke records and the [`RecordValidator`]
//! capability trait the validation pass uses for structural checks.
//!
//! Records are `serde_json::Value` objects. The invariant checks read only
//! `id` and `category`; every other field is the schema's concern.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// The `id` field of a record, if present as a string.
pub fn record_id(record: &Value) -> Option<&str> {
    record.get("id").and_then(Value::as_str)
}

/// The `category` field of a record, if present as a non-empty string.
pub fn record_category(record: &Value) -> Option<&str> {
    record
        .get("category")
        .and_then(Value::as_str)
        .filter(|category| !category.is_empty())
}

/// A single schema constraint violation with structured context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// JSON Pointer path to the violating field in the record.
    pub instance_path: String,
    /// JSON Pointer path within the schema that triggered the error.
    pub schema_path: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "(root): {}", self.message)
        } else {
            write!(f, "{}: {}", self.instance_path, self.message)
        }
    }
}

/// Capability to validate a record's structure against a compiled schema.
///
/// Models compile(schema) → validate(record) → violations. The validation
/// pass depends only on this trait; `jaas-schema` provides the
/// `jsonschema`-backed implementation.
pub trait RecordValidator {
    /// All constraint violations for `record`, empty when the record is valid.
    fn violations(&self, record: &Value) -> Vec<Violation>;
}
