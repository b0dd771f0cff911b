//! # Schema Compilation
//!
//! Loads the joke schema document, compiles it into a `jsonschema`
//! validator, and exposes per-record validation through
//! [`jaas_core::RecordValidator`].
//!
//! The schema is self-contained: it declares no cross-document `$ref`s, so
//! compilation needs no external resolution and never touches the network.

use std::path::Path;

use jsonschema::Validator;
use serde_json::Value;
use thiserror::Error;

use jaas_core::{RecordValidator, Violation};

/// Error loading or compiling the schema document.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The schema file could not be read.
    #[error("cannot read schema '{path}': {reason}")]
    Read {
        /// Path to the schema file.
        path: String,
        /// Reason the read failed.
        reason: String,
    },

    /// The schema file is not valid JSON.
    #[error("invalid JSON in schema '{path}': {reason}")]
    Parse {
        /// Path to the schema file.
        path: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// The schema parsed but could not be compiled into a validator.
    #[error("schema does not compile: {reason}")]
    Compile {
        /// Compiler diagnostic.
        reason: String,
    },
}

/// A compiled joke schema.
///
/// Compilation happens once at construction; validation of individual
/// records is then read-only. `CompiledSchema` is `Send + Sync`, although
/// the validation run itself is single-threaded.
#[derive(Debug)]
pub struct CompiledSchema {
    schema: Value,
    validator: Validator,
}

impl CompiledSchema {
    /// Load and compile the schema at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Read`] if the file cannot be read,
    /// [`SchemaError::Parse`] if it is not valid JSON, and
    /// [`SchemaError::Compile`] if the parsed document is not a valid
    /// schema.
    pub fn load(path: &Path) -> Result<Self, SchemaError> {
        let content = std::fs::read_to_string(path).map_err(|e| SchemaError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let schema: Value = serde_json::from_str(&content).map_err(|e| SchemaError::Parse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        Self::from_value(schema)
    }

    /// Compile an already-parsed schema document.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Compile`] if the document is not a valid
    /// Draft 2020-12 schema.
    pub fn from_value(schema: Value) -> Result<Self, SchemaError> {
        let validator = jsonschema::options()
            .with_draft(jsonschema::Draft::Draft202012)
            .build(&schema)
            .map_err(|e| SchemaError::Compile {
                reason: e.to_string(),
            })?;

        Ok(Self { schema, validator })
    }

    /// The parsed schema document.
    pub fn schema(&self) -> &Value {
        &self.schema
    }

    /// True if `record` satisfies the schema.
    pub fn is_valid(&self, record: &Value) -> bool {
        self.validator.is_valid(record)
    }
}

impl RecordValidator for CompiledSchema {
    fn violations(&self, record: &Value) -> Vec<Violation> {
        self.validator
            .iter_errors(record)
            .map(|e| Violation {
                instance_path: e.instance_path.to_string(),
                schema_path: e.schema_path.to_string(),
                message: e.to_string(),
            })
            .collect()
    }
}
