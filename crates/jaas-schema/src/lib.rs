//! # jaas-schema — Joke Schema Compilation & Validation
//!
//! Provides runtime JSON Schema validation for joke records, backed by the
//! `jsonschema` crate (Draft 2020-12).
//!
//! The schema document is loaded and compiled exactly once per run;
//! [`CompiledSchema`] then implements [`jaas_core::RecordValidator`] so the
//! validation pass can check each record through the capability trait
//! without knowing about the schema engine.
//!
//! Records that fail validation are rejected with structured violation
//! information: the instance path of the violating field, the schema path
//! that triggered it, and a human-readable message.
//!
//! ## Crate Policy
//!
//! - Depends only on `jaas-core` internally.
//! - The schema is a trust boundary: a schema that does not compile is a
//!   fatal error, never silently downgraded to accept-everything.

pub mod validate;

pub use validate::{CompiledSchema, SchemaError};
