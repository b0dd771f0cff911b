//! # Error Types — Fatal Dataset Failures
//!
//! Failures that halt a validation run before the per-record pass can
//! occur. All errors use `thiserror` for derive-based `Display` and
//! `Error` implementations.
//!
//! Per-record defects (duplicate identifiers, schema violations, unknown
//! categories) are not errors in this sense: they are accumulated into the
//! [`DatasetReport`](crate::report::DatasetReport) and the pass always runs
//! to completion once loading succeeds.

use thiserror::Error;

/// Fatal failure loading the dataset document.
#[derive(Error, Debug)]
pub enum DatasetError {
    /// The dataset file could not be read.
    #[error("cannot read dataset '{path}': {reason}")]
    Read {
        /// Path to the dataset file.
        path: String,
        /// Reason the read failed.
        reason: String,
    },

    /// The dataset file is not valid JSON.
    #[error("invalid JSON in dataset '{path}': {reason}")]
    Parse {
        /// Path to the dataset file.
        path: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// The dataset parsed, but its top-level value is not an array.
    #[error("dataset '{path}' must be an array of joke records, found {found}")]
    NotAnArray {
        /// Path to the dataset file.
        path: String,
        /// JSON kind of the top-level value that was found.
        found: String,
    },
}
